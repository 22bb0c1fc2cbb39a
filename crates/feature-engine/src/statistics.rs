//! Weighted Property Statistics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistic aggregated over the elements of a composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statistic {
    Minimum,
    Maximum,
    Mean,
    Range,
    StdDev,
}

impl Statistic {
    pub const ALL: [Statistic; 5] = [
        Statistic::Minimum,
        Statistic::Maximum,
        Statistic::Mean,
        Statistic::Range,
        Statistic::StdDev,
    ];

    /// Name used in feature column labels
    pub fn as_str(&self) -> &'static str {
        match self {
            Statistic::Minimum => "minimum",
            Statistic::Maximum => "maximum",
            Statistic::Mean => "mean",
            Statistic::Range => "range",
            Statistic::StdDev => "std_dev",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistics of one elemental property over a composition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyStats {
    /// Smallest element value
    pub min: f64,
    /// Largest element value
    pub max: f64,
    /// Fraction-weighted mean
    pub mean: f64,
    /// max − min
    pub range: f64,
    /// Fraction-weighted population standard deviation
    pub std_dev: f64,
}

impl PropertyStats {
    /// Compute statistics from per-element values and their weights.
    ///
    /// Min and max ignore weights; mean and std_dev are normalized by the
    /// weight total. A NaN value propagates into every statistic it touches.
    pub fn compute(values: &[f64], weights: &[f64]) -> Self {
        debug_assert_eq!(values.len(), weights.len());
        if values.is_empty() {
            return Self::default();
        }

        let min = values.iter().cloned().fold(f64::INFINITY, nan_min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, nan_max);

        let total_weight: f64 = weights.iter().sum();
        let mean = values
            .iter()
            .zip(weights)
            .map(|(v, w)| v * w)
            .sum::<f64>()
            / total_weight;

        let variance = values
            .iter()
            .zip(weights)
            .map(|(v, w)| w * (v - mean) * (v - mean))
            .sum::<f64>()
            / total_weight;
        let std_dev = if variance < 0.0 { 0.0 } else { variance.sqrt() };

        Self {
            min,
            max,
            mean,
            range: max - min,
            std_dev,
        }
    }

    /// Value of a single statistic
    pub fn get(&self, statistic: Statistic) -> f64 {
        match statistic {
            Statistic::Minimum => self.min,
            Statistic::Maximum => self.max,
            Statistic::Mean => self.mean,
            Statistic::Range => self.range,
            Statistic::StdDev => self.std_dev,
        }
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_weights() {
        let stats = PropertyStats::compute(&[1.0, 2.0, 3.0, 4.0, 5.0], &[0.2; 5]);
        assert!((stats.mean - 3.0).abs() < 1e-12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.range, 4.0);
        assert!((stats.std_dev - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_mean() {
        // Fe2O3-like weights
        let stats = PropertyStats::compute(&[26.0, 8.0], &[0.4, 0.6]);
        assert!((stats.mean - 15.2).abs() < 1e-12);
        assert!((stats.std_dev - (0.24_f64 * 18.0 * 18.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_unnormalized_weights() {
        let a = PropertyStats::compute(&[1.0, 3.0], &[2.0, 2.0]);
        let b = PropertyStats::compute(&[1.0, 3.0], &[0.5, 0.5]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_value() {
        let stats = PropertyStats::compute(&[7.5], &[1.0]);
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.range, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_nan_propagates() {
        let stats = PropertyStats::compute(&[1.0, f64::NAN], &[0.5, 0.5]);
        assert!(stats.min.is_nan());
        assert!(stats.max.is_nan());
        assert!(stats.mean.is_nan());
        assert!(stats.std_dev.is_nan());
    }

    #[test]
    fn test_empty_values() {
        let stats = PropertyStats::compute(&[], &[]);
        assert_eq!(stats, PropertyStats::default());
    }

    #[test]
    fn test_statistic_lookup() {
        let stats = PropertyStats::compute(&[2.0, 4.0], &[0.5, 0.5]);
        let got: Vec<f64> = Statistic::ALL.iter().map(|s| stats.get(*s)).collect();
        assert_eq!(got, vec![2.0, 4.0, 3.0, 2.0, 1.0]);
    }
}
