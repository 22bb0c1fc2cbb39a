//! Feature Engineering Engine
//!
//! Assembles one feature row per compound from elemental property
//! statistics and, optionally, the scalar compound descriptors.

mod error;
mod features;
mod matrix;
mod statistics;

pub use error::FeaturizeError;
pub use features::{ElementFeaturizer, ElementPropertyFeaturizer, FEATURE_DIMENSION, LABEL_PREFIX};
pub use matrix::{
    Compound, FeatureConfig, FeatureMatrix, FeatureMatrixBuilder, FeatureRow, SkippedRow,
};
pub use statistics::{PropertyStats, Statistic};
