//! Formula Scanner
//!
//! A small state machine over three character classes: an uppercase letter
//! opens an element symbol, lowercase letters continue it, and digits with at
//! most one decimal point form its count. Anything else closes the current
//! segment and is skipped, so messy input never raises an error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Element symbol to stoichiometric count, in first-seen order.
///
/// Keys are unique. Inserting a symbol that is already present replaces its
/// count (last write wins) and keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementCountMap {
    entries: Vec<(String, f64)>,
}

impl ElementCountMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count for a symbol, overwriting any previous count
    pub fn insert(&mut self, symbol: &str, count: f64) {
        match self.entries.iter_mut().find(|(s, _)| s == symbol) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((symbol.to_string(), count)),
        }
    }

    /// Count for a symbol, if present
    pub fn get(&self, symbol: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, c)| *c)
    }

    /// Sum of all counts
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Iterate over `(symbol, count)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(s, c)| (s.as_str(), *c))
    }

    /// Element symbols in first-seen order
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(s, _)| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for ElementCountMap {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (symbol, count) in iter {
            map.insert(symbol.as_ref(), count);
        }
        map
    }
}

impl fmt::Display for ElementCountMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, count) in self.iter() {
            if count == 1.0 {
                write!(f, "{}", symbol)?;
            } else {
                write!(f, "{}{}", symbol, count)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Dot,
    Other,
}

impl CharClass {
    fn of(byte: u8) -> Self {
        match byte {
            b'A'..=b'Z' => CharClass::Upper,
            b'a'..=b'z' => CharClass::Lower,
            b'0'..=b'9' => CharClass::Digit,
            b'.' => CharClass::Dot,
            _ => CharClass::Other,
        }
    }
}

/// Scanner state; byte offsets index into the formula being scanned.
#[derive(Debug)]
enum State {
    Idle,
    Symbol {
        start: usize,
    },
    Count {
        symbol_start: usize,
        symbol_end: usize,
        start: usize,
        seen_dot: bool,
    },
}

impl State {
    /// Flush a finished segment ending at byte `end` into `counts`
    fn emit(self, formula: &str, end: usize, counts: &mut ElementCountMap) {
        match self {
            State::Idle => {}
            State::Symbol { start } => counts.insert(&formula[start..end], 1.0),
            State::Count {
                symbol_start,
                symbol_end,
                start,
                ..
            } => {
                // A bare "." carries no number; treat it like a missing count.
                let count = formula[start..end].parse::<f64>().unwrap_or(1.0);
                counts.insert(&formula[symbol_start..symbol_end], count);
            }
        }
    }
}

/// Parse a formula into element counts.
///
/// Segments look like `[A-Z][a-z]*` followed by an optional decimal count;
/// a missing count means 1.0. Unmatched characters are skipped silently and
/// an empty string yields an empty map. Repeated symbols overwrite earlier
/// ones rather than accumulating: `parse("FeFeO")` gives `{Fe: 1, O: 1}`.
pub fn parse(formula: &str) -> ElementCountMap {
    let mut counts = ElementCountMap::new();
    let mut state = State::Idle;

    for (i, &byte) in formula.as_bytes().iter().enumerate() {
        let class = CharClass::of(byte);
        state = match (state, class) {
            (State::Symbol { start }, CharClass::Lower) => State::Symbol { start },
            (State::Symbol { start }, CharClass::Digit | CharClass::Dot) => State::Count {
                symbol_start: start,
                symbol_end: i,
                start: i,
                seen_dot: class == CharClass::Dot,
            },
            (
                State::Count {
                    symbol_start,
                    symbol_end,
                    start,
                    seen_dot,
                },
                CharClass::Digit,
            ) => State::Count {
                symbol_start,
                symbol_end,
                start,
                seen_dot,
            },
            (
                State::Count {
                    symbol_start,
                    symbol_end,
                    start,
                    seen_dot: false,
                },
                CharClass::Dot,
            ) => State::Count {
                symbol_start,
                symbol_end,
                start,
                seen_dot: true,
            },
            (finished, class) => {
                finished.emit(formula, i, &mut counts);
                if class == CharClass::Upper {
                    State::Symbol { start: i }
                } else {
                    State::Idle
                }
            }
        };
    }
    state.emit(formula, formula.len(), &mut counts);

    counts
}
