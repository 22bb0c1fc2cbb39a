//! Scalar Element Property Table

use crate::error::DataLoadError;
use crate::source::{self, ELEMENT_COLUMN};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Default property column
pub const ELECTRONEGATIVITY_COLUMN: &str = "Electronegativity";

/// Outcome of a property lookup.
///
/// A miss is not an error: third-party tables have gaps, and callers get
/// [`PropertyLookup::DEFAULT`] in its place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyLookup {
    /// Value present in the table
    Found(f64),
    /// Symbol absent; the default applies
    Defaulted,
}

impl PropertyLookup {
    /// Value used for symbols the table does not know
    pub const DEFAULT: f64 = 0.0;

    /// Resolved value, substituting the default on a miss
    pub fn value(self) -> f64 {
        match self {
            PropertyLookup::Found(v) => v,
            PropertyLookup::Defaulted => Self::DEFAULT,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, PropertyLookup::Found(_))
    }
}

/// Element symbol to property value, immutable once loaded
#[derive(Debug, Clone, Default)]
pub struct ElementPropertyTable {
    /// Column the values came from
    property: String,
    values: HashMap<String, f64>,
}

impl ElementPropertyTable {
    /// Load electronegativity values from a CSV file with `element` and
    /// `Electronegativity` columns
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataLoadError> {
        Self::load_column(path, ELECTRONEGATIVITY_COLUMN)
    }

    /// Load an arbitrary numeric column from a CSV file
    pub fn load_column<P: AsRef<Path>>(path: P, column: &str) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        info!("Loading '{}' from {}", column, path.display());
        let table = Self::read(source::open(path)?, column)?;
        info!("Loaded {} {} values", table.len(), column);
        Ok(table)
    }

    /// Load from any CSV reader
    pub fn from_reader<R: Read>(reader: R, column: &str) -> Result<Self, DataLoadError> {
        Self::read(source::reader(reader), column)
    }

    fn read<R: Read>(mut reader: csv::Reader<R>, column: &str) -> Result<Self, DataLoadError> {
        let headers = reader.headers()?.clone();
        let element_idx = source::column(&headers, ELEMENT_COLUMN)?;
        let value_idx = source::column(&headers, column)?;

        let mut values = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let symbol = source::field(&record, element_idx);
            let raw = source::field(&record, value_idx);
            let value = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| source::invalid(column, raw, &record))?;
            // Later rows for the same symbol replace earlier ones
            if values.insert(symbol.to_string(), value).is_some() {
                debug!("Duplicate row for {} at line {}", symbol, source::line_of(&record));
            }
        }

        Ok(Self {
            property: column.to_string(),
            values,
        })
    }

    /// Build a table from in-memory pairs; later pairs win
    pub fn from_pairs<I, S>(property: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            property: property.to_string(),
            values: pairs.into_iter().map(|(s, v)| (s.into(), v)).collect(),
        }
    }

    /// Look up a symbol, reporting whether the default was used
    pub fn lookup(&self, symbol: &str) -> PropertyLookup {
        match self.values.get(symbol) {
            Some(&v) => PropertyLookup::Found(v),
            None => PropertyLookup::Defaulted,
        }
    }

    /// Value for a symbol, 0.0 when absent
    pub fn value(&self, symbol: &str) -> f64 {
        self.lookup(symbol).value()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.values.contains_key(symbol)
    }

    /// Name of the property column
    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
