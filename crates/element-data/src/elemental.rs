//! Magpie-style Elemental Data
//!
//! Nineteen per-element properties consumed by the statistical featurizer.
//! Gaps in the source (empty cells, `NaN`) load as `f64::NAN`.

use crate::error::DataLoadError;
use crate::source::{self, ELEMENT_COLUMN};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Number of properties per element
pub const PROPERTY_COUNT: usize = 19;

/// Elemental properties, in featurization order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementalProperty {
    Number,
    MendeleevNumber,
    AtomicWeight,
    CovalentRadius,
    Electronegativity,
    NsValence,
    NpValence,
    NdValence,
    NfValence,
    NValence,
    NsUnfilled,
    NpUnfilled,
    NdUnfilled,
    NfUnfilled,
    NUnfilled,
    GsVolumePerAtom,
    GsBandgap,
    GsMagneticMoment,
    SpaceGroupNumber,
}

impl ElementalProperty {
    pub const ALL: [ElementalProperty; PROPERTY_COUNT] = [
        ElementalProperty::Number,
        ElementalProperty::MendeleevNumber,
        ElementalProperty::AtomicWeight,
        ElementalProperty::CovalentRadius,
        ElementalProperty::Electronegativity,
        ElementalProperty::NsValence,
        ElementalProperty::NpValence,
        ElementalProperty::NdValence,
        ElementalProperty::NfValence,
        ElementalProperty::NValence,
        ElementalProperty::NsUnfilled,
        ElementalProperty::NpUnfilled,
        ElementalProperty::NdUnfilled,
        ElementalProperty::NfUnfilled,
        ElementalProperty::NUnfilled,
        ElementalProperty::GsVolumePerAtom,
        ElementalProperty::GsBandgap,
        ElementalProperty::GsMagneticMoment,
        ElementalProperty::SpaceGroupNumber,
    ];

    /// Column header used by Magpie data files
    pub fn column_name(&self) -> &'static str {
        match self {
            ElementalProperty::Number => "Number",
            ElementalProperty::MendeleevNumber => "MendeleevNumber",
            ElementalProperty::AtomicWeight => "AtomicWeight",
            ElementalProperty::CovalentRadius => "CovalentRadius",
            ElementalProperty::Electronegativity => "Electronegativity",
            ElementalProperty::NsValence => "NsValence",
            ElementalProperty::NpValence => "NpValence",
            ElementalProperty::NdValence => "NdValence",
            ElementalProperty::NfValence => "NfValence",
            ElementalProperty::NValence => "NValence",
            ElementalProperty::NsUnfilled => "NsUnfilled",
            ElementalProperty::NpUnfilled => "NpUnfilled",
            ElementalProperty::NdUnfilled => "NdUnfilled",
            ElementalProperty::NfUnfilled => "NfUnfilled",
            ElementalProperty::NUnfilled => "NUnfilled",
            ElementalProperty::GsVolumePerAtom => "GSvolume_pa",
            ElementalProperty::GsBandgap => "GSbandgap",
            ElementalProperty::GsMagneticMoment => "GSmagmom",
            ElementalProperty::SpaceGroupNumber => "SpaceGroupNumber",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ElementalProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Property values for one element, indexed by [`ElementalProperty`]
pub type PropertyRow = [f64; PROPERTY_COUNT];

/// Element symbol to its full property row
#[derive(Debug, Clone, Default)]
pub struct ElementalDataTable {
    rows: HashMap<String, PropertyRow>,
}

impl ElementalDataTable {
    /// Load from a CSV file with an `element` column and one column per property
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        info!("Loading elemental data from {}", path.display());
        let table = Self::read(source::open(path)?)?;
        info!("Loaded elemental data for {} elements", table.len());
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        Self::read(source::reader(reader))
    }

    fn read<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, DataLoadError> {
        let headers = reader.headers()?.clone();
        let element_idx = source::column(&headers, ELEMENT_COLUMN)?;
        let mut columns = [0usize; PROPERTY_COUNT];
        for property in ElementalProperty::ALL {
            columns[property.index()] = source::column(&headers, property.column_name())?;
        }

        let mut rows = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let mut row = [f64::NAN; PROPERTY_COUNT];
            for property in ElementalProperty::ALL {
                let raw = source::field(&record, columns[property.index()]);
                row[property.index()] = if raw.is_empty() {
                    f64::NAN
                } else {
                    raw.parse::<f64>()
                        .map_err(|_| source::invalid(property.column_name(), raw, &record))?
                };
            }
            rows.insert(source::field(&record, element_idx).to_string(), row);
        }

        Ok(Self { rows })
    }

    /// Build a table from in-memory rows
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, PropertyRow)>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(|(s, r)| (s.into(), r)).collect(),
        }
    }

    /// Single property for an element
    pub fn get(&self, symbol: &str, property: ElementalProperty) -> Option<f64> {
        self.rows.get(symbol).map(|row| row[property.index()])
    }

    /// All properties for an element
    pub fn row(&self, symbol: &str) -> Option<&PropertyRow> {
        self.rows.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.rows.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
