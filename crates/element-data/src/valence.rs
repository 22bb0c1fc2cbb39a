//! Valence Electron Counts

use crate::error::DataLoadError;
use crate::source::{self, ELEMENT_COLUMN};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Valence column in CSV sources
const VALENCE_COLUMN: &str = "valence";

/// Outcome of a valence lookup.
///
/// Unlike electronegativity there is no default: an unknown element cannot
/// contribute a meaningful valence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValenceLookup {
    Found(u32),
    Unsupported,
}

/// Anything that can resolve an element's modified valence electron count
pub trait ValenceSource: Send + Sync {
    fn valence(&self, symbol: &str) -> ValenceLookup;
}

/// Electrons outside the noble-gas core, counting d electrons for
/// transition metals. 4f electrons are treated as core, so lanthanides
/// report 3.
#[rustfmt::skip]
const BUILTIN_VALENCE: &[(&str, u32)] = &[
    ("H", 1), ("He", 2),
    ("Li", 1), ("Be", 2), ("B", 3), ("C", 4), ("N", 5), ("O", 6), ("F", 7), ("Ne", 8),
    ("Na", 1), ("Mg", 2), ("Al", 3), ("Si", 4), ("P", 5), ("S", 6), ("Cl", 7), ("Ar", 8),
    ("K", 1), ("Ca", 2), ("Sc", 3), ("Ti", 4), ("V", 5), ("Cr", 6), ("Mn", 7), ("Fe", 8),
    ("Co", 9), ("Ni", 10), ("Cu", 11), ("Zn", 12), ("Ga", 3), ("Ge", 4), ("As", 5),
    ("Se", 6), ("Br", 7), ("Kr", 8),
    ("Rb", 1), ("Sr", 2), ("Y", 3), ("Zr", 4), ("Nb", 5), ("Mo", 6), ("Tc", 7), ("Ru", 8),
    ("Rh", 9), ("Pd", 10), ("Ag", 11), ("Cd", 12), ("In", 3), ("Sn", 4), ("Sb", 5),
    ("Te", 6), ("I", 7), ("Xe", 8),
    ("Cs", 1), ("Ba", 2),
    ("La", 3), ("Ce", 3), ("Pr", 3), ("Nd", 3), ("Pm", 3), ("Sm", 3), ("Eu", 3), ("Gd", 3),
    ("Tb", 3), ("Dy", 3), ("Ho", 3), ("Er", 3), ("Tm", 3), ("Yb", 3), ("Lu", 3),
    ("Hf", 4), ("Ta", 5), ("W", 6), ("Re", 7), ("Os", 8), ("Ir", 9), ("Pt", 10), ("Au", 11),
    ("Hg", 12), ("Tl", 3), ("Pb", 4), ("Bi", 5), ("Po", 6), ("At", 7), ("Rn", 8),
    ("Fr", 1), ("Ra", 2),
    ("Ac", 3), ("Th", 4), ("Pa", 5), ("U", 6), ("Np", 7), ("Pu", 8),
];

/// Element symbol to valence electron count
#[derive(Debug, Clone, Default)]
pub struct ValenceTable {
    values: HashMap<String, u32>,
}

impl ValenceTable {
    /// Table covering H through Pu
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_VALENCE.iter().copied())
    }

    /// Load from a CSV file with `element` and `valence` columns
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        info!("Loading valence data from {}", path.display());
        Self::read(source::open(path)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        Self::read(source::reader(reader))
    }

    fn read<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, DataLoadError> {
        let headers = reader.headers()?.clone();
        let element_idx = source::column(&headers, ELEMENT_COLUMN)?;
        let valence_idx = source::column(&headers, VALENCE_COLUMN)?;

        let mut values = HashMap::new();
        for record in reader.records() {
            let record = record?;
            let raw = source::field(&record, valence_idx);
            let valence: u32 = raw
                .parse()
                .map_err(|_| source::invalid(VALENCE_COLUMN, raw, &record))?;
            values.insert(source::field(&record, element_idx).to_string(), valence);
        }

        Ok(Self { values })
    }

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(s, v)| (s.into(), v)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ValenceSource for ValenceTable {
    fn valence(&self, symbol: &str) -> ValenceLookup {
        match self.values.get(symbol) {
            Some(&v) => ValenceLookup::Found(v),
            None => ValenceLookup::Unsupported,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = ValenceTable::builtin();
        assert_eq!(table.len(), 94);
        assert_eq!(table.valence("Fe"), ValenceLookup::Found(8));
        assert_eq!(table.valence("O"), ValenceLookup::Found(6));
        assert_eq!(table.valence("Na"), ValenceLookup::Found(1));
        assert_eq!(table.valence("Cl"), ValenceLookup::Found(7));
    }

    #[test]
    fn test_unknown_element_is_unsupported() {
        let table = ValenceTable::builtin();
        assert_eq!(table.valence("Og"), ValenceLookup::Unsupported);
        assert_eq!(table.valence("fe"), ValenceLookup::Unsupported);
    }

    #[test]
    fn test_load_from_reader() {
        let csv = "element,valence\nFe,8\nO,6\n";
        let table = ValenceTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.valence("O"), ValenceLookup::Found(6));
    }

    #[test]
    fn test_fractional_valence_rejected() {
        let csv = "element,valence\nFe,8.5\n";
        assert!(matches!(
            ValenceTable::from_reader(csv.as_bytes()),
            Err(DataLoadError::InvalidValue { line: 2, .. })
        ));
    }
}
