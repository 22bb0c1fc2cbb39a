//! Elemental Property Tables
//!
//! Read-only lookups keyed by element symbol, each loaded once per run and
//! shared by reference. The two scalar sources deliberately differ on a miss:
//! electronegativity falls back to a default, valence reports the element as
//! unsupported.

mod elemental;
mod error;
mod property_table;
mod source;
mod valence;

pub use elemental::{ElementalDataTable, ElementalProperty, PropertyRow, PROPERTY_COUNT};
pub use error::DataLoadError;
pub use property_table::{ElementPropertyTable, PropertyLookup, ELECTRONEGATIVITY_COLUMN};
pub use valence::{ValenceLookup, ValenceSource, ValenceTable};
