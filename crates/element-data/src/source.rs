//! CSV helpers shared by the table loaders

use crate::error::DataLoadError;
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Name of the symbol column in every element table
pub(crate) const ELEMENT_COLUMN: &str = "element";

pub(crate) fn open(path: &Path) -> Result<Reader<File>, DataLoadError> {
    let file = File::open(path)?;
    Ok(reader(file))
}

pub(crate) fn reader<R: Read>(source: R) -> Reader<R> {
    ReaderBuilder::new().trim(Trim::All).from_reader(source)
}

/// Position of a named column in the header row
pub(crate) fn column(headers: &StringRecord, name: &str) -> Result<usize, DataLoadError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
}

/// 1-based line number of a record, or 0 if unknown
pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

/// Field at `idx`, empty if the row is short
pub(crate) fn field<'r>(record: &'r StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("")
}

pub(crate) fn invalid(column: &str, value: &str, record: &StringRecord) -> DataLoadError {
    DataLoadError::InvalidValue {
        column: column.to_string(),
        value: value.to_string(),
        line: line_of(record),
    }
}
