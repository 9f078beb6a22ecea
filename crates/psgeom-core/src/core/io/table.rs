use super::csv::CsvFile;
use super::dat::DatFile;
use super::traits::GridFile;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Field value at one integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRecord {
    #[serde(rename = "x")]
    pub ix: usize,
    #[serde(rename = "y")]
    pub iy: usize,
    #[serde(rename = "z")]
    pub iz: usize,
    pub f: f64,
}

/// Every record of a sweep, in the order the grid was visited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridTable {
    pub records: Vec<GridRecord>,
}

impl GridTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, ix: usize, iy: usize, iz: usize, f: f64) {
        self.records.push(GridRecord { ix, iy, iz, f });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridRecord> {
        self.records.iter()
    }
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: TableParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableParseErrorKind {
    #[error("Expected 4 whitespace-separated fields, found {found}")]
    FieldCount { found: usize },
    #[error("Invalid grid index '{value}'")]
    InvalidIndex { value: String },
    #[error("Invalid field value '{value}'")]
    InvalidValue { value: String },
}

/// On-disk layout of a grid table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Dat,
    Csv,
}

impl TableFormat {
    pub fn extension(self) -> &'static str {
        match self {
            TableFormat::Dat => "dat",
            TableFormat::Csv => "csv",
        }
    }

    pub fn write_to_path(self, table: &GridTable, path: &Path) -> Result<(), TableError> {
        match self {
            TableFormat::Dat => DatFile::write_to_path(table, path),
            TableFormat::Csv => CsvFile::write_to_path(table, path),
        }
    }

    pub fn read_from_path(self, path: &Path) -> Result<GridTable, TableError> {
        match self {
            TableFormat::Dat => DatFile::read_from_path(path),
            TableFormat::Csv => CsvFile::read_from_path(path),
        }
    }

    /// Guesses the format from a file extension, defaulting to `.dat`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => TableFormat::Csv,
            _ => TableFormat::Dat,
        }
    }
}

impl FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dat" => Ok(TableFormat::Dat),
            "csv" => Ok(TableFormat::Csv),
            other => Err(format!(
                "Unknown table format '{}'. Expected 'dat' or 'csv'.",
                other
            )),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
