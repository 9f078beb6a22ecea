use super::table::GridTable;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing grid table formats.
///
/// Implementors handle format-specific parsing and serialization; the path-based
/// helpers open, buffer, and flush the underlying file.
pub trait GridFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a grid table from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<GridTable, Self::Error>;

    /// Writes a grid table to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(table: &GridTable, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a grid table from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<GridTable, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a grid table to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(table: &GridTable, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(table, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
