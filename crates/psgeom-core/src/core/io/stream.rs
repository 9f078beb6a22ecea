use super::dat;
use super::table::{GridRecord, TableError, TableFormat};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes grid records one at a time, in either table format.
///
/// The `.dat` header goes out when the writer is created. The CSV header is
/// emitted with the first record, as `csv::Writer` does for serialized structs.
pub enum RecordWriter<W: Write> {
    Dat(W),
    Csv(::csv::Writer<W>),
}

impl RecordWriter<BufWriter<File>> {
    /// Creates or truncates `path` and prepares it for `format`.
    pub fn create(path: &Path, format: TableFormat) -> Result<Self, TableError> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), format)
    }
}

impl<W: Write> RecordWriter<W> {
    pub fn new(mut writer: W, format: TableFormat) -> Result<Self, TableError> {
        match format {
            TableFormat::Dat => {
                dat::write_header(&mut writer)?;
                Ok(RecordWriter::Dat(writer))
            }
            TableFormat::Csv => Ok(RecordWriter::Csv(::csv::Writer::from_writer(writer))),
        }
    }

    pub fn write_record(&mut self, record: &GridRecord) -> Result<(), TableError> {
        match self {
            RecordWriter::Dat(writer) => dat::write_row(writer, record)?,
            RecordWriter::Csv(writer) => writer.serialize(record)?,
        }
        Ok(())
    }

    /// Flushes buffered rows and hands back the underlying writer.
    pub fn finish(self) -> Result<W, TableError> {
        match self {
            RecordWriter::Dat(mut writer) => {
                writer.flush()?;
                Ok(writer)
            }
            RecordWriter::Csv(writer) => writer
                .into_inner()
                .map_err(|e| TableError::Io(e.into_error())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::csv::CsvFile;
    use crate::core::io::dat::DatFile;
    use crate::core::io::table::GridTable;
    use crate::core::io::traits::GridFile;

    fn table() -> GridTable {
        let mut table = GridTable::default();
        table.push(0, 0, 0, 0.25);
        table.push(0, 1, 0, 1.0e-7);
        table.push(1, 0, 0, 0.875);
        table
    }

    fn streamed(format: TableFormat) -> Vec<u8> {
        let mut writer = RecordWriter::new(Vec::new(), format).unwrap();
        for record in table().iter() {
            writer.write_record(record).unwrap();
        }
        writer.finish().unwrap()
    }

    #[test]
    fn streamed_dat_matches_the_table_writer() {
        let mut whole = Vec::new();
        DatFile::write_to(&table(), &mut whole).unwrap();
        assert_eq!(streamed(TableFormat::Dat), whole);
    }

    #[test]
    fn streamed_csv_matches_the_table_writer() {
        let mut whole = Vec::new();
        CsvFile::write_to(&table(), &mut whole).unwrap();
        assert_eq!(streamed(TableFormat::Csv), whole);
    }

    #[test]
    fn dat_header_is_written_before_any_record() {
        let writer = RecordWriter::new(Vec::new(), TableFormat::Dat).unwrap();
        assert_eq!(writer.finish().unwrap(), b"x   y    z   f \n");
    }

    #[test]
    fn create_fails_when_the_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("geometry.dat");
        assert!(matches!(
            RecordWriter::create(&path, TableFormat::Dat),
            Err(TableError::Io(_))
        ));
    }
}
