use super::table::{GridRecord, GridTable, TableError};
use super::traits::GridFile;
use std::io::{BufRead, Write};

/// Comma-separated grid table with an `x,y,z,f` header.
pub struct CsvFile;

impl GridFile for CsvFile {
    type Error = TableError;

    fn read_from(reader: &mut impl BufRead) -> Result<GridTable, Self::Error> {
        let mut csv_reader = ::csv::Reader::from_reader(reader);
        let records = csv_reader
            .deserialize::<GridRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GridTable { records })
    }

    fn write_to(table: &GridTable, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = ::csv::Writer::from_writer(writer);
        for record in table.iter() {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn write_emits_named_header() {
        let mut table = GridTable::default();
        table.push(2, 0, 1, 0.5);
        let mut out = Vec::new();
        CsvFile::write_to(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().next(), Some("x,y,z,f"));
        assert_eq!(text.lines().nth(1), Some("2,0,1,0.5"));
    }

    #[test]
    fn read_accepts_written_output() {
        let text = "x,y,z,f\n0,0,0,0.1\n1,0,0,0.9748\n";
        let table = CsvFile::read_from(&mut Cursor::new(text)).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[1].f, 0.9748);
    }

    #[test]
    fn read_rejects_non_numeric_values() {
        let text = "x,y,z,f\n0,0,0,high\n";
        assert!(matches!(
            CsvFile::read_from(&mut Cursor::new(text)),
            Err(TableError::Csv(_))
        ));
    }
}
