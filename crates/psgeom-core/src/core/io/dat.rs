use super::table::{GridRecord, GridTable, TableError, TableParseErrorKind};
use super::traits::GridFile;
use std::io::{self, BufRead, Write};

/// Header line the simulation engine expects before the first record.
pub const DAT_HEADER: &str = "x   y    z   f ";

/// Formats `value` the way C's `%le` does: six fraction digits and an exponent
/// with an explicit sign and at least two digits (`2.500000e-01`).
pub fn format_le(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let formatted = format!("{:.6e}", value);
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
        Err(_) => formatted,
    }
}

/// The whitespace-separated grid table read by the simulation engine.
pub struct DatFile;

impl GridFile for DatFile {
    type Error = TableError;

    fn read_from(reader: &mut impl BufRead) -> Result<GridTable, Self::Error> {
        let mut table = GridTable::default();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() || (line_num == 1 && fields.first() == Some(&"x")) {
                continue;
            }
            if fields.len() != 4 {
                return Err(TableError::Parse {
                    line: line_num,
                    kind: TableParseErrorKind::FieldCount {
                        found: fields.len(),
                    },
                });
            }

            let index = |value: &str| {
                value.parse::<usize>().map_err(|_| TableError::Parse {
                    line: line_num,
                    kind: TableParseErrorKind::InvalidIndex {
                        value: value.into(),
                    },
                })
            };
            let ix = index(fields[0])?;
            let iy = index(fields[1])?;
            let iz = index(fields[2])?;
            let f: f64 = fields[3].parse().map_err(|_| TableError::Parse {
                line: line_num,
                kind: TableParseErrorKind::InvalidValue {
                    value: fields[3].into(),
                },
            })?;
            table.push(ix, iy, iz, f);
        }

        Ok(table)
    }

    fn write_to(table: &GridTable, writer: &mut impl Write) -> Result<(), Self::Error> {
        write_header(writer)?;
        for record in table.iter() {
            write_row(writer, record)?;
        }
        Ok(())
    }
}

pub(crate) fn write_header(writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{}", DAT_HEADER)
}

pub(crate) fn write_row(writer: &mut impl Write, record: &GridRecord) -> io::Result<()> {
    writeln!(
        writer,
        "{} {} {} {}  ",
        record.ix,
        record.iy,
        record.iz,
        format_le(record.f)
    )
}
