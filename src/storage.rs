use crate::error::{PosterError, Result};
use crate::models::{Reading, Table, ValueFormat};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Header of the text column holding the station/district name.
pub const LOCATION_COLUMN: &str = "Location";
/// Header of the numeric PM2.5 column.
pub const VALUE_COLUMN: &str = "Value";

/// One CSV row as written. `Value` stays text so bad cells can be reported verbatim.
#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Value")]
    value: String,
}

/// Load a CSV file with at least `Location` and `Value` columns.
///
/// Rows are returned in file order. Extra columns are ignored. When every
/// `Value` cell is a plain integer the table prints values without decimals.
///
/// ### Errors
/// - [`PosterError::DataFile`] when the file cannot be opened or read
/// - [`PosterError::MissingColumn`] when a required header is absent
/// - [`PosterError::MalformedRow`] for the first row whose `Value` is not a finite number
///   or whose field count does not match the header
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let rdr = builder()
        .from_path(path)
        .map_err(|source| PosterError::DataFile {
            path: path.to_path_buf(),
            source,
        })?;
    parse(rdr, path)
}

/// Same as [`load_table`] but from any reader (e.g. an in-memory string).
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    parse(builder().from_reader(reader), Path::new("<reader>"))
}

/// Readings of [`load_table`], without the value format.
pub fn load_readings<P: AsRef<Path>>(path: P) -> Result<Vec<Reading>> {
    load_table(path).map(|t| t.readings)
}

/// Readings of [`read_table`], without the value format.
pub fn read_readings<R: Read>(reader: R) -> Result<Vec<Reading>> {
    read_table(reader).map(|t| t.readings)
}

fn builder() -> ReaderBuilder {
    let mut b = ReaderBuilder::new();
    b.trim(Trim::All);
    b
}

fn parse<R: Read>(mut rdr: Reader<R>, origin: &Path) -> Result<Table> {
    let headers: StringRecord = rdr
        .headers()
        .map_err(|source| PosterError::DataFile {
            path: origin.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}'))
        .collect();
    require_column(&headers, LOCATION_COLUMN, origin)?;
    require_column(&headers, VALUE_COLUMN, origin)?;

    let mut readings = Vec::new();
    let mut all_integers = true;
    for (i, record) in rdr.records().enumerate() {
        // Header is line 1, so data row i sits on line i + 2 unless fields span lines.
        let fallback_line = i as u64 + 2;
        let record = record.map_err(|e| {
            if e.is_io_error() {
                PosterError::DataFile {
                    path: origin.to_path_buf(),
                    source: e,
                }
            } else {
                PosterError::MalformedRow {
                    line: e.position().map(|p| p.line()).unwrap_or(fallback_line),
                    reason: e.to_string(),
                }
            }
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(fallback_line);

        let row: Row = record
            .deserialize(Some(&headers))
            .map_err(|e| PosterError::MalformedRow {
                line,
                reason: e.to_string(),
            })?;
        let value =
            parse_value(&row.value).map_err(|reason| PosterError::MalformedRow { line, reason })?;
        all_integers &= row.value.parse::<i64>().is_ok();
        readings.push(Reading::new(row.location, value));
    }
    log::debug!("loaded {} readings from {}", readings.len(), origin.display());

    let value_format = if all_integers && !readings.is_empty() {
        ValueFormat::Integer
    } else {
        ValueFormat::Decimal
    };
    Ok(Table {
        readings,
        value_format,
    })
}

fn require_column(headers: &StringRecord, column: &'static str, origin: &Path) -> Result<()> {
    if headers.iter().any(|h| h == column) {
        Ok(())
    } else {
        Err(PosterError::MissingColumn {
            path: origin.to_path_buf(),
            column,
        })
    }
}

fn parse_value(raw: &str) -> std::result::Result<f64, String> {
    if raw.is_empty() {
        return Err(format!("empty `{VALUE_COLUMN}`"));
    }
    let v: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if !v.is_finite() {
        return Err(format!("`{raw}` is not a finite number"));
    }
    Ok(v)
}
