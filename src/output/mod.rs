//! CSV serialization of reconstructed records.
//!
//! Each record kind has a fixed key list ([`Record::header`]) and renders its
//! values as strings in the same order. Cells follow one convention across
//! every file:
//!
//! - flags are `T`/`F`
//! - floats use the shortest round-trip form and always carry a fraction (`50.0`)
//! - absent numbers are empty cells

use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A flat row with a stable key set.
pub trait Record {
    /// Column names, in output order.
    fn header() -> Vec<&'static str>;

    /// Cell values, aligned with [`Record::header`].
    fn values(&self) -> Vec<String>;
}

/// `T` or `F`.
pub fn flag(value: bool) -> String {
    if value { "T" } else { "F" }.to_string()
}

/// Float cell; empty when absent.
pub fn float(value: Option<f64>) -> String {
    value.map(|v| format!("{:?}", v)).unwrap_or_default()
}

/// Integer (or other displayable) cell; empty when absent.
pub fn number<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write `records` with a header row to any writer.
pub fn write_records<W: Write, R: Record>(writer: W, records: &[R]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(R::header())?;
    for record in records {
        wtr.write_record(record.values())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `records` to a new file at `path`, replacing any existing file.
pub fn write_csv<R: Record>(path: &Path, records: &[R]) -> csv::Result<()> {
    let file = File::create(path)?;
    write_records(file, records)
}
