//! CSV serialization of extracted facet rows.
//!
//! Output is UTF-8, comma-delimited, with a `Keyword,Type,Title` header
//! row followed by one line per facet option in input order. The header
//! is written even when there are no rows.

use crate::error::FacetError;
use crate::types::FacetRow;
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Column headers of the export, in order.
pub const CSV_HEADERS: [&str; 3] = ["Keyword", "Type", "Title"];

/// Serialize rows as CSV to an arbitrary writer.
///
/// # Errors
///
/// Returns [`FacetError::Export`] if writing fails.
pub fn write_csv<W: Write>(rows: &[FacetRow], writer: W) -> Result<(), FacetError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| FacetError::Export(format!("failed to write CSV header: {e}")))?;
    for row in rows {
        csv_writer
            .serialize(row)
            .map_err(|e| FacetError::Export(format!("failed to write CSV row: {e}")))?;
    }
    csv_writer
        .flush()
        .map_err(|e| FacetError::Export(format!("failed to flush CSV output: {e}")))?;
    Ok(())
}

/// Serialize rows to an in-memory CSV string, for download surfaces that
/// hand the bytes to the user rather than touching the filesystem.
///
/// # Errors
///
/// Returns [`FacetError::Export`] if serialization fails.
pub fn csv_string(rows: &[FacetRow]) -> Result<String, FacetError> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| FacetError::Export(format!("CSV was not UTF-8: {e}")))
}

/// Write rows to a CSV file at `path`.
///
/// Best effort only: on failure the file may exist partially written.
///
/// # Errors
///
/// Returns [`FacetError::Export`] if the file cannot be created or written.
pub fn save_csv(rows: &[FacetRow], path: &Path) -> Result<(), FacetError> {
    let file = File::create(path)
        .map_err(|e| FacetError::Export(format!("failed to create {}: {e}", path.display())))?;
    write_csv(rows, file)
}

/// Parse CSV text produced by [`write_csv`] back into rows.
///
/// # Errors
///
/// Returns [`FacetError::Export`] if the input is not valid CSV with the
/// expected header.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<FacetRow>, FacetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize()
        .collect::<Result<Vec<FacetRow>, _>>()
        .map_err(|e| FacetError::Export(format!("failed to parse CSV: {e}")))
}

/// Default export filename carrying the current local time, e.g.
/// `refine_filters_20260830_142500.csv`.
pub fn timestamped_filename() -> String {
    filename_for(chrono::Local::now().naive_local())
}

fn filename_for(timestamp: NaiveDateTime) -> String {
    format!("refine_filters_{}.csv", timestamp.format("%Y%m%d_%H%M%S"))
}
