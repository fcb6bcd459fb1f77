//! Exporter
//!
//! Serializes the roster to CSV.
//!
//! ## Format
//! ```text
//! ID,Name,Position,Salary
//! 1,"Ada ""The Countess"" Lovelace","Analyst, Engines",50000
//! ```
//! - Numeric fields are written bare in natural decimal form
//! - Text fields are always quoted, embedded `"` doubled
//! - Lines joined by `\n`, no trailing newline after the last record

use std::fs;
use std::path::{Path, PathBuf};

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::Result;
use crate::model::Employee;

/// Filename offered for the download
pub const EXPORT_FILENAME: &str = "employee_data.csv";

/// MIME type of the download
pub const EXPORT_MIME: &str = "text/csv;charset=utf-8;";

/// Column header line
pub const CSV_HEADER: &str = "ID,Name,Position,Salary";

/// A file ready to be handed to the host for saving
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub filename: &'static str,
    pub mime: &'static str,
    pub body: Bytes,
}

impl Download {
    /// Write the body to `dir/filename`, replacing any previous export
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.filename);
        fs::write(&path, &self.body)?;
        Ok(path)
    }
}

/// Build the CSV download for `records` in the given order
pub fn export(records: &[Employee]) -> Download {
    Download {
        filename: EXPORT_FILENAME,
        mime: EXPORT_MIME,
        body: to_csv(records),
    }
}

/// Render `records` as CSV text
pub fn to_csv(records: &[Employee]) -> Bytes {
    let mut buf = BytesMut::with_capacity(CSV_HEADER.len() + 1 + records.len() * 48);
    buf.put_slice(CSV_HEADER.as_bytes());
    buf.put_u8(b'\n');

    for (i, emp) in records.iter().enumerate() {
        if i > 0 {
            buf.put_u8(b'\n');
        }
        let line = format!(
            "{},{},{},{}",
            emp.id,
            quote(&emp.name),
            quote(&emp.position),
            format_number(emp.salary)
        );
        buf.put_slice(line.as_bytes());
    }

    buf.freeze()
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Shortest decimal form, exponent notation outside `[1e-6, 1e21)`
///
/// Zero of either sign is written `0`.
fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
