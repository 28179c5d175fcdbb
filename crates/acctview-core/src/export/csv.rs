//! CSV rendering
//!
//! Fields containing a comma, quote or line break are quoted, with embedded
//! quotes doubled. Lines are joined with `\n`.

use crate::errors::{AcctViewError, Result};
use crate::{log_op_end, log_op_error, log_op_start};
use chrono::NaiveDate;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// One output column: header label plus cell formatter
pub struct Column<R> {
    pub label: &'static str,
    pub value: fn(&R) -> String,
}

impl<R> Column<R> {
    pub const fn new(label: &'static str, value: fn(&R) -> String) -> Self {
        Self { label, value }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains(&[',', '"', '\r', '\n'][..]) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn render_line<'a>(cells: impl Iterator<Item = Cow<'a, str>>) -> String {
    cells
        .map(|cell| escape_field(&cell).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Header line followed by one line per record, in the given order
pub fn to_csv<R>(records: &[R], columns: &[Column<R>]) -> String {
    let header = render_line(columns.iter().map(|c| Cow::Borrowed(c.label)));
    let rows = records
        .iter()
        .map(|record| render_line(columns.iter().map(|c| Cow::Owned((c.value)(record)))));
    std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
}

/// `<resource>-<YYYY-MM-DD>.csv`
pub fn export_filename(resource: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", resource, date.format("%Y-%m-%d"))
}

/// Render and write `records` into `dir`, returning the written path
///
/// # Errors
///
/// Returns `AcctViewError::Io` if the file cannot be written.
pub fn write_csv<R>(
    dir: &Path,
    resource: &str,
    date: NaiveDate,
    records: &[R],
    columns: &[Column<R>],
) -> Result<PathBuf> {
    let start = Instant::now();
    log_op_start!("export_csv", resource = resource, rows = records.len());

    let path = dir.join(export_filename(resource, date));
    match std::fs::write(&path, to_csv(records, columns)) {
        Ok(()) => {
            log_op_end!(
                "export_csv",
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display()
            );
            Ok(path)
        }
        Err(err) => {
            let err = AcctViewError::io(&path, &err);
            log_op_error!(
                "export_csv",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}
