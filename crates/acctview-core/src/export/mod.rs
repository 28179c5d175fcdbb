//! File exports of filtered list data

pub mod csv;

pub use csv::{escape_field, export_filename, to_csv, write_csv, Column};
