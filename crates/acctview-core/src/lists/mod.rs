//! Built-in list screens
//!
//! Each list pairs a record model with its `ListSchema` and CSV columns.
//! `ListView` runs a deserialized `ListState` through the query engine.

pub mod api_logs;
pub mod invoices;
pub mod members;
pub mod orders;
pub mod schema;

use crate::errors::{AcctViewError, Result};
use crate::export::csv::{to_csv, Column};
use crate::model::Record;
use crate::queries::{self, QueryResult};
use crate::url_state::ListState;
use crate::{log_op_end, log_op_start};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

pub use orders::OrderStats;
pub use schema::{FilterKind, FilterSpec, ListSchema, PARAM_PAGE, PARAM_SORT_BY, PARAM_SORT_DIR};

/// A record type shown in one of the console's lists
pub trait ListRecord: Record + Clone + Serialize + DeserializeOwned {
    fn schema() -> ListSchema;

    fn csv_columns() -> Vec<Column<Self>>;
}

/// Registry of the built-in lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Orders,
    Invoices,
    ApiLogs,
    Members,
}

impl ListKind {
    pub const ALL: [ListKind; 4] = [
        ListKind::Orders,
        ListKind::Invoices,
        ListKind::ApiLogs,
        ListKind::Members,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ListKind::Orders => "orders",
            ListKind::Invoices => "invoices",
            ListKind::ApiLogs => "api-logs",
            ListKind::Members => "members",
        }
    }

    pub fn schema(&self) -> ListSchema {
        match self {
            ListKind::Orders => orders::schema(),
            ListKind::Invoices => invoices::schema(),
            ListKind::ApiLogs => api_logs::schema(),
            ListKind::Members => members::schema(),
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ListKind {
    type Err = AcctViewError;

    fn from_str(s: &str) -> Result<Self> {
        ListKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| AcctViewError::UnknownList {
                name: s.to_string(),
            })
    }
}

/// A loaded collection viewed through its list schema
pub struct ListView<'a, R: ListRecord> {
    schema: ListSchema,
    records: &'a [R],
    page_size: usize,
}

impl<'a, R: ListRecord> ListView<'a, R> {
    pub fn new(records: &'a [R]) -> Self {
        let schema = R::schema();
        let page_size = schema.default_page_size;
        Self {
            schema,
            records,
            page_size,
        }
    }

    /// Override the schema's page size; 0 is treated as 1
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn schema(&self) -> &ListSchema {
        &self.schema
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// One page of matching records plus totals
    pub fn run(&self, state: &ListState) -> QueryResult<R> {
        let start = Instant::now();
        log_op_start!(
            "list_query",
            list = self.schema.name,
            page = state.page,
            page_size = self.page_size
        );

        let result = queries::query(
            self.records,
            &state.criteria(&self.schema),
            &state.sort,
            &state.page_descriptor(self.page_size),
        );

        log_op_end!(
            "list_query",
            duration_ms = start.elapsed().as_millis() as u64,
            list = self.schema.name,
            total_matched = result.total_matched,
            total_pages = result.total_pages
        );
        result
    }

    /// Every matching record in sorted order, ignoring the page
    pub fn all_matching(&self, state: &ListState) -> Vec<R> {
        queries::matching(self.records, &state.criteria(&self.schema), &state.sort)
            .into_iter()
            .cloned()
            .collect()
    }

    /// CSV of every matching record
    pub fn to_csv(&self, state: &ListState) -> String {
        to_csv(&self.all_matching(state), &R::csv_columns())
    }
}

/// Decode a JSON array of records
///
/// # Errors
///
/// Returns `AcctViewError::Serialization` if the JSON does not match `R`.
pub fn parse_records<R: DeserializeOwned>(json: &str) -> Result<Vec<R>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of records from a fixture file
///
/// # Errors
///
/// Returns `AcctViewError::Io` if the file cannot be read and
/// `AcctViewError::Fixture` if it does not decode.
pub fn load_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let raw = std::fs::read_to_string(path).map_err(|e| AcctViewError::io(path, &e))?;
    serde_json::from_str(&raw).map_err(|e| AcctViewError::Fixture {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
