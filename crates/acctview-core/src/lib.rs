//! acctview core: list query engine and URL state for the account console
//!
//! This crate provides:
//! - Record models for the console's lists (orders, invoices, API logs, members)
//! - A pure filter, sort and paginate pipeline over in-memory records
//! - URL query-string state for each list, with a history-replacing adapter
//! - CSV export, order statistics and modal state
//!
//! Nothing here performs network I/O. Fixture and config loading are the only
//! fallible operations; querying and URL decoding always succeed.

pub mod config;
pub mod errors;
pub mod export;
pub mod lists;
pub mod logging_facility;
pub mod modal;
pub mod model;
pub mod queries;
pub mod url_state;

#[doc(hidden)]
pub use acctview_core_types;
#[doc(hidden)]
pub use tracing as __tracing;

// Re-export commonly used types
pub use config::ConsoleConfig;
pub use errors::{AcctViewError, ExError, ExErrorKind, Result};
pub use lists::{ListKind, ListRecord, ListSchema, ListView, OrderStats};
pub use modal::{ModalKind, ModalState};
pub use model::{FieldValue, Record};
pub use queries::{query, FilterCriteria, PageDescriptor, QueryResult, SortDescriptor, SortDirection};
pub use url_state::{FilterInput, ListState, ListStateAdapter, MemoryHistory, Navigator, QueryParams};
