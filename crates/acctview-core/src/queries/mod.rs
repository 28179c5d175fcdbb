//! List query module
//!
//! Pure, deterministic filter → sort → paginate pipeline shared by every list
//! in the console (orders, invoices, API logs, members).
//!
//! Key principles:
//! - No I/O, no persistent state, no errors: malformed criteria degrade to
//!   "no constraint"
//! - Sorting is stable and places null values last in both directions
//! - Totals are computed before slicing; out-of-range pages are empty

pub mod engine;
pub mod filter;
pub mod page;
pub mod sort;

pub use engine::{filter_records, matching, query, sort_records};
pub use filter::{Criterion, FilterCriteria, Selection, ALL};
pub use page::{PageDescriptor, QueryResult};
pub use sort::{compare_values, SortDescriptor, SortDirection};
