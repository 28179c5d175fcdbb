//! URL-backed list state
//!
//! The URL query string is the single source of truth for a list's filters,
//! sort and page. `codec` maps between parameters and `ListState`, the
//! adapter applies user changes through a `Navigator`.

pub mod adapter;
pub mod codec;
pub mod navigator;
pub mod params;
pub mod state;

pub use adapter::ListStateAdapter;
pub use codec::{deserialize, normalize_sort, serialize};
pub use navigator::{HistoryMode, MemoryHistory, Navigator};
pub use params::QueryParams;
pub use state::{FilterInput, FilterValue, ListState};
