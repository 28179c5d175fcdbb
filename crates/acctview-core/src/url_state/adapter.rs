//! Typed view of a list's URL state
//!
//! The adapter holds no state of its own. Every read decodes the navigator's
//! current parameters, and every write re-encodes the complete state and
//! hands it back to the navigator.

use crate::lists::schema::ListSchema;
use crate::queries::{FilterCriteria, SortDescriptor};
use crate::url_state::navigator::{HistoryMode, Navigator};
use crate::url_state::params::QueryParams;
use crate::url_state::state::{FilterInput, ListState};

pub struct ListStateAdapter<'s, N: Navigator> {
    schema: &'s ListSchema,
    navigator: N,
}

impl<'s, N: Navigator> ListStateAdapter<'s, N> {
    pub fn new(schema: &'s ListSchema, navigator: N) -> Self {
        Self { schema, navigator }
    }

    pub fn schema(&self) -> &ListSchema {
        self.schema
    }

    /// Current state decoded from the navigator's parameters
    pub fn state(&self) -> ListState {
        ListState::from_params(self.schema, &self.navigator.current())
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.state().criteria(self.schema)
    }

    pub fn has_active_filters(&self) -> bool {
        self.state().has_active_filters()
    }

    pub fn fingerprint(&self) -> String {
        self.state().fingerprint(self.schema)
    }

    /// Change one filter and go back to page 1.
    ///
    /// The page is reset even when the filter name is unknown to the schema;
    /// the filter values themselves are then left untouched.
    pub fn set_filter(&mut self, name: &str, input: FilterInput) {
        let mut state = self.state();
        if !state.apply_filter(self.schema, name, input) {
            tracing::debug!(list = self.schema.name, filter = name, "filter ignored");
        }
        state.page = 1;
        self.replace(&state);
    }

    /// Change the sort; the page is kept and unsortable columns are ignored
    pub fn set_sort(&mut self, sort: SortDescriptor) {
        if let Some(column) = sort.column.as_deref() {
            if !self.schema.is_sortable(column) {
                tracing::debug!(list = self.schema.name, column, "column not sortable");
                return;
            }
        }
        let mut state = self.state();
        state.sort = sort;
        self.replace(&state);
    }

    /// Header-click sort cycling on `column`; unsortable columns are ignored
    pub fn toggle_sort(&mut self, column: &str) {
        if !self.schema.is_sortable(column) {
            tracing::debug!(list = self.schema.name, column, "column not sortable");
            return;
        }
        let mut state = self.state();
        state.sort = state.sort.toggled(column);
        self.replace(&state);
    }

    /// Jump to a page; values below 1 become 1
    pub fn set_page(&mut self, page: usize) {
        let mut state = self.state();
        state.page = page.max(1);
        self.replace(&state);
    }

    /// Drop every parameter, filters, sort and page alike, as a new history entry
    pub fn clear_filters(&mut self) {
        tracing::debug!(list = self.schema.name, "clear filters");
        self.navigator.navigate(QueryParams::new(), HistoryMode::Push);
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    fn replace(&mut self, state: &ListState) {
        let params = state.to_params(self.schema);
        tracing::debug!(list = self.schema.name, params = %params, "url state replaced");
        self.navigator.navigate(params, HistoryMode::Replace);
    }
}
