//! Declarative description of one list screen
//!
//! A schema names the filters a list offers, which URL parameters carry
//! them, which record fields they read, which columns are sortable and what
//! the defaults are. The URL adapter and the engine need nothing else.

use crate::model::ValueKind;
use crate::queries::SortDescriptor;

/// URL key for the sort column
pub const PARAM_SORT_BY: &str = "sortBy";
/// URL key for the sort direction
pub const PARAM_SORT_DIR: &str = "sortDir";
/// URL key for the 1-based page number
pub const PARAM_PAGE: &str = "page";

/// How a filter reads records and which parameters carry it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
    /// Free-text, case-insensitive substring over several text fields
    Search {
        param: &'static str,
        fields: &'static [&'static str],
    },
    /// Any of several enumerated values, comma-joined in the URL
    MultiSelect {
        param: &'static str,
        field: &'static str,
    },
    /// Exactly one value of the given kind
    Single {
        param: &'static str,
        field: &'static str,
        value_kind: ValueKind,
    },
    /// Inclusive `from`/`to` bounds on one field
    Range {
        from_param: &'static str,
        to_param: &'static str,
        field: &'static str,
        value_kind: ValueKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Logical filter name used by `set_filter`
    pub name: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    pub fn search(name: &'static str, param: &'static str, fields: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: FilterKind::Search { param, fields },
        }
    }

    pub fn multi_select(name: &'static str, param: &'static str, field: &'static str) -> Self {
        Self {
            name,
            kind: FilterKind::MultiSelect { param, field },
        }
    }

    pub fn single(
        name: &'static str,
        param: &'static str,
        field: &'static str,
        value_kind: ValueKind,
    ) -> Self {
        Self {
            name,
            kind: FilterKind::Single {
                param,
                field,
                value_kind,
            },
        }
    }

    pub fn range(
        name: &'static str,
        from_param: &'static str,
        to_param: &'static str,
        field: &'static str,
        value_kind: ValueKind,
    ) -> Self {
        Self {
            name,
            kind: FilterKind::Range {
                from_param,
                to_param,
                field,
                value_kind,
            },
        }
    }

    /// URL parameters owned by this filter
    pub fn params(&self) -> Vec<&'static str> {
        match &self.kind {
            FilterKind::Search { param, .. }
            | FilterKind::MultiSelect { param, .. }
            | FilterKind::Single { param, .. } => vec![*param],
            FilterKind::Range {
                from_param,
                to_param,
                ..
            } => vec![*from_param, *to_param],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSchema {
    /// List identifier, e.g. `api-logs`
    pub name: &'static str,
    /// Resource name used for export file names, e.g. `api-logs`
    pub resource: &'static str,
    pub filters: Vec<FilterSpec>,
    pub sortable: Vec<&'static str>,
    pub default_sort: SortDescriptor,
    pub default_page_size: usize,
}

impl ListSchema {
    pub fn filter(&self, name: &str) -> Option<&FilterSpec> {
        self.filters.iter().find(|f| f.name == name)
    }

    pub fn is_sortable(&self, column: &str) -> bool {
        self.sortable.iter().any(|c| *c == column)
    }

    /// Every URL key this schema reads, filters first
    pub fn params(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.filters.iter().flat_map(FilterSpec::params).collect();
        keys.extend([PARAM_SORT_BY, PARAM_SORT_DIR, PARAM_PAGE]);
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_owns_two_params() {
        let spec = FilterSpec::range("date", "from", "to", "sessionDate", ValueKind::Date);
        assert_eq!(spec.params(), vec!["from", "to"]);
    }

    #[test]
    fn test_schema_lookup() {
        let schema = ListSchema {
            name: "things",
            resource: "things",
            filters: vec![FilterSpec::multi_select("status", "status", "status")],
            sortable: vec!["total"],
            default_sort: SortDescriptor::none(),
            default_page_size: 10,
        };
        assert!(schema.filter("status").is_some());
        assert!(schema.filter("type").is_none());
        assert!(schema.is_sortable("total"));
        assert_eq!(schema.params(), vec!["status", "sortBy", "sortDir", "page"]);
    }
}
