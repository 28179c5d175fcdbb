//! Deserialized list state: the user's filter values, sort and page
//!
//! Filter values are stored in their URL-facing string form so that
//! `deserialize(serialize(state)) == state` holds exactly. Only non-default
//! values are stored; an absent entry means "no constraint".

use crate::lists::schema::{FilterKind, FilterSpec, ListSchema};
use crate::model::{FieldValue, ValueKind};
use crate::queries::{Criterion, FilterCriteria, PageDescriptor, Selection, SortDescriptor};
use crate::url_state::codec;
use crate::url_state::params::QueryParams;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Current value of one filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Search text or a single scalar value
    Text(String),
    /// Non-empty multi-select choice
    Values(Vec<String>),
    /// At least one bound set
    Range {
        from: Option<String>,
        to: Option<String>,
    },
}

/// A requested change to one filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterInput {
    /// Text for search/scalar filters; comma-separated values for multi-selects
    Text(String),
    /// Explicit multi-select values
    Values(Vec<String>),
    /// Remove the constraint (the `all` sentinel)
    All,
    /// Replace both range bounds
    Range {
        from: Option<String>,
        to: Option<String>,
    },
    /// Replace only the lower range bound
    From(Option<String>),
    /// Replace only the upper range bound
    To(Option<String>),
}

impl FilterInput {
    /// A single select value, wrapped into a one-element selection
    pub fn one(value: impl Into<String>) -> Self {
        FilterInput::Values(vec![value.into()])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListState {
    pub filters: BTreeMap<String, FilterValue>,
    pub sort: SortDescriptor,
    pub page: usize,
}

impl ListState {
    /// Defaults for every parameter
    pub fn initial(schema: &ListSchema) -> Self {
        Self {
            filters: BTreeMap::new(),
            sort: schema.default_sort.clone(),
            page: 1,
        }
    }

    pub fn from_params(schema: &ListSchema, params: &QueryParams) -> Self {
        codec::deserialize(schema, params)
    }

    pub fn to_params(&self, schema: &ListSchema) -> QueryParams {
        codec::serialize(schema, self)
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Text value of a filter, `""` when unset
    pub fn text(&self, name: &str) -> &str {
        match self.filters.get(name) {
            Some(FilterValue::Text(text)) => text,
            _ => "",
        }
    }

    /// Selection of a multi-select filter, `All` when unset
    pub fn selection(&self, name: &str) -> Selection {
        match self.filters.get(name) {
            Some(FilterValue::Values(values)) => Selection::from_values(values.iter().cloned()),
            _ => Selection::All,
        }
    }

    /// Merge one filter change into the state.
    ///
    /// Returns `false` (state untouched) when the schema has no such filter
    /// or the input does not apply to the filter's kind.
    pub fn apply_filter(&mut self, schema: &ListSchema, name: &str, input: FilterInput) -> bool {
        let Some(spec) = schema.filter(name) else {
            return false;
        };
        let Some(next) = resolve_input(spec, self.filters.get(name), input) else {
            return false;
        };
        match next {
            Some(value) => {
                self.filters.insert(spec.name.to_string(), value);
            }
            None => {
                self.filters.remove(spec.name);
            }
        }
        true
    }

    /// Engine criteria for the current filter values
    pub fn criteria(&self, schema: &ListSchema) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        for spec in &schema.filters {
            let Some(value) = self.filters.get(spec.name) else {
                continue;
            };
            if let Some(criterion) = to_criterion(spec, value) {
                criteria.insert(spec.name, criterion);
            }
        }
        criteria
    }

    pub fn page_descriptor(&self, page_size: usize) -> PageDescriptor {
        PageDescriptor::new(self.page, page_size)
    }

    /// SHA-256 over the list name and canonical query string.
    ///
    /// Equal states of the same list always share a fingerprint, so callers
    /// can key memoized query results on it.
    pub fn fingerprint(&self, schema: &ListSchema) -> String {
        let mut hasher = Sha256::new();
        hasher.update(schema.name.as_bytes());
        hasher.update(b"?");
        hasher.update(self.to_params(schema).to_query_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// `None`: input not applicable. `Some(None)`: clear. `Some(Some(v))`: set.
fn resolve_input(
    spec: &FilterSpec,
    current: Option<&FilterValue>,
    input: FilterInput,
) -> Option<Option<FilterValue>> {
    match (&spec.kind, input) {
        (_, FilterInput::All) => Some(None),
        (FilterKind::Search { .. }, FilterInput::Text(text)) => Some(search_value(&text)),
        (FilterKind::Search { .. }, FilterInput::Values(values)) => {
            Some(search_value(&values.join(",")))
        }
        (FilterKind::MultiSelect { .. }, FilterInput::Text(text)) => {
            Some(selection_value(split_list(&text)))
        }
        (FilterKind::MultiSelect { .. }, FilterInput::Values(values)) => Some(selection_value(
            values.iter().flat_map(|v| split_list(v)).collect(),
        )),
        (FilterKind::Single { value_kind, .. }, FilterInput::Text(text)) => {
            Some(single_value(*value_kind, &text))
        }
        (FilterKind::Single { value_kind, .. }, FilterInput::Values(values)) => {
            Some(single_value(*value_kind, &values.join(",")))
        }
        (FilterKind::Range { value_kind, .. }, FilterInput::Range { from, to }) => Some(
            range_value(*value_kind, from.as_deref(), to.as_deref()),
        ),
        (FilterKind::Range { value_kind, .. }, FilterInput::From(from)) => {
            let to = current_bound(current, |_, to| to);
            Some(range_value(*value_kind, from.as_deref(), to.as_deref()))
        }
        (FilterKind::Range { value_kind, .. }, FilterInput::To(to)) => {
            let from = current_bound(current, |from, _| from);
            Some(range_value(*value_kind, from.as_deref(), to.as_deref()))
        }
        _ => None,
    }
}

fn current_bound(
    current: Option<&FilterValue>,
    pick: impl Fn(Option<String>, Option<String>) -> Option<String>,
) -> Option<String> {
    match current {
        Some(FilterValue::Range { from, to }) => pick(from.clone(), to.clone()),
        _ => None,
    }
}

fn to_criterion(spec: &FilterSpec, value: &FilterValue) -> Option<Criterion> {
    match (&spec.kind, value) {
        (FilterKind::Search { fields, .. }, FilterValue::Text(query)) => {
            Some(Criterion::text(fields.iter().copied(), query.clone()))
        }
        (FilterKind::MultiSelect { field, .. }, FilterValue::Values(values)) => Some(
            Criterion::one_of(*field, Selection::from_values(values.iter().cloned())),
        ),
        (
            FilterKind::Single {
                field, value_kind, ..
            },
            FilterValue::Text(raw),
        ) => FieldValue::parse(*value_kind, raw).map(|v| Criterion::exact(*field, v)),
        (
            FilterKind::Range {
                field, value_kind, ..
            },
            FilterValue::Range { from, to },
        ) => Some(Criterion::range(
            *field,
            from.as_deref().and_then(|b| FieldValue::parse(*value_kind, b)),
            to.as_deref().and_then(|b| FieldValue::parse(*value_kind, b)),
        )),
        _ => None,
    }
}

pub(crate) fn search_value(text: &str) -> Option<FilterValue> {
    if text.is_empty() {
        None
    } else {
        Some(FilterValue::Text(text.to_string()))
    }
}

pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|v| v.trim().to_string()).collect()
}

pub(crate) fn selection_value(values: Vec<String>) -> Option<FilterValue> {
    match Selection::from_values(values.into_iter().map(|v| v.trim().to_string())) {
        Selection::All => None,
        Selection::Values(values) => Some(FilterValue::Values(values)),
    }
}

pub(crate) fn single_value(kind: ValueKind, raw: &str) -> Option<FilterValue> {
    let raw = raw.trim();
    if raw == crate::queries::ALL {
        return None;
    }
    FieldValue::parse(kind, raw).map(|_| FilterValue::Text(raw.to_string()))
}

pub(crate) fn range_value(kind: ValueKind, from: Option<&str>, to: Option<&str>) -> Option<FilterValue> {
    let valid = |bound: Option<&str>| {
        bound
            .map(str::trim)
            .filter(|b| FieldValue::parse(kind, b).is_some())
            .map(str::to_string)
    };
    let from = valid(from);
    let to = valid(to);
    if from.is_none() && to.is_none() {
        None
    } else {
        Some(FilterValue::Range { from, to })
    }
}
