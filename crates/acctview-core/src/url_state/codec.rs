//! Bidirectional mapping between `ListState` and URL parameters
//!
//! Encoding keeps URLs canonical: defaults are never written, so the same
//! view always has the same URL. Decoding never fails; anything malformed
//! falls back to its default.

use crate::lists::schema::{FilterKind, ListSchema, PARAM_PAGE, PARAM_SORT_BY, PARAM_SORT_DIR};
use crate::queries::{SortDescriptor, SortDirection};
use crate::url_state::params::QueryParams;
use crate::url_state::state::{
    range_value, search_value, selection_value, single_value, split_list, FilterValue, ListState,
};
use std::collections::BTreeMap;

/// Encode a state as the complete parameter map for its list
pub fn serialize(schema: &ListSchema, state: &ListState) -> QueryParams {
    let mut params = QueryParams::new();

    for spec in &schema.filters {
        let Some(value) = state.filters.get(spec.name) else {
            continue;
        };
        match (&spec.kind, value) {
            (FilterKind::Search { param, .. }, FilterValue::Text(text))
            | (FilterKind::Single { param, .. }, FilterValue::Text(text)) => {
                params.set(*param, text.as_str());
            }
            (FilterKind::MultiSelect { param, .. }, FilterValue::Values(values)) => {
                params.set(*param, values.join(","));
            }
            (
                FilterKind::Range {
                    from_param,
                    to_param,
                    ..
                },
                FilterValue::Range { from, to },
            ) => {
                if let Some(from) = from {
                    params.set(*from_param, from.as_str());
                }
                if let Some(to) = to {
                    params.set(*to_param, to.as_str());
                }
            }
            _ => {}
        }
    }

    if state.sort != schema.default_sort {
        if let Some(column) = &state.sort.column {
            params.set(PARAM_SORT_BY, column.as_str());
            params.set(PARAM_SORT_DIR, state.sort.direction.as_str());
        }
    }

    if state.page > 1 {
        params.set(PARAM_PAGE, state.page.to_string());
    }

    params
}

/// Decode parameters into a state, defaulting anything absent or malformed
pub fn deserialize(schema: &ListSchema, params: &QueryParams) -> ListState {
    let mut filters = BTreeMap::new();

    for spec in &schema.filters {
        let value = match &spec.kind {
            FilterKind::Search { param, .. } => params.get(param).and_then(search_value),
            FilterKind::MultiSelect { param, .. } => params
                .get(param)
                .and_then(|raw| selection_value(split_list(raw))),
            FilterKind::Single {
                param, value_kind, ..
            } => params
                .get(param)
                .and_then(|raw| single_value(*value_kind, raw)),
            FilterKind::Range {
                from_param,
                to_param,
                value_kind,
                ..
            } => range_value(*value_kind, params.get(from_param), params.get(to_param)),
        };
        if let Some(value) = value {
            filters.insert(spec.name.to_string(), value);
        }
    }

    let sort = normalize_sort(
        schema,
        SortDescriptor {
            column: params.get(PARAM_SORT_BY).map(str::to_string),
            direction: params
                .get(PARAM_SORT_DIR)
                .and_then(SortDirection::parse)
                .unwrap_or(schema.default_sort.direction),
        },
    );

    let page = params
        .get(PARAM_PAGE)
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1);

    ListState {
        filters,
        sort,
        page,
    }
}

/// Unknown or unsortable columns fall back to the default column; a state
/// without a column carries the default direction.
pub fn normalize_sort(schema: &ListSchema, sort: SortDescriptor) -> SortDescriptor {
    let column = sort
        .column
        .filter(|c| schema.is_sortable(c))
        .or_else(|| schema.default_sort.column.clone());
    let direction = if column.is_some() {
        sort.direction
    } else {
        schema.default_sort.direction
    };
    SortDescriptor { column, direction }
}
