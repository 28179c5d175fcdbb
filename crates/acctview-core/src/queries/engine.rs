//! List query engine: filter, then sort, then paginate
//!
//! The engine is a pure function of its inputs. It holds no state, never
//! fails, and identical inputs always produce deep-equal results, so callers
//! can memoize on `(records, filters, sort, page)`.

use crate::model::{FieldValue, Record};
use crate::queries::filter::FilterCriteria;
use crate::queries::page::{PageDescriptor, QueryResult};
use crate::queries::sort::{compare_values, SortDescriptor};

/// Run the full pipeline and return one page of results
pub fn query<R: Record + Clone>(
    records: &[R],
    filters: &FilterCriteria,
    sort: &SortDescriptor,
    page: &PageDescriptor,
) -> QueryResult<R> {
    let matched = matching(records, filters, sort);
    let total_matched = matched.len();

    let items: Vec<R> = matched
        .into_iter()
        .skip(page.offset())
        .take(page.page_size())
        .cloned()
        .collect();

    tracing::debug!(
        records = records.len(),
        total_matched,
        page = page.page(),
        page_size = page.page_size(),
        returned = items.len(),
        "list query evaluated"
    );

    QueryResult {
        items,
        total_matched,
        total_pages: page.total_pages(total_matched),
    }
}

/// Every record passing the filters, in sorted order (all pages)
pub fn matching<'a, R: Record>(
    records: &'a [R],
    filters: &FilterCriteria,
    sort: &SortDescriptor,
) -> Vec<&'a R> {
    sort_records(filter_records(records, filters), sort)
}

/// Stage 1: keep records accepted by every criterion, preserving input order
pub fn filter_records<'a, R: Record>(records: &'a [R], filters: &FilterCriteria) -> Vec<&'a R> {
    records.iter().filter(|r| filters.accepts(*r)).collect()
}

/// Stage 2: stable sort on the descriptor's column; no column keeps input order
pub fn sort_records<'a, R: Record>(records: Vec<&'a R>, sort: &SortDescriptor) -> Vec<&'a R> {
    let Some(column) = sort.column.as_deref() else {
        return records;
    };

    // Extract keys once instead of on every comparison.
    let mut keyed: Vec<(FieldValue, &'a R)> =
        records.into_iter().map(|r| (r.field(column), r)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_values(a, b, sort.direction));
    keyed.into_iter().map(|(_, r)| r).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::filter::{Criterion, Selection};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        status: String,
        total: Option<f64>,
    }

    impl Record for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "id" => self.id.as_str().into(),
                "status" => self.status.as_str().into(),
                "total" => self.total.into(),
                _ => FieldValue::Null,
            }
        }
    }

    fn rows(totals: &[Option<f64>]) -> Vec<Row> {
        totals
            .iter()
            .enumerate()
            .map(|(i, t)| Row {
                id: format!("r{}", i),
                status: if i % 2 == 0 { "even" } else { "odd" }.to_string(),
                total: *t,
            })
            .collect()
    }

    #[test]
    fn test_no_sort_preserves_filtered_order() {
        let data = rows(&[Some(3.0), Some(1.0), Some(2.0)]);
        let result = query(
            &data,
            &FilterCriteria::new(),
            &SortDescriptor::none(),
            &PageDescriptor::first(10),
        );
        let ids: Vec<&str> = result.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r0", "r1", "r2"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let data = rows(&[Some(1.0), Some(1.0), Some(0.0), Some(1.0)]);
        let sorted = matching(&data, &FilterCriteria::new(), &SortDescriptor::asc("total"));
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r0", "r1", "r3"]);
    }

    #[test]
    fn test_nulls_sort_last_descending() {
        let data = rows(&[None, Some(5.0), Some(9.0)]);
        let sorted = matching(&data, &FilterCriteria::new(), &SortDescriptor::desc("total"));
        let totals: Vec<Option<f64>> = sorted.iter().map(|r| r.total).collect();
        assert_eq!(totals, vec![Some(9.0), Some(5.0), None]);
    }

    #[test]
    fn test_filter_then_paginate_counts_pre_slice() {
        let data = rows(&[Some(1.0); 25]);
        let filters = FilterCriteria::new()
            .with("status", Criterion::one_of("status", Selection::single("even")));
        let result = query(
            &data,
            &filters,
            &SortDescriptor::none(),
            &PageDescriptor::new(2, 10),
        );
        assert_eq!(result.total_matched, 13);
        assert_eq!(result.total_pages, 2);
        assert_eq!(result.items.len(), 3);
    }
}
