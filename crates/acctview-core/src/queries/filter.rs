//! Filter criteria for list queries
//!
//! Criteria are conjunctive: a record is kept only when every active
//! criterion accepts it. Inactive criteria (empty text, `All` selections,
//! ranges without bounds) accept everything.

use crate::model::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Sentinel used by select inputs and URLs for "no constraint"
pub const ALL: &str = "all";

/// Chosen values of a multi-select filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    All,
    Values(Vec<String>),
}

impl Selection {
    /// Build a selection, collapsing empty input and the `all` sentinel to `All`
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|v| !v.is_empty())
            .collect();
        if values.is_empty() || values.iter().any(|v| v == ALL) {
            Selection::All
        } else {
            Selection::Values(values)
        }
    }

    pub fn single(value: impl Into<String>) -> Self {
        Selection::from_values([value.into()])
    }

    /// `true` when the selection places no constraint
    pub fn is_all(&self) -> bool {
        match self {
            Selection::All => true,
            Selection::Values(values) => values.is_empty(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Values(values) => values.is_empty() || values.iter().any(|v| v == value),
        }
    }

    pub fn values(&self) -> &[String] {
        match self {
            Selection::All => &[],
            Selection::Values(values) => values,
        }
    }
}

/// A single constraint over one or more record fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Criterion {
    /// Field value equals `value`
    Exact { field: String, value: FieldValue },

    /// Field value (as text) is one of the selected values
    OneOf { field: String, selection: Selection },

    /// Case-insensitive substring match against any of `fields`
    Text { fields: Vec<String>, query: String },

    /// Inclusive range; either bound may be absent
    Range {
        field: String,
        from: Option<FieldValue>,
        to: Option<FieldValue>,
    },
}

impl Criterion {
    pub fn exact(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Criterion::Exact {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn one_of(field: impl Into<String>, selection: Selection) -> Self {
        Criterion::OneOf {
            field: field.into(),
            selection,
        }
    }

    pub fn text<I, S>(fields: I, query: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Criterion::Text {
            fields: fields.into_iter().map(Into::into).collect(),
            query: query.into(),
        }
    }

    pub fn range(
        field: impl Into<String>,
        from: Option<FieldValue>,
        to: Option<FieldValue>,
    ) -> Self {
        Criterion::Range {
            field: field.into(),
            from,
            to,
        }
    }

    /// Whether this criterion constrains anything at all
    pub fn is_active(&self) -> bool {
        match self {
            Criterion::Exact { value, .. } => !value.is_null(),
            Criterion::OneOf { selection, .. } => !selection.is_all(),
            Criterion::Text { fields, query } => !query.is_empty() && !fields.is_empty(),
            Criterion::Range { from, to, .. } => from.is_some() || to.is_some(),
        }
    }

    /// Evaluate the criterion against a record
    pub fn accepts<R: Record + ?Sized>(&self, record: &R) -> bool {
        if !self.is_active() {
            return true;
        }
        match self {
            Criterion::Exact { field, value } => record.field(field).matches(value),
            Criterion::OneOf { field, selection } => record
                .field(field)
                .to_text()
                .is_some_and(|text| selection.contains(&text)),
            Criterion::Text { fields, query } => {
                let needle = query.to_lowercase();
                fields.iter().any(|field| {
                    record
                        .field(field)
                        .as_str()
                        .is_some_and(|candidate| candidate.to_lowercase().contains(&needle))
                })
            }
            Criterion::Range { field, from, to } => {
                let value = record.field(field);
                if value.is_null() {
                    return false;
                }
                // Bounds that cannot be compared with the value are ignored.
                let above_from = from.as_ref().map_or(true, |bound| {
                    value
                        .compare(bound)
                        .map_or(true, |ord| ord != Ordering::Less)
                });
                let below_to = to.as_ref().map_or(true, |bound| {
                    value
                        .compare(bound)
                        .map_or(true, |ord| ord != Ordering::Greater)
                });
                above_from && below_to
            }
        }
    }
}

/// Named, conjunctive set of criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilterCriteria {
    criteria: BTreeMap<String, Criterion>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, criterion: Criterion) -> Self {
        self.insert(name, criterion);
        self
    }

    /// Insert or replace the criterion stored under `name`
    pub fn insert(&mut self, name: impl Into<String>, criterion: Criterion) {
        self.criteria.insert(name.into(), criterion);
    }

    pub fn remove(&mut self, name: &str) -> Option<Criterion> {
        self.criteria.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Criterion> {
        self.criteria.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Criterion)> {
        self.criteria.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of criteria that actually constrain the result
    pub fn active_count(&self) -> usize {
        self.criteria.values().filter(|c| c.is_active()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// `true` iff every criterion accepts the record
    pub fn accepts<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.criteria.values().all(|c| c.accepts(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct Row {
        id: String,
        name: &'static str,
        status: &'static str,
        amount: Option<f64>,
        day: Option<NaiveDate>,
    }

    impl Record for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> FieldValue {
            match name {
                "name" => self.name.into(),
                "status" => self.status.into(),
                "amount" => self.amount.into(),
                "day" => self.day.into(),
                _ => FieldValue::Null,
            }
        }
    }

    fn row(name: &'static str, status: &'static str, amount: Option<f64>) -> Row {
        Row {
            id: name.to_string(),
            name,
            status,
            amount,
            day: NaiveDate::from_ymd_opt(2024, 5, 1),
        }
    }

    #[test]
    fn test_selection_all_sentinel_collapses() {
        assert_eq!(Selection::from_values(["all"]), Selection::All);
        assert_eq!(Selection::from_values(Vec::<String>::new()), Selection::All);
        assert!(Selection::Values(vec![]).is_all());
        assert!(!Selection::single("paid").is_all());
    }

    #[test]
    fn test_text_search_is_case_insensitive() {
        let c = Criterion::text(["name"], "ALI");
        assert!(c.accepts(&row("Alice Smith", "paid", None)));
        assert!(!c.accepts(&row("Bob Jones", "paid", None)));
    }

    #[test]
    fn test_text_search_skips_non_text_fields() {
        let c = Criterion::text(["amount"], "12");
        assert!(!c.accepts(&row("x", "paid", Some(12.0))));
    }

    #[test]
    fn test_one_of_membership() {
        let c = Criterion::one_of("status", Selection::from_values(["paid", "partial"]));
        assert!(c.accepts(&row("a", "partial", None)));
        assert!(!c.accepts(&row("a", "failed", None)));
    }

    #[test]
    fn test_range_excludes_null_once_bound_set() {
        let c = Criterion::range("amount", Some(FieldValue::Number(10.0)), None);
        assert!(!c.accepts(&row("a", "paid", None)));
        assert!(c.accepts(&row("a", "paid", Some(10.0))));
        assert!(!c.accepts(&row("a", "paid", Some(9.99))));
    }

    #[test]
    fn test_range_without_bounds_is_inactive() {
        let c = Criterion::range("amount", None, None);
        assert!(!c.is_active());
        assert!(c.accepts(&row("a", "paid", None)));
    }

    #[test]
    fn test_range_ignores_incomparable_bound() {
        let c = Criterion::range("day", Some(FieldValue::Number(3.0)), None);
        assert!(c.accepts(&row("a", "paid", None)));
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let filters = FilterCriteria::new()
            .with("search", Criterion::text(["name"], "a"))
            .with("status", Criterion::one_of("status", Selection::single("paid")));
        assert!(filters.accepts(&row("Alice", "paid", None)));
        assert!(!filters.accepts(&row("Alice", "failed", None)));
        assert_eq!(filters.active_count(), 2);
    }
}
