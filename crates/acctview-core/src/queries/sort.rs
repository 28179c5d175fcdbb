//! Sort descriptor and the three-way comparator used by list queries
//!
//! Null handling is explicit: `Null` values always sort after every
//! non-null value, whichever direction is requested. Direction only
//! reverses the order among non-null values.

use crate::model::FieldValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Parse the URL form; anything other than `asc`/`desc` is `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// At most one active sort column plus a direction
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortDescriptor {
    /// No sort column: filtered order is preserved
    pub fn none() -> Self {
        Self::default()
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            direction: SortDirection::Desc,
        }
    }

    pub fn is_active(&self) -> bool {
        self.column.is_some()
    }

    /// Header-click behavior: the current column while descending flips to
    /// ascending; anything else becomes descending on `column`.
    pub fn toggled(&self, column: &str) -> Self {
        let direction = if self.column.as_deref() == Some(column)
            && self.direction == SortDirection::Desc
        {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        Self {
            column: Some(column.to_string()),
            direction,
        }
    }
}

/// Compare two field values under a direction, nulls last.
///
/// Values of different kinds are ordered by kind so the comparator stays total.
pub fn compare_values(a: &FieldValue, b: &FieldValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a
                .compare(b)
                .unwrap_or_else(|| a.kind_rank().cmp(&b.kind_rank()));
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
    }
}
