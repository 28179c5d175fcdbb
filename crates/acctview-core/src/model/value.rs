//! Field values exposed by records to the list query engine
//!
//! Every record flattens its fields into `FieldValue`s. The engine never
//! looks at concrete record types, only at these values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A single primitive field value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

/// The declared type of a filterable field, used to parse raw URL values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Number,
    Date,
    Timestamp,
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Borrow the string payload of a `Text` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value the way it would appear in a URL parameter.
    ///
    /// Whole numbers render without a fractional part so that `200` matches
    /// a status-code selection of `"200"`.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Null => None,
            FieldValue::Text(s) => Some(Cow::Borrowed(s)),
            FieldValue::Number(n) => Some(Cow::Owned(format_number(*n))),
            FieldValue::Date(d) => Some(Cow::Owned(d.format("%Y-%m-%d").to_string())),
            FieldValue::Timestamp(ts) => Some(Cow::Owned(ts.to_rfc3339())),
        }
    }

    /// Parse a raw parameter value as the given kind.
    ///
    /// Returns `None` for empty or malformed input. Date-like kinds accept
    /// both `YYYY-MM-DD` and RFC 3339; a plain date given for a timestamp
    /// field stays a `Date` and is compared by calendar day.
    pub fn parse(kind: ValueKind, raw: &str) -> Option<FieldValue> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match kind {
            ValueKind::Text => Some(FieldValue::Text(raw.to_string())),
            ValueKind::Number => raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(FieldValue::Number),
            ValueKind::Date => parse_date(raw)
                .map(FieldValue::Date)
                .or_else(|| parse_timestamp(raw).map(|ts| FieldValue::Date(ts.date_naive()))),
            ValueKind::Timestamp => parse_timestamp(raw)
                .map(FieldValue::Timestamp)
                .or_else(|| parse_date(raw).map(FieldValue::Date)),
        }
    }

    /// Three-way comparison between two values of compatible kinds.
    ///
    /// `None` when either side is `Null` or the kinds cannot be compared.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.partial_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(collate(a, b)),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => Some(a.cmp(b)),
            (FieldValue::Timestamp(a), FieldValue::Date(b)) => Some(a.date_naive().cmp(b)),
            (FieldValue::Date(a), FieldValue::Timestamp(b)) => Some(a.cmp(&b.date_naive())),
            _ => None,
        }
    }

    /// Equality as used by exact-match filters.
    ///
    /// Text compares byte-for-byte (no case folding); other kinds go through
    /// `compare`, so a timestamp equals a date on the same calendar day.
    pub fn matches(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a == b,
            _ => self.compare(other) == Some(Ordering::Equal),
        }
    }

    /// Rank used to keep mixed-kind columns totally ordered
    pub(crate) fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Number(_) => 0,
            FieldValue::Date(_) | FieldValue::Timestamp(_) => 1,
            FieldValue::Text(_) => 2,
            FieldValue::Null => 3,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(ts: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(ts)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Locale-style string ordering
///
/// Compares base letters first, ignoring accents and case, so `"Émile"`
/// sorts between `"Adam"` and `"Zeta"`. Ties fall back to the accented
/// lower-case form, then lower case before upper case so
/// `"apple" < "Apple" < "banana"`.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn lowercase(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collate_orders_case_insensitively() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zed", "alpha"), Ordering::Greater);
        assert_eq!(collate("apple", "Apple"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_collate_folds_accents() {
        let mut names = vec!["Zeta Studio", "Émile Photo", "Adam"];
        names.sort_by(|a, b| collate(a, b));
        assert_eq!(names, vec!["Adam", "Émile Photo", "Zeta Studio"]);

        assert_eq!(collate("resume", "résumé"), Ordering::Less);
        assert_eq!(collate("résumé", "Resume"), Ordering::Greater);
        assert_eq!(collate("Émile", "émile"), Ordering::Greater);
        // raw text breaks the final tie
        assert_ne!(collate("\u{e9}mile", "e\u{301}mile"), Ordering::Equal);
    }

    #[test]
    fn test_number_renders_without_fraction() {
        assert_eq!(FieldValue::Number(200.0).to_text().unwrap(), "200");
        assert_eq!(FieldValue::Number(12.5).to_text().unwrap(), "12.5");
        assert!(FieldValue::Null.to_text().is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(FieldValue::parse(ValueKind::Number, "abc"), None);
        assert_eq!(FieldValue::parse(ValueKind::Date, "2024-13-40"), None);
        assert_eq!(FieldValue::parse(ValueKind::Text, "   "), None);
    }

    #[test]
    fn test_parse_date_accepts_timestamp() {
        let v = FieldValue::parse(ValueKind::Date, "2024-03-10T08:00:00Z").unwrap();
        assert_eq!(
            v,
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
        );
    }

    #[test]
    fn test_timestamp_compares_to_date_by_day() {
        let ts = FieldValue::parse(ValueKind::Timestamp, "2024-03-10T23:59:00Z").unwrap();
        let day = FieldValue::parse(ValueKind::Date, "2024-03-10").unwrap();
        assert_eq!(ts.compare(&day), Some(Ordering::Equal));
        assert!(ts.matches(&day));
    }

    #[test]
    fn test_mismatched_kinds_are_incomparable() {
        let n = FieldValue::Number(1.0);
        let t = FieldValue::text("1");
        assert_eq!(n.compare(&t), None);
        assert_eq!(FieldValue::Null.compare(&FieldValue::Null), None);
    }

    #[test]
    fn test_text_match_is_exact() {
        assert!(FieldValue::text("GET").matches(&FieldValue::text("GET")));
        assert!(!FieldValue::text("GET").matches(&FieldValue::text("get")));
    }
}
