//! The record abstraction consumed by the list query engine

use super::value::FieldValue;

/// A flat, identifiable item shown in a list (order, invoice, API log, member)
///
/// Implementations expose their fields by name. Unknown names must yield
/// `FieldValue::Null` rather than panic, since field names arrive from URLs.
pub trait Record {
    /// Stable unique identifier
    fn id(&self) -> &str;

    /// Value of the named field, `FieldValue::Null` when absent or unknown
    fn field(&self, name: &str) -> FieldValue;
}

impl<R: Record + ?Sized> Record for &R {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn field(&self, name: &str) -> FieldValue {
        (**self).field(name)
    }
}
