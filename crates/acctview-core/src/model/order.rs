//! Order list item model
//!
//! The lightweight order shape shown in the orders table. Enumerated fields
//! serialize in snake_case, matching the values carried in URL filters.

use super::record::Record;
use super::value::FieldValue;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    PendingConfirmation,
    Confirmed,
    Scheduled,
    InProgress,
    Editing,
    Review,
    RevisionRequested,
    Delivered,
    Completed,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::PendingConfirmation => "pending_confirmation",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Scheduled => "scheduled",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Editing => "editing",
            OrderStatus::Review => "review",
            OrderStatus::RevisionRequested => "revision_requested",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }
}

/// Kind of production ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Photo,
    Video,
    Hybrid,
    Ai,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Photo => "photo",
            OrderType::Video => "video",
            OrderType::Hybrid => "hybrid",
            OrderType::Ai => "ai",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Partial,
    Refunded,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Failed => "failed",
        }
    }
}

/// One row of the orders table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListItem {
    pub id: String,

    /// Human-facing reference, e.g. `ORD-2025-0001`
    pub display_id: String,

    pub status: OrderStatus,

    #[serde(rename = "type")]
    pub order_type: OrderType,

    pub client_name: String,

    /// Session day; `None` until scheduled
    pub session_date: Option<NaiveDate>,

    /// Formatted `city, country`, `Remote`, or unknown
    pub location: Option<String>,

    pub payment_status: PaymentStatus,

    pub total: f64,

    pub currency: String,

    pub created_at: DateTime<Utc>,

    pub created_by: String,
}

impl Record for OrderListItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "displayId" => self.display_id.as_str().into(),
            "status" => self.status.as_str().into(),
            "type" => self.order_type.as_str().into(),
            "clientName" => self.client_name.as_str().into(),
            "sessionDate" => self.session_date.into(),
            "location" => self.location.as_deref().into(),
            "paymentStatus" => self.payment_status.as_str().into(),
            "total" => self.total.into(),
            "currency" => self.currency.as_str().into(),
            "createdAt" => self.created_at.into(),
            "createdBy" => self.created_by.as_str().into(),
            _ => FieldValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes_from_console_json() {
        let json = r#"{
            "id": "1",
            "displayId": "ORD-001",
            "status": "pending_confirmation",
            "type": "video",
            "clientName": "Bob Jones",
            "sessionDate": null,
            "location": "London, UK",
            "paymentStatus": "pending",
            "total": 1200,
            "currency": "EUR",
            "createdAt": "2023-09-02T00:00:00Z",
            "createdBy": "user-1"
        }"#;
        let order: OrderListItem = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::PendingConfirmation);
        assert_eq!(order.order_type, OrderType::Video);
        assert_eq!(order.field("sessionDate"), FieldValue::Null);
        assert_eq!(order.field("status"), FieldValue::text("pending_confirmation"));
        assert_eq!(order.field("total"), FieldValue::Number(1200.0));
    }

    #[test]
    fn test_unknown_field_is_null() {
        let json = r#"{"id":"1","displayId":"ORD-1","status":"draft","type":"ai",
            "clientName":"A","sessionDate":"2024-01-01","location":null,
            "paymentStatus":"paid","total":1,"currency":"EUR",
            "createdAt":"2024-01-01T00:00:00Z","createdBy":"x"}"#;
        let order: OrderListItem = serde_json::from_str(json).unwrap();
        assert!(order.field("nope").is_null());
    }
}
