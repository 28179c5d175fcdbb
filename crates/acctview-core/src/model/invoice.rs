//! Invoice model for the billing history table

use super::record::Record;
use super::value::FieldValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceType {
    Subscription,
    CreditPurchase,
    PlanChange,
    PlanUpgrade,
}

impl InvoiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceType::Subscription => "subscription",
            InvoiceType::CreditPurchase => "credit_purchase",
            InvoiceType::PlanChange => "plan_change",
            InvoiceType::PlanUpgrade => "plan_upgrade",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Failed,
    Refunded,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Failed => "failed",
            InvoiceStatus::Refunded => "refunded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,

    /// e.g. `INV-2024-012`
    pub invoice_number: String,

    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,

    pub status: InvoiceStatus,

    pub date: NaiveDate,

    pub description: String,

    pub amount: f64,

    pub currency: String,

    pub pdf_url: String,
}

impl Record for Invoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "invoiceNumber" => self.invoice_number.as_str().into(),
            "type" => self.invoice_type.as_str().into(),
            "status" => self.status.as_str().into(),
            "date" => self.date.into(),
            "description" => self.description.as_str().into(),
            "amount" => self.amount.into(),
            "currency" => self.currency.as_str().into(),
            "pdfUrl" => self.pdf_url.as_str().into(),
            _ => FieldValue::Null,
        }
    }
}
