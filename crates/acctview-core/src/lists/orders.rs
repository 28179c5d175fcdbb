//! Orders list

use super::schema::{FilterSpec, ListSchema};
use super::ListRecord;
use crate::export::csv::Column;
use crate::model::{OrderListItem, OrderStatus, ValueKind};
use crate::queries::SortDescriptor;
use serde::Serialize;

pub fn schema() -> ListSchema {
    ListSchema {
        name: "orders",
        resource: "orders",
        filters: vec![
            FilterSpec::search("search", "search", &["displayId", "clientName"]),
            FilterSpec::multi_select("status", "status", "status"),
            FilterSpec::multi_select("type", "type", "type"),
            FilterSpec::multi_select("paymentStatus", "payment", "paymentStatus"),
            FilterSpec::range("date", "from", "to", "sessionDate", ValueKind::Date),
        ],
        sortable: vec![
            "displayId",
            "clientName",
            "status",
            "type",
            "sessionDate",
            "location",
            "paymentStatus",
            "total",
            "createdAt",
        ],
        default_sort: SortDescriptor::desc("createdAt"),
        default_page_size: 10,
    }
}

impl ListRecord for OrderListItem {
    fn schema() -> ListSchema {
        schema()
    }

    fn csv_columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Order", |o: &Self| o.display_id.clone()),
            Column::new("Client", |o: &Self| o.client_name.clone()),
            Column::new("Type", |o: &Self| o.order_type.as_str().to_string()),
            Column::new("Status", |o: &Self| o.status.as_str().to_string()),
            Column::new("Payment", |o: &Self| o.payment_status.as_str().to_string()),
            Column::new("Session date", |o: &Self| {
                o.session_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            }),
            Column::new("Total", |o: &Self| format!("{:.2}", o.total)),
        ]
    }
}

/// Header counters for the orders page, over the whole collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total: usize,
    pub scheduled: usize,
    /// confirmed, in progress or editing
    pub in_progress: usize,
    /// in review or revision requested
    pub pending_review: usize,
    /// delivered or completed
    pub completed: usize,
}

impl OrderStats {
    pub fn from_orders(orders: &[OrderListItem]) -> Self {
        orders.iter().fold(
            OrderStats {
                total: orders.len(),
                ..OrderStats::default()
            },
            |mut stats, order| {
                match order.status {
                    OrderStatus::Scheduled => stats.scheduled += 1,
                    OrderStatus::Confirmed | OrderStatus::InProgress | OrderStatus::Editing => {
                        stats.in_progress += 1
                    }
                    OrderStatus::Review | OrderStatus::RevisionRequested => {
                        stats.pending_review += 1
                    }
                    OrderStatus::Delivered | OrderStatus::Completed => stats.completed += 1,
                    _ => {}
                }
                stats
            },
        )
    }
}
