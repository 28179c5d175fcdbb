//! Invoice history list

use super::schema::{FilterSpec, ListSchema};
use super::ListRecord;
use crate::export::csv::Column;
use crate::model::Invoice;
use crate::queries::SortDescriptor;

pub fn schema() -> ListSchema {
    ListSchema {
        name: "invoices",
        resource: "invoices",
        filters: vec![
            FilterSpec::search("search", "search", &["invoiceNumber", "id"]),
            FilterSpec::multi_select("status", "status", "status"),
        ],
        sortable: vec!["invoiceNumber", "date", "description", "status", "amount"],
        default_sort: SortDescriptor::desc("date"),
        default_page_size: 10,
    }
}

impl ListRecord for Invoice {
    fn schema() -> ListSchema {
        schema()
    }

    fn csv_columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Invoice", |i: &Self| i.invoice_number.clone()),
            Column::new("Date", |i: &Self| i.date.format("%Y-%m-%d").to_string()),
            Column::new("Description", |i: &Self| i.description.clone()),
            Column::new("Status", |i: &Self| i.status.as_str().to_string()),
            Column::new("Amount", |i: &Self| format!("{:.2}", i.amount)),
        ]
    }
}
