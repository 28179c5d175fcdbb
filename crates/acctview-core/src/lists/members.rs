//! Team members list

use super::schema::{FilterSpec, ListSchema};
use super::ListRecord;
use crate::export::csv::Column;
use crate::model::Member;
use crate::queries::SortDescriptor;
use chrono::SecondsFormat;

pub fn schema() -> ListSchema {
    ListSchema {
        name: "members",
        resource: "members",
        filters: vec![
            FilterSpec::search("search", "search", &["name", "email"]),
            FilterSpec::multi_select("role", "role", "role"),
            FilterSpec::multi_select("status", "status", "status"),
        ],
        sortable: vec!["name", "email", "role", "status", "lastActiveAt"],
        default_sort: SortDescriptor::none(),
        default_page_size: 25,
    }
}

impl ListRecord for Member {
    fn schema() -> ListSchema {
        schema()
    }

    fn csv_columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Name", |m: &Self| m.name.clone()),
            Column::new("Email", |m: &Self| m.email.clone()),
            Column::new("Role", |m: &Self| {
                m.custom_role_name
                    .clone()
                    .unwrap_or_else(|| m.role.label().to_string())
            }),
            Column::new("Status", |m: &Self| m.status.as_str().to_string()),
            Column::new("Last active", |m: &Self| {
                m.last_active_at
                    .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
                    .unwrap_or_default()
            }),
        ]
    }
}
