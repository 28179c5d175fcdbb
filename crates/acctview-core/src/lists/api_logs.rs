//! API request log list

use super::schema::{FilterSpec, ListSchema};
use super::ListRecord;
use crate::export::csv::Column;
use crate::model::{ApiLog, ValueKind};
use crate::queries::SortDescriptor;
use chrono::SecondsFormat;

pub fn schema() -> ListSchema {
    ListSchema {
        name: "api-logs",
        resource: "api-logs",
        filters: vec![
            FilterSpec::single("key", "key", "apiKeyId", ValueKind::Text),
            FilterSpec::multi_select("method", "method", "method"),
            FilterSpec::multi_select("status", "status", "status"),
            FilterSpec::range("date", "from", "to", "timestamp", ValueKind::Timestamp),
        ],
        sortable: vec![
            "timestamp",
            "method",
            "endpoint",
            "statusCode",
            "responseTime",
            "apiKeyName",
        ],
        default_sort: SortDescriptor::desc("timestamp"),
        default_page_size: 50,
    }
}

impl ListRecord for ApiLog {
    fn schema() -> ListSchema {
        schema()
    }

    fn csv_columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Timestamp", |l: &Self| {
                l.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
            }),
            Column::new("Method", |l: &Self| l.method.as_str().to_string()),
            Column::new("Endpoint", |l: &Self| l.endpoint.clone()),
            Column::new("Status", |l: &Self| l.status_code.to_string()),
            Column::new("Duration", |l: &Self| format!("{}ms", l.response_time)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ApiLogStatus, HttpMethod};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_csv_row_matches_console_export() {
        let log = ApiLog {
            id: "log_1".into(),
            api_key_id: "key_1".into(),
            api_key_name: "Production".into(),
            method: HttpMethod::Post,
            endpoint: "/v1/media/upload".into(),
            status_code: 201,
            status: ApiLogStatus::Success,
            response_time: 142,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            ip_address: None,
            error_message: None,
        };
        let csv = crate::export::to_csv(&[log], &ApiLog::csv_columns());
        assert_eq!(
            csv,
            "Timestamp,Method,Endpoint,Status,Duration\n\
             2024-05-01T12:30:00.000Z,POST,/v1/media/upload,201,142ms"
        );
    }
}
