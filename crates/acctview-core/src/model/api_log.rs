//! API request log model for the developer console

use super::record::Record;
use super::value::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Outcome class derived from the status code (2xx / 4xx / 5xx)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiLogStatus {
    Success,
    ClientError,
    ServerError,
}

impl ApiLogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiLogStatus::Success => "success",
            ApiLogStatus::ClientError => "client_error",
            ApiLogStatus::ServerError => "server_error",
        }
    }

    /// Classify an HTTP status code. Anything that is not 4xx/5xx counts as success.
    pub fn from_status_code(code: u16) -> Self {
        match code {
            400..=499 => ApiLogStatus::ClientError,
            500..=599 => ApiLogStatus::ServerError,
            _ => ApiLogStatus::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLog {
    pub id: String,
    pub api_key_id: String,
    pub api_key_name: String,
    pub method: HttpMethod,
    /// e.g. `/v1/media/upload`
    pub endpoint: String,
    pub status_code: u16,
    pub status: ApiLogStatus,
    /// Milliseconds
    pub response_time: u32,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl Record for ApiLog {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.as_str().into(),
            "apiKeyId" => self.api_key_id.as_str().into(),
            "apiKeyName" => self.api_key_name.as_str().into(),
            "method" => self.method.as_str().into(),
            "endpoint" => self.endpoint.as_str().into(),
            "statusCode" => u32::from(self.status_code).into(),
            "status" => self.status.as_str().into(),
            "responseTime" => self.response_time.into(),
            "timestamp" => self.timestamp.into(),
            "ipAddress" => self.ip_address.as_deref().into(),
            "errorMessage" => self.error_message.as_deref().into(),
            _ => FieldValue::Null,
        }
    }
}
