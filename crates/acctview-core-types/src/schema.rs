//! Canonical schema constants for structured logging
//!
//! These keys are shared between the logging macros and the test capture
//! layer so that assertions never drift from what is emitted.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// List query fields
pub const FIELD_LIST: &str = "list";
pub const FIELD_PAGE: &str = "page";
pub const FIELD_PAGE_SIZE: &str = "page_size";
pub const FIELD_TOTAL_MATCHED: &str = "total_matched";
pub const FIELD_TOTAL_PAGES: &str = "total_pages";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
