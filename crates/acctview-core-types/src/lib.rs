//! Core types shared by the acctview crates
//!
//! - **Correlation**: `RequestId` stamped on every CLI invocation and carried
//!   into structured errors
//! - **Schema constants**: canonical field keys and event names used by the
//!   logging macros and by tests that assert on captured events

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
