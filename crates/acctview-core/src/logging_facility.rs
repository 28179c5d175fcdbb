//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Operation macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - In-memory capture for test assertions
//!
//! # Usage
//!
//! ```rust
//! use acctview_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Output always goes to stderr so command output on stdout stays clean.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
