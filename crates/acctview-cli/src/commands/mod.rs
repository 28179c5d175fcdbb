pub mod export;
pub mod navigate;
pub mod query;
pub mod stats;
