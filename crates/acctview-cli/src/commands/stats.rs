//! Stats command
//!
//! Usage: acctview stats --data <ORDERS_FILE>

use acctview_core::lists::{load_records, OrderStats};
use acctview_core::model::OrderListItem;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// JSON file holding an array of orders
    #[arg(short, long)]
    pub data: PathBuf,
}

/// Execute stats command
pub fn execute(args: StatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let orders: Vec<OrderListItem> = load_records(&args.data)?;
    let stats = OrderStats::from_orders(&orders);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
