//! Query command
//!
//! Usage: acctview query <LIST> --data <FILE> [--params <QUERY>]

use acctview_core::lists::{load_records, ListKind, ListRecord, ListView};
use acctview_core::model::{ApiLog, Invoice, Member, OrderListItem};
use acctview_core::url_state::{ListState, QueryParams};
use acctview_core::ConsoleConfig;
use clap::Args;
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// List name: orders, invoices, api-logs or members
    pub list: String,

    /// JSON file holding an array of records
    #[arg(short, long)]
    pub data: PathBuf,

    /// URL query string, e.g. `status=confirmed&page=2`
    #[arg(short, long, default_value = "")]
    pub params: String,
}

/// Execute query command
pub fn execute(args: QueryArgs, config: &ConsoleConfig) -> Result<(), Box<dyn std::error::Error>> {
    let kind: ListKind = args.list.parse()?;
    let output = match kind {
        ListKind::Orders => run::<OrderListItem>(&args, config)?,
        ListKind::Invoices => run::<Invoice>(&args, config)?,
        ListKind::ApiLogs => run::<ApiLog>(&args, config)?,
        ListKind::Members => run::<Member>(&args, config)?,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run<R: ListRecord>(
    args: &QueryArgs,
    config: &ConsoleConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let records: Vec<R> = load_records(&args.data)?;
    let view = ListView::new(&records).with_page_size(config.page_size_for(&R::schema()));
    let schema = view.schema();

    let state = ListState::from_params(schema, &QueryParams::parse(&args.params));
    let result = view.run(&state);
    let (first, last) = result.window(&state.page_descriptor(view.page_size()));

    Ok(json!({
        "list": schema.name,
        "state": state,
        "params": state.to_params(schema).to_query_string(),
        "fingerprint": state.fingerprint(schema),
        "showing": { "from": first, "to": last },
        "result": result,
    }))
}
