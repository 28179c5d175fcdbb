//! Export command
//!
//! Usage: acctview export <LIST> --data <FILE> [--params <QUERY>] [--output <DIR>] [--date <YYYY-MM-DD>]

use acctview_core::export::write_csv;
use acctview_core::lists::{load_records, ListKind, ListRecord, ListView};
use acctview_core::model::{ApiLog, Invoice, Member, OrderListItem};
use acctview_core::url_state::{ListState, QueryParams};
use chrono::{NaiveDate, Utc};
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// List name: orders, invoices, api-logs or members
    pub list: String,

    /// JSON file holding an array of records
    #[arg(short, long)]
    pub data: PathBuf,

    /// URL query string; the page is ignored, every matching row is written
    #[arg(short, long, default_value = "")]
    pub params: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Date used in the file name (default: today, UTC)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

/// Execute export command
pub fn execute(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let kind: ListKind = args.list.parse()?;
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());
    let path = match kind {
        ListKind::Orders => export::<OrderListItem>(&args, date)?,
        ListKind::Invoices => export::<Invoice>(&args, date)?,
        ListKind::ApiLogs => export::<ApiLog>(&args, date)?,
        ListKind::Members => export::<Member>(&args, date)?,
    };
    println!("✓ Exported to {}", path.display());
    Ok(())
}

fn export<R: ListRecord>(args: &ExportArgs, date: NaiveDate) -> acctview_core::Result<PathBuf> {
    let records: Vec<R> = load_records(&args.data)?;
    let view = ListView::new(&records);
    let schema = view.schema();
    let state = ListState::from_params(schema, &QueryParams::parse(&args.params));
    write_csv(
        Path::new(&args.output),
        schema.resource,
        date,
        &view.all_matching(&state),
        &R::csv_columns(),
    )
}
