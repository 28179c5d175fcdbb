//! Navigate command
//!
//! Usage: acctview navigate <LIST> [--params <QUERY>] <CHANGE>
//!
//! Prints the query string after the change.

use acctview_core::errors::AcctViewError;
use acctview_core::lists::{FilterKind, ListKind};
use acctview_core::queries::{SortDescriptor, SortDirection};
use acctview_core::url_state::{FilterInput, ListStateAdapter, MemoryHistory, Navigator};
use clap::Args;

#[derive(Debug, Args)]
pub struct NavigateArgs {
    /// List name: orders, invoices, api-logs or members
    pub list: String,

    /// Current URL query string
    #[arg(short, long, default_value = "")]
    pub params: String,

    #[command(flatten)]
    pub change: Change,
}

/// Exactly one state change
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct Change {
    /// Set a filter; multi-selects take comma-separated values, ranges `FROM..TO`
    #[arg(long, value_name = "NAME=VALUE")]
    pub filter: Option<String>,

    /// Reset a filter to "all"
    #[arg(long, value_name = "NAME")]
    pub all: Option<String>,

    /// Sort by a column, descending unless `:asc` is given
    #[arg(long, value_name = "COLUMN[:DIR]")]
    pub sort: Option<String>,

    /// Header-click sort cycling on a column
    #[arg(long, value_name = "COLUMN")]
    pub toggle_sort: Option<String>,

    /// Jump to a page
    #[arg(long)]
    pub page: Option<usize>,

    /// Drop every filter, the sort and the page
    #[arg(long)]
    pub clear: bool,
}

/// Execute navigate command
pub fn execute(args: NavigateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let kind: ListKind = args.list.parse()?;
    let schema = kind.schema();
    let mut history = MemoryHistory::from_query(&args.params);
    let mut adapter = ListStateAdapter::new(&schema, &mut history);
    let change = args.change;

    if let Some(raw) = change.filter {
        let (name, value) = raw.split_once('=').ok_or_else(|| {
            AcctViewError::invalid_input(format!("expected NAME=VALUE, got '{}'", raw))
        })?;
        let input = match schema.filter(name).map(|spec| &spec.kind) {
            Some(FilterKind::Range { .. }) => range_input(value),
            _ => FilterInput::Text(value.to_string()),
        };
        adapter.set_filter(name, input);
    } else if let Some(name) = change.all {
        adapter.set_filter(&name, FilterInput::All);
    } else if let Some(raw) = change.sort {
        adapter.set_sort(parse_sort(&schema, &raw)?);
    } else if let Some(column) = change.toggle_sort {
        if !schema.is_sortable(&column) {
            return Err(not_sortable(&column).into());
        }
        adapter.toggle_sort(&column);
    } else if let Some(page) = change.page {
        adapter.set_page(page);
    } else if change.clear {
        adapter.clear_filters();
    }

    drop(adapter);
    println!("{}", history.current().to_query_string());
    Ok(())
}

/// `FROM..TO`, either side may be empty; a bare value sets only `FROM`
fn range_input(value: &str) -> FilterInput {
    let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.trim().to_string());
    match value.split_once("..") {
        Some((from, to)) => FilterInput::Range {
            from: non_empty(from),
            to: non_empty(to),
        },
        None => FilterInput::From(non_empty(value)),
    }
}

fn parse_sort(
    schema: &acctview_core::ListSchema,
    raw: &str,
) -> Result<SortDescriptor, AcctViewError> {
    let (column, direction) = match raw.split_once(':') {
        Some((column, dir)) => (
            column,
            SortDirection::parse(dir).ok_or_else(|| {
                AcctViewError::invalid_input(format!("sort direction must be asc or desc, got '{}'", dir))
            })?,
        ),
        None => (raw, SortDirection::Desc),
    };
    if !schema.is_sortable(column) {
        return Err(not_sortable(column));
    }
    Ok(SortDescriptor {
        column: Some(column.to_string()),
        direction,
    })
}

fn not_sortable(column: &str) -> AcctViewError {
    AcctViewError::invalid_input(format!("column '{}' is not sortable", column))
}
