//! CLI integration tests
//!
//! Each test writes JSON fixtures into a temp dir and runs the built binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const ORDERS: &str = r#"[
  {"id":"ord_1","displayId":"ORD-2025-0001","status":"confirmed","type":"photo",
   "clientName":"Acme, Inc.","sessionDate":"2025-02-01","location":null,
   "paymentStatus":"paid","total":1200,"currency":"EUR",
   "createdAt":"2025-01-10T09:00:00Z","createdBy":"user_1"},
  {"id":"ord_2","displayId":"ORD-2025-0002","status":"scheduled","type":"video",
   "clientName":"Globex","sessionDate":null,"location":"Remote",
   "paymentStatus":"pending","total":300,"currency":"EUR",
   "createdAt":"2025-01-11T09:00:00Z","createdBy":"user_1"},
  {"id":"ord_3","displayId":"ORD-2025-0003","status":"completed","type":"photo",
   "clientName":"Initech","sessionDate":"2025-01-20","location":null,
   "paymentStatus":"paid","total":800,"currency":"EUR",
   "createdAt":"2025-01-12T09:00:00Z","createdBy":"user_2"}
]"#;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_acctview-cli"))
        .current_dir(cwd)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_query_filters_and_reports_totals() {
    let temp_dir = TempDir::new().unwrap();
    let data = write_fixture(&temp_dir, "orders.json", ORDERS);

    let output = run(
        &[
            "query",
            "orders",
            "--data",
            data.to_str().unwrap(),
            "--params",
            "status=confirmed,scheduled&sortBy=total&sortDir=asc",
        ],
        temp_dir.path(),
    );

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["result"]["totalMatched"], 2);
    assert_eq!(json["result"]["totalPages"], 1);
    assert_eq!(json["result"]["items"][0]["id"], "ord_2");
    assert_eq!(json["fingerprint"].as_str().unwrap().len(), 64);
    assert_eq!(
        json["params"],
        "sortBy=total&sortDir=asc&status=confirmed%2Cscheduled"
    );
}

#[test]
fn test_query_uses_configured_page_size() {
    let temp_dir = TempDir::new().unwrap();
    let data = write_fixture(&temp_dir, "orders.json", ORDERS);
    let config = write_fixture(
        &temp_dir,
        "acctview.toml",
        "[logging]\nprofile = \"test\"\n\n[lists.orders]\npage_size = 2\n",
    );

    let output = run(
        &[
            "--config",
            config.to_str().unwrap(),
            "query",
            "orders",
            "--data",
            data.to_str().unwrap(),
            "--params",
            "page=2",
        ],
        temp_dir.path(),
    );

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["result"]["totalPages"], 2);
    assert_eq!(json["result"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["showing"]["from"], 3);
    assert_eq!(json["showing"]["to"], 3);
}

#[test]
fn test_navigate_filter_resets_page() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(
        &[
            "navigate",
            "orders",
            "--params",
            "status=paid&page=3",
            "--filter",
            "status=confirmed,scheduled",
        ],
        temp_dir.path(),
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "status=confirmed%2Cscheduled"
    );
}

#[test]
fn test_navigate_toggle_sort_keeps_page() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(
        &["navigate", "api-logs", "--params", "page=2", "--toggle-sort", "responseTime"],
        temp_dir.path(),
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "page=2&sortBy=responseTime&sortDir=desc"
    );
}

#[test]
fn test_navigate_requires_exactly_one_change() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&["navigate", "orders", "--page", "2", "--clear"], temp_dir.path());

    assert!(!output.status.success());
}

#[test]
fn test_export_writes_all_matching_rows() {
    let temp_dir = TempDir::new().unwrap();
    let data = write_fixture(&temp_dir, "orders.json", ORDERS);

    let output = run(
        &[
            "export",
            "orders",
            "--data",
            data.to_str().unwrap(),
            "--params",
            "payment=paid&page=5",
            "--output",
            temp_dir.path().to_str().unwrap(),
            "--date",
            "2025-03-01",
        ],
        temp_dir.path(),
    );

    assert!(
        output.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let csv = fs::read_to_string(temp_dir.path().join("orders-2025-03-01.csv")).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "Order,Client,Type,Status,Payment,Session date,Total");
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[2],
        "ORD-2025-0001,\"Acme, Inc.\",photo,confirmed,paid,2025-02-01,1200.00"
    );
}

#[test]
fn test_stats() {
    let temp_dir = TempDir::new().unwrap();
    let data = write_fixture(&temp_dir, "orders.json", ORDERS);

    let output = run(&["stats", "--data", data.to_str().unwrap()], temp_dir.path());

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["scheduled"], 1);
    assert_eq!(json["inProgress"], 1);
    assert_eq!(json["completed"], 1);
}

#[test]
fn test_unknown_list_fails() {
    let temp_dir = TempDir::new().unwrap();
    let data = write_fixture(&temp_dir, "orders.json", ORDERS);

    let output = run(
        &["query", "widgets", "--data", data.to_str().unwrap()],
        temp_dir.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Unknown list: widgets"));
    assert!(stderr.contains("[ERR_NOT_FOUND] in operation 'query'"));
    assert!(stderr.contains("(list: widgets) (request_id: "));
}
