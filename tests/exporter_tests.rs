// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use famledger::models::Transaction;
use famledger::{cli, commands::exporter, seed};

fn run_export(store: &famledger::store::LedgerStore, format: &str, out: &str) {
    let matches = cli::build_cli().get_matches_from([
        "famledger",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(store, sub).unwrap();
}

#[test]
fn csv_export_writes_header_and_all_rows() {
    let store = seed::bootstrap().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tx.csv");
    run_export(&store, "csv", path.to_str().unwrap());

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,date,member,type,amount,category,description"
    );
    assert_eq!(content.lines().count(), 4);
    assert!(content.contains("INCOME"));
    assert!(content.contains("工资"));
}

#[test]
fn json_export_parses_back() {
    let store = seed::bootstrap().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tx.json");
    run_export(&store, "json", path.to_str().unwrap());

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<Transaction> = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.len(), 3);
    assert!(parsed
        .iter()
        .all(|t| t.amount >= rust_decimal::Decimal::ZERO));
}
