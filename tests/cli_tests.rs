// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use famledger::{cli, commands::transactions, seed, utils};

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["famledger", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_limit_respected() {
    let store = seed::bootstrap().unwrap();
    let rows = transactions::query_rows(&store, &list_matches(&["--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].description, "早餐");
}

#[test]
fn list_filters_by_category() {
    let store = seed::bootstrap().unwrap();
    let rows = transactions::query_rows(&store, &list_matches(&["--category", "餐饮"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "早餐");
}

#[test]
fn list_category_all_is_unconstrained() {
    let store = seed::bootstrap().unwrap();
    let rows = transactions::query_rows(&store, &list_matches(&["--category", "All"])).unwrap();
    assert_eq!(rows.len(), 3);
}

#[test]
fn list_filters_by_member() {
    let store = seed::bootstrap().unwrap();
    let rows = transactions::query_rows(&store, &list_matches(&["--member", "m2"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "房租");
    assert_eq!(rows[0].member, "另一半");
}

#[test]
fn list_search_matches_category_names_too() {
    let store = seed::bootstrap().unwrap();
    let rows = transactions::query_rows(&store, &list_matches(&["--search", "工资"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "月度工资");
}

#[test]
fn expense_rows_are_signed() {
    let store = seed::bootstrap().unwrap();
    let rows = transactions::query_rows(&store, &list_matches(&[])).unwrap();
    assert!(rows[0].amount.starts_with('-'));
    let salary = rows.iter().find(|r| r.description == "月度工资").unwrap();
    assert!(salary.amount.starts_with('+'));
}

#[test]
fn shell_line_splitting_respects_quotes() {
    let tokens = utils::split_command_line("tx add --amount 56.5 --note \"双人 晚餐\"");
    assert_eq!(
        tokens,
        vec!["tx", "add", "--amount", "56.5", "--note", "双人 晚餐"]
    );
}

#[test]
fn shell_line_splitting_handles_blank_input() {
    assert!(utils::split_command_line("   ").is_empty());
    assert_eq!(utils::split_command_line("''"), vec![""]);
}
