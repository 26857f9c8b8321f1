// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use famledger::filter::TransactionFilter;
use famledger::models::{Transaction, TransactionType};

fn tx(id: &str, category: &str, description: &str, member_id: &str, date: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: "10".parse().unwrap(),
        category: category.to_string(),
        r#type: TransactionType::Expense,
        description: description.to_string(),
        date: date.parse::<DateTime<Utc>>().unwrap(),
        member_id: member_id.to_string(),
        member_name: "我".to_string(),
    }
}

fn setup() -> Vec<Transaction> {
    vec![
        tx("t1", "餐饮", "App Store 订阅", "m1", "2025-03-06T00:30:00Z"),
        tx("t2", "住房", "房租", "m2", "2025-03-05T23:30:00Z"),
        tx("t3", "交通", "地铁", "m1", "2025-03-01T00:00:00Z"),
        tx("t4", "餐饮", "早餐", "m3", "2025-02-28T23:59:00Z"),
    ]
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn ids(matched: &[Transaction]) -> Vec<&str> {
    matched.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn unconstrained_filter_is_identity() {
    let transactions = setup();
    let matched = TransactionFilter::default().apply(&transactions);
    assert_eq!(ids(&matched), vec!["t1", "t2", "t3", "t4"]);
}

#[test]
fn search_is_case_insensitive_on_description() {
    let transactions = setup();
    let filter = TransactionFilter {
        search: Some("app store".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&filter.apply(&transactions)), vec!["t1"]);
}

#[test]
fn search_also_matches_category_name() {
    let transactions = setup();
    let filter = TransactionFilter {
        search: Some("餐饮".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&filter.apply(&transactions)), vec!["t1", "t4"]);
}

#[test]
fn empty_search_matches_everything() {
    let transactions = setup();
    let filter = TransactionFilter {
        search: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(filter.apply(&transactions).len(), transactions.len());
}

#[test]
fn category_must_match_exactly() {
    let transactions = setup();
    let filter = TransactionFilter {
        category: Some("住房".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&filter.apply(&transactions)), vec!["t2"]);
}

#[test]
fn member_filter_matches_by_id() {
    let transactions = setup();
    let filter = TransactionFilter {
        member_id: Some("m1".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&filter.apply(&transactions)), vec!["t1", "t3"]);
}

#[test]
fn criteria_are_conjunctive() {
    let transactions = setup();
    // t1 matches the search but not the member.
    let filter = TransactionFilter {
        search: Some("订阅".to_string()),
        member_id: Some("m2".to_string()),
        ..Default::default()
    };
    assert!(filter.apply(&transactions).is_empty());
}

#[test]
fn date_start_is_inclusive_from_start_of_day() {
    let transactions = setup();
    let filter = TransactionFilter {
        date_start: Some(date("2025-03-01")),
        ..Default::default()
    };
    // t3 sits exactly at midnight of the start day; t4 is the evening
    // before.
    assert_eq!(ids(&filter.apply(&transactions)), vec!["t1", "t2", "t3"]);
}

#[test]
fn date_end_includes_the_entire_end_day() {
    let transactions = setup();
    let filter = TransactionFilter {
        date_end: Some(date("2025-03-05")),
        ..Default::default()
    };
    // t2 is at 23:30 on the end day and stays; t1 is the next day.
    assert_eq!(ids(&filter.apply(&transactions)), vec!["t2", "t3", "t4"]);
}

#[test]
fn date_range_combines_both_bounds() {
    let transactions = setup();
    let filter = TransactionFilter {
        date_start: Some(date("2025-03-01")),
        date_end: Some(date("2025-03-05")),
        ..Default::default()
    };
    assert_eq!(ids(&filter.apply(&transactions)), vec!["t2", "t3"]);
}

#[test]
fn filtering_is_idempotent() {
    let transactions = setup();
    let filter = TransactionFilter {
        search: Some("餐".to_string()),
        member_id: Some("m1".to_string()),
        ..Default::default()
    };
    let once = filter.apply(&transactions);
    let twice = filter.apply(&once);
    assert_eq!(ids(&once), ids(&twice));
}
