// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use famledger::editor::{validate_and_build, TransactionForm, UNKNOWN_MEMBER};
use famledger::errors::Error;
use famledger::models::{Transaction, TransactionType};
use famledger::seed;

fn form(amount: &str) -> TransactionForm {
    TransactionForm {
        amount: amount.to_string(),
        r#type: TransactionType::Expense,
        category: "餐饮".to_string(),
        description: "早餐".to_string(),
        member_id: "m1".to_string(),
    }
}

#[test]
fn missing_amount_is_rejected() {
    let members = seed::family_members();
    let err = validate_and_build(&form("  "), None, &members, || "t1".to_string()).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn non_numeric_amount_is_rejected() {
    let members = seed::family_members();
    let err = validate_and_build(&form("abc"), None, &members, || "t1".to_string()).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn negative_amount_is_rejected() {
    let members = seed::family_members();
    let err = validate_and_build(&form("-5"), None, &members, || "t1".to_string()).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn create_stamps_fresh_id_and_current_date() {
    let members = seed::family_members();
    let before = Utc::now();
    let t = validate_and_build(&form("50"), None, &members, || "t9".to_string()).unwrap();
    assert_eq!(t.id, "t9");
    assert!(t.date >= before && t.date <= Utc::now());
    assert_eq!(t.amount, "50".parse().unwrap());
    assert_eq!(t.member_name, "我");
}

#[test]
fn update_preserves_id_and_date_and_replaces_the_rest() {
    let members = seed::family_members();
    let existing = Transaction {
        id: "t7".to_string(),
        amount: "50".parse().unwrap(),
        category: "餐饮".to_string(),
        r#type: TransactionType::Expense,
        description: "早餐".to_string(),
        date: "2025-01-02T03:04:05Z".parse::<DateTime<Utc>>().unwrap(),
        member_id: "m1".to_string(),
        member_name: "我".to_string(),
    };
    let updated = TransactionForm {
        amount: "88.88".to_string(),
        r#type: TransactionType::Income,
        category: "奖金".to_string(),
        description: "季度奖".to_string(),
        member_id: "m2".to_string(),
    };
    let t = validate_and_build(&updated, Some(&existing), &members, || {
        panic!("update must not mint a fresh id")
    })
    .unwrap();
    assert_eq!(t.id, existing.id);
    assert_eq!(t.date, existing.date);
    assert_eq!(t.amount, "88.88".parse().unwrap());
    assert_eq!(t.r#type, TransactionType::Income);
    assert_eq!(t.category, "奖金");
    assert_eq!(t.description, "季度奖");
    assert_eq!(t.member_id, "m2");
    assert_eq!(t.member_name, "另一半");
}

#[test]
fn unresolved_member_degrades_to_placeholder_label() {
    let members = seed::family_members();
    let mut f = form("50");
    f.member_id = "m99".to_string();
    let t = validate_and_build(&f, None, &members, || "t1".to_string()).unwrap();
    assert_eq!(t.member_name, UNKNOWN_MEMBER);
}
