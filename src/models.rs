// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "收入",
            TransactionType::Expense => "支出",
        }
    }
}

/// One recorded income or expense event. `amount` is always
/// non-negative; the sign is carried by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub category: String,
    pub r#type: TransactionType,
    pub description: String,
    pub date: DateTime<Utc>,
    pub member_id: String,
    /// Snapshot of the member name at entry time; a later rename does
    /// not relabel history.
    pub member_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
    Admin,
    Member,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub role: MemberRole,
    pub avatar: String,
}

/// One isolated account book: its own members, categories, and
/// transaction history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub members: Vec<FamilyMember>,
    pub categories: Vec<Category>,
    /// Most-recent-first; new transactions are prepended.
    pub transactions: Vec<Transaction>,
}
