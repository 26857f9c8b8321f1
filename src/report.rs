// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionType};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl Totals {
    /// May be negative.
    pub fn balance(&self) -> Decimal {
        self.income - self.expense
    }
}

pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut acc = Totals::default();
    for t in transactions {
        match t.r#type {
            TransactionType::Income => acc.income += t.amount,
            TransactionType::Expense => acc.expense += t.amount,
        }
    }
    acc
}

/// Expense totals grouped by category name, ordered by first
/// occurrence while scanning the input in its given order.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<(String, Decimal)> {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, Decimal> = HashMap::new();
    for t in transactions {
        if t.r#type != TransactionType::Expense {
            continue;
        }
        if !sums.contains_key(&t.category) {
            order.push(t.category.clone());
        }
        *sums.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
    }
    order
        .into_iter()
        .map(|name| {
            let total = sums.remove(&name).unwrap_or_default();
            (name, total)
        })
        .collect()
}
