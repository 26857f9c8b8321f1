// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::models::Transaction;

/// History filter. `None` fields are unconstrained ("All" in the
/// original UI); every set criterion must hold for a transaction to
/// match.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the description or the category
    /// name. An empty string matches everything.
    pub search: Option<String>,
    pub category: Option<String>,
    pub member_id: Option<String>,
    /// Inclusive, from start of day.
    pub date_start: Option<NaiveDate>,
    /// Inclusive through end of day (23:59:59.999).
    pub date_end: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !t.description.to_lowercase().contains(&needle)
                && !t.category.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if t.category != *category {
                return false;
            }
        }
        if let Some(member_id) = &self.member_id {
            if t.member_id != *member_id {
                return false;
            }
        }
        if let Some(start) = self.date_start {
            if t.date < day_start(start) {
                return false;
            }
        }
        if let Some(end) = self.date_end {
            if t.date > day_end(end) {
                return false;
            }
        }
        true
    }

    /// Keeps the input order; filtering never reorders.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect()
    }
}

fn day_start(d: NaiveDate) -> DateTime<Utc> {
    d.and_time(NaiveTime::MIN).and_utc()
}

fn day_end(d: NaiveDate) -> DateTime<Utc> {
    d.and_hms_milli_opt(23, 59, 59, 999)
        .expect("valid wall-clock time")
        .and_utc()
}
