// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::errors::{Error, Result};
use crate::models::{FamilyMember, Transaction, TransactionType};

/// Label substituted when a transaction's member id does not resolve.
pub const UNKNOWN_MEMBER: &str = "未知";

/// Raw form input for creating or updating a transaction.
#[derive(Debug, Clone)]
pub struct TransactionForm {
    pub amount: String,
    pub r#type: TransactionType,
    pub category: String,
    pub description: String,
    pub member_id: String,
}

/// Validates the form and builds the transaction record.
///
/// On create the id comes from `fresh_id` and the date is stamped
/// now; on update the existing id and date are preserved verbatim and
/// every other field is replaced from the form. An unresolvable
/// member id degrades to [`UNKNOWN_MEMBER`] instead of failing.
pub fn validate_and_build(
    form: &TransactionForm,
    existing: Option<&Transaction>,
    members: &[FamilyMember],
    fresh_id: impl FnOnce() -> String,
) -> Result<Transaction> {
    let raw = form.amount.trim();
    if raw.is_empty() {
        return Err(Error::Validation("amount is required".into()));
    }
    let amount: Decimal = raw
        .parse()
        .map_err(|_| Error::Validation(format!("amount '{}' is not a number", raw)))?;
    if amount < Decimal::ZERO {
        return Err(Error::Validation(
            "amount must not be negative; the sign is carried by the type".into(),
        ));
    }

    let member_name = members
        .iter()
        .find(|m| m.id == form.member_id)
        .map(|m| m.name.clone())
        .unwrap_or_else(|| UNKNOWN_MEMBER.to_string());

    let (id, date) = match existing {
        Some(e) => (e.id.clone(), e.date),
        None => (fresh_id(), Utc::now()),
    };

    Ok(Transaction {
        id,
        amount,
        category: form.category.clone(),
        r#type: form.r#type,
        description: form.description.clone(),
        date,
        member_id: form.member_id.clone(),
        member_name,
    })
}
