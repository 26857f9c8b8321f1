// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use tracing::debug;

use crate::editor::{self, TransactionForm};
use crate::errors::{Error, Result};
use crate::models::{Category, FamilyMember, Ledger, Transaction};
use crate::seed;

/// Partial update for the active ledger; `None` fields are left
/// untouched.
#[derive(Debug, Default)]
pub struct LedgerPatch {
    pub transactions: Option<Vec<Transaction>>,
    pub categories: Option<Vec<Category>>,
    pub members: Option<Vec<FamilyMember>>,
}

/// Owns every ledger of the session plus the active-ledger pointer
/// and the id counters. Created at session start, threaded into the
/// command handlers, discarded at session end.
#[derive(Debug)]
pub struct LedgerStore {
    ledgers: Vec<Ledger>,
    active_id: String,
    next_ledger: u64,
    next_transaction: u64,
    // The default category set occupies ids 1..=10.
    next_category: u64,
}

impl LedgerStore {
    pub fn new() -> Self {
        LedgerStore {
            ledgers: Vec::new(),
            active_id: String::new(),
            next_ledger: 1,
            next_transaction: 1,
            next_category: 11,
        }
    }

    /// Creates a ledger seeded with the default category set and the
    /// single default member. The new ledger starts with an empty
    /// history and does not become active, except for the first
    /// ledger of the session: exactly one ledger is active at a time.
    pub fn create_ledger(&mut self, name: &str, icon: &str, description: &str) -> Result<&Ledger> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("ledger name must not be empty".into()));
        }
        let id = format!("l{}", self.next_ledger);
        self.next_ledger += 1;
        self.ledgers.push(Ledger {
            id: id.clone(),
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            members: vec![seed::default_member()],
            categories: seed::DEFAULT_CATEGORIES.clone(),
            transactions: Vec::new(),
        });
        if self.active_id.is_empty() {
            self.active_id = id.clone();
        }
        debug!(ledger = %id, "created ledger");
        Ok(&self.ledgers[self.ledgers.len() - 1])
    }

    /// Moves the active pointer. Unknown ids are a silent no-op; no
    /// ledger's contents are ever touched by a switch.
    pub fn set_active_ledger(&mut self, id: &str) {
        if self.ledgers.iter().any(|l| l.id == id) {
            debug!(ledger = %id, "switching active ledger");
            self.active_id = id.to_string();
        } else {
            debug!(ledger = %id, "ignoring switch to unknown ledger");
        }
    }

    pub fn ledgers(&self) -> &[Ledger] {
        &self.ledgers
    }

    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn active(&self) -> &Ledger {
        self.ledgers
            .iter()
            .find(|l| l.id == self.active_id)
            .expect("session holds at least one ledger")
    }

    fn active_mut(&mut self) -> &mut Ledger {
        let id = self.active_id.clone();
        self.ledgers
            .iter_mut()
            .find(|l| l.id == id)
            .expect("session holds at least one ledger")
    }

    /// Sole write path for ledger contents: merges the patch into the
    /// active ledger only. Full-collection replace-on-write.
    pub fn update_active(&mut self, patch: LedgerPatch) {
        let ledger = self.active_mut();
        if let Some(transactions) = patch.transactions {
            ledger.transactions = transactions;
        }
        if let Some(categories) = patch.categories {
            ledger.categories = categories;
        }
        if let Some(members) = patch.members {
            ledger.members = members;
        }
    }

    /// Prepends; the history is kept most-recent-first.
    pub fn add_transaction(&mut self, transaction: Transaction) {
        let mut transactions = self.active().transactions.clone();
        transactions.insert(0, transaction);
        self.update_active(LedgerPatch {
            transactions: Some(transactions),
            ..Default::default()
        });
    }

    pub fn replace_transaction(&mut self, transaction: Transaction) {
        let transactions = self
            .active()
            .transactions
            .iter()
            .map(|t| {
                if t.id == transaction.id {
                    transaction.clone()
                } else {
                    t.clone()
                }
            })
            .collect();
        self.update_active(LedgerPatch {
            transactions: Some(transactions),
            ..Default::default()
        });
    }

    /// Removes exactly the named transaction, keeping the relative
    /// order of the rest. Permanent; returns whether anything was
    /// removed.
    pub fn delete_transaction(&mut self, id: &str) -> bool {
        let transactions: Vec<Transaction> = self
            .active()
            .transactions
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        let removed = transactions.len() < self.active().transactions.len();
        if removed {
            debug!(transaction = %id, "deleting transaction");
            self.update_active(LedgerPatch {
                transactions: Some(transactions),
                ..Default::default()
            });
        }
        removed
    }

    /// Appends a category to the active ledger. Duplicate names are
    /// permitted, never merged.
    pub fn add_category(&mut self, name: &str, icon: &str, color: &str) -> Category {
        let category = Category {
            id: self.next_category.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        };
        self.next_category += 1;
        let mut categories = self.active().categories.clone();
        categories.push(category.clone());
        self.update_active(LedgerPatch {
            categories: Some(categories),
            ..Default::default()
        });
        category
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.active().categories.iter().any(|c| c.name == name)
    }

    /// Validates the form and writes the resulting transaction into
    /// the active ledger: a fresh entry when `existing_id` is `None`,
    /// otherwise an in-place replacement that keeps id and date.
    /// Rejected input leaves the ledger untouched.
    pub fn submit(
        &mut self,
        form: &TransactionForm,
        existing_id: Option<&str>,
    ) -> Result<Transaction> {
        let active = self.active();
        let existing = match existing_id {
            Some(id) => Some(
                active
                    .transactions
                    .iter()
                    .find(|t| t.id == id)
                    .cloned()
                    .ok_or_else(|| Error::UnknownTransaction(id.to_string()))?,
            ),
            None => None,
        };
        let members = active.members.clone();

        let transaction = editor::validate_and_build(form, existing.as_ref(), &members, || {
            self.mint_transaction_id()
        })?;

        if existing.is_some() {
            self.replace_transaction(transaction.clone());
        } else {
            self.add_transaction(transaction.clone());
        }
        debug!(transaction = %transaction.id, "submitted transaction");
        Ok(transaction)
    }

    fn mint_transaction_id(&mut self) -> String {
        let id = format!("t{}", self.next_transaction);
        self.next_transaction += 1;
        id
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}
