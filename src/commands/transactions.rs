// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use serde::Serialize;

use crate::editor::TransactionForm;
use crate::filter::TransactionFilter;
use crate::models::TransactionType;
use crate::store::LedgerStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_tx_type, pretty_table};

pub fn handle(store: &mut LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let (default_category, default_member) = {
        let active = store.active();
        (
            active.categories.first().map(|c| c.name.clone()),
            active.members.first().map(|mb| mb.id.clone()),
        )
    };

    let amount = sub.get_one::<String>("amount").unwrap().clone();
    let kind = parse_tx_type(sub.get_one::<String>("type").unwrap())?;
    let category = sub
        .get_one::<String>("category")
        .cloned()
        .or(default_category)
        .unwrap_or_else(|| "其他".to_string());
    let member_id = sub
        .get_one::<String>("member")
        .cloned()
        .or(default_member)
        .unwrap_or_default();
    let description = sub.get_one::<String>("note").cloned().unwrap_or_default();

    ensure_category(store, &category);

    let form = TransactionForm {
        amount,
        r#type: kind,
        category,
        description,
        member_id,
    };
    let t = store.submit(&form, None)?;
    println!(
        "Recorded {} {} [{}] as {}",
        t.r#type.label(),
        fmt_money(&t.amount),
        t.category,
        t.id
    );
    Ok(())
}

fn list(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.member.clone(),
                    r.r#type.clone(),
                    r.amount.clone(),
                    r.category.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Member", "Type", "Amount", "Category", "Note"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub member: String,
    pub r#type: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

pub fn filter_from_matches(sub: &clap::ArgMatches) -> Result<TransactionFilter> {
    Ok(TransactionFilter {
        search: sub.get_one::<String>("search").cloned(),
        category: sub
            .get_one::<String>("category")
            .filter(|c| c.as_str() != "All")
            .cloned(),
        member_id: sub
            .get_one::<String>("member")
            .filter(|m| m.as_str() != "All")
            .cloned(),
        date_start: sub
            .get_one::<String>("from")
            .map(|s| parse_date(s))
            .transpose()?,
        date_end: sub
            .get_one::<String>("to")
            .map(|s| parse_date(s))
            .transpose()?,
    })
}

pub fn query_rows(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let active = store.active();
    let filter = filter_from_matches(sub)?;
    let mut matched = filter.apply(&active.transactions);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        matched.truncate(*limit);
    }

    // Unresolved category names fall back to the placeholder glyph.
    let icon_for = |name: &str| {
        active
            .categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.icon.clone())
            .unwrap_or_else(|| "✨".to_string())
    };

    Ok(matched
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.format("%Y-%m-%d %H:%M").to_string(),
            member: t.member_name,
            r#type: t.r#type.label().to_string(),
            amount: match t.r#type {
                TransactionType::Expense => format!("-{}", fmt_money(&t.amount)),
                TransactionType::Income => format!("+{}", fmt_money(&t.amount)),
            },
            category: format!("{} {}", icon_for(&t.category), t.category),
            description: t.description,
        })
        .collect())
}

fn edit(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let Some(existing) = store
        .active()
        .transactions
        .iter()
        .find(|t| t.id == *id)
        .cloned()
    else {
        bail!("transaction '{}' not found in the active ledger", id);
    };

    let amount = sub
        .get_one::<String>("amount")
        .cloned()
        .unwrap_or_else(|| existing.amount.to_string());
    let kind = match sub.get_one::<String>("type") {
        Some(s) => parse_tx_type(s)?,
        None => existing.r#type,
    };
    let category = sub
        .get_one::<String>("category")
        .cloned()
        .unwrap_or_else(|| existing.category.clone());
    let member_id = sub
        .get_one::<String>("member")
        .cloned()
        .unwrap_or_else(|| existing.member_id.clone());
    let description = sub
        .get_one::<String>("note")
        .cloned()
        .unwrap_or_else(|| existing.description.clone());

    ensure_category(store, &category);

    let form = TransactionForm {
        amount,
        r#type: kind,
        category,
        description,
        member_id,
    };
    let t = store.submit(&form, Some(id.as_str()))?;
    println!(
        "Updated {} ({} {} [{}])",
        t.id,
        t.r#type.label(),
        fmt_money(&t.amount),
        t.category
    );
    Ok(())
}

fn remove(store: &mut LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if !sub.get_flag("yes") {
        // Advisory confirmation only; the deletion itself is permanent.
        print!("Delete transaction {}? This cannot be undone. [y/N] ", id);
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Kept {}", id);
            return Ok(());
        }
    }
    if store.delete_transaction(id) {
        println!("Deleted {}", id);
    } else {
        println!("No transaction '{}' in the active ledger", id);
    }
    Ok(())
}

// Inline category creation: an unknown name is appended to the
// ledger's set as its own step. Duplicates are allowed.
fn ensure_category(store: &mut LedgerStore, name: &str) {
    if !store.has_category(name) {
        let c = store.add_category(name, "✨", "bg-gray-500");
        println!("Added category '{}' ({})", c.name, c.id);
    }
}
