// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::report;
use crate::store::LedgerStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("totals", sub)) => totals(store, sub)?,
        Some(("breakdown", sub)) => breakdown(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct TotalsRow {
    income: Decimal,
    expense: Decimal,
    balance: Decimal,
}

fn totals(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let t = report::totals(&store.active().transactions);
    let row = TotalsRow {
        income: t.income,
        expense: t.expense,
        balance: t.balance(),
    };
    if !maybe_print_json(sub.get_flag("json"), false, &row)? {
        println!(
            "{}",
            pretty_table(
                &["Income", "Expense", "Balance"],
                vec![vec![
                    fmt_money(&t.income),
                    fmt_money(&t.expense),
                    fmt_money(&t.balance()),
                ]],
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct BreakdownRow {
    category: String,
    spent: Decimal,
}

fn breakdown(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let slices = report::category_breakdown(&store.active().transactions);
    let data: Vec<BreakdownRow> = slices
        .iter()
        .map(|(category, spent)| BreakdownRow {
            category: category.clone(),
            spent: *spent,
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let total: Decimal = slices.iter().map(|(_, spent)| *spent).sum();
        let rows: Vec<Vec<String>> = slices
            .iter()
            .map(|(category, spent)| {
                let share = if total.is_zero() {
                    Decimal::ZERO
                } else {
                    spent * Decimal::from(100) / total
                };
                vec![
                    category.clone(),
                    fmt_money(spent),
                    format!("{:.1}%", share),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }
    Ok(())
}

/// One-line session banner: active ledger plus its current totals.
pub fn print_summary(store: &LedgerStore) {
    let ledger = store.active();
    let t = report::totals(&ledger.transactions);
    println!(
        "{} {} · 结余 {} (收入 {} / 支出 {})",
        ledger.icon,
        ledger.name,
        fmt_money(&t.balance()),
        fmt_money(&t.income),
        fmt_money(&t.expense)
    );
}
