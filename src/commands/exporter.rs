// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::TransactionType;
use crate::store::LedgerStore;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let transactions = &store.active().transactions;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "member",
                "type",
                "amount",
                "category",
                "description",
            ])?;
            for t in transactions {
                wtr.write_record([
                    t.id.clone(),
                    t.date.to_rfc3339(),
                    t.member_name.clone(),
                    match t.r#type {
                        TransactionType::Income => "INCOME".to_string(),
                        TransactionType::Expense => "EXPENSE".to_string(),
                    },
                    t.amount.to_string(),
                    t.category.clone(),
                    t.description.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(transactions)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", transactions.len(), out);
    Ok(())
}
