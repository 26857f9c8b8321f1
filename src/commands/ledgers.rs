// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::LedgerStore;
use crate::utils::pretty_table;

pub fn handle(store: &mut LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("new", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let icon = sub.get_one::<String>("icon").unwrap();
            let desc = sub.get_one::<String>("desc").unwrap();
            let ledger = store.create_ledger(name, icon, desc)?;
            println!(
                "Created ledger '{}' ({}); activate it with 'ledger switch {}'",
                ledger.name, ledger.id, ledger.id
            );
        }
        Some(("switch", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            store.set_active_ledger(id);
            let active = store.active();
            if active.id == *id {
                println!("Active ledger: {} {}", active.icon, active.name);
            } else {
                println!("No ledger '{}'; staying on {}", id, active.name);
            }
        }
        Some(("list", _)) => {
            let rows: Vec<Vec<String>> = store
                .ledgers()
                .iter()
                .map(|l| {
                    vec![
                        l.id.clone(),
                        format!("{} {}", l.icon, l.name),
                        l.description.clone(),
                        l.members.len().to_string(),
                        l.categories.len().to_string(),
                        l.transactions.len().to_string(),
                        if l.id == store.active_id() { "*" } else { "" }.to_string(),
                    ]
                })
                .collect();
            println!(
                "{}",
                pretty_table(
                    &[
                        "ID",
                        "Ledger",
                        "Description",
                        "Members",
                        "Categories",
                        "Transactions",
                        "Active",
                    ],
                    rows,
                )
            );
        }
        _ => {}
    }
    Ok(())
}
