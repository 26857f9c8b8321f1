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
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let icon = sub.get_one::<String>("icon").unwrap();
            let color = sub.get_one::<String>("color").unwrap();
            let c = store.add_category(name, icon, color);
            println!("Added category '{}' ({})", c.name, c.id);
        }
        Some(("list", _)) => {
            // Append-only set, shown in ledger order.
            let rows: Vec<Vec<String>> = store
                .active()
                .categories
                .iter()
                .map(|c| {
                    vec![
                        c.id.clone(),
                        format!("{} {}", c.icon, c.name),
                        c.color.clone(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["ID", "Category", "Color"], rows));
        }
        _ => {}
    }
    Ok(())
}
