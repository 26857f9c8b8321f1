// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::MemberRole;
use crate::store::LedgerStore;
use crate::utils::pretty_table;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", _)) = m.subcommand() {
        let rows: Vec<Vec<String>> = store
            .active()
            .members
            .iter()
            .map(|mb| {
                vec![
                    mb.id.clone(),
                    mb.name.clone(),
                    match mb.role {
                        MemberRole::Admin => "Admin",
                        MemberRole::Member => "Member",
                    }
                    .to_string(),
                    mb.avatar.clone(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["ID", "Name", "Role", "Avatar"], rows));
    }
    Ok(())
}
