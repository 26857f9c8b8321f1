// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::advisor::Advisor;
use crate::store::LedgerStore;

pub fn handle(store: &LedgerStore, _m: &clap::ArgMatches) -> Result<()> {
    let transactions = &store.active().transactions;
    println!("正在深度分析家庭财务状况...");
    // Blocks until the provider answers; failures come back as
    // display text, so there is nothing to recover here.
    let report = Advisor::from_env().analyze(transactions);
    println!();
    println!("{}", report);
    Ok(())
}
