// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use famledger::store::LedgerStore;
use famledger::{cli, commands, seed, utils};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
    dotenvy::dotenv().ok();

    let mut store = seed::bootstrap()?;

    println!("FamilyLedger. Type 'help' for commands, 'quit' to end the session.");
    commands::reports::print_summary(&store);

    let stdin = io::stdin();
    loop {
        print!("famledger> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let tokens = utils::split_command_line(&line);
        if tokens.is_empty() {
            continue;
        }
        match tokens[0].as_str() {
            "quit" | "exit" => break,
            "help" => {
                cli::build_cli().print_help()?;
                println!();
                continue;
            }
            _ => {}
        }
        let argv = std::iter::once("famledger".to_string()).chain(tokens);
        match cli::build_cli().try_get_matches_from(argv) {
            Ok(matches) => {
                if let Err(err) = dispatch(&mut store, &matches) {
                    eprintln!("error: {:#}", err);
                }
            }
            // clap renders its own usage and help output
            Err(err) => err.print()?,
        }
    }

    println!("Session ended; ledger state discarded.");
    Ok(())
}

fn dispatch(store: &mut LedgerStore, matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(store, sub)?,
        Some(("category", sub)) => commands::categories::handle(store, sub)?,
        Some(("member", sub)) => commands::members::handle(store, sub)?,
        Some(("ledger", sub)) => commands::ledgers::handle(store, sub)?,
        Some(("report", sub)) => commands::reports::handle(store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(store, sub)?,
        Some(("advise", sub)) => commands::advisor::handle(store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
