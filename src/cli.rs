// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("famledger")
        .about("FamilyLedger: family expense tracking, reports, and AI advisory")
        .version(clap::crate_version!())
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions in the active ledger")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("type").long("type").default_value("expense"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("member").long("member"))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("search").long("search"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("member").long("member"))
                        .arg(Arg::new("from").long("from"))
                        .arg(Arg::new("to").long("to"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                        .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Edit a transaction; its id and date are kept")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("member").long("member"))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction permanently")
                        .arg(Arg::new("id").required(true))
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .short('y')
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Browse and extend the active ledger's categories")
                .subcommand(
                    Command::new("add")
                        .about("Append a category (names need not be unique)")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("icon").long("icon").default_value("✨"))
                        .arg(Arg::new("color").long("color").default_value("bg-gray-500")),
                )
                .subcommand(Command::new("list").about("List categories")),
        )
        .subcommand(
            Command::new("member")
                .about("Family members of the active ledger")
                .subcommand(Command::new("list").about("List members")),
        )
        .subcommand(
            Command::new("ledger")
                .about("Create, list, and switch ledgers")
                .subcommand(
                    Command::new("new")
                        .about("Create an empty ledger with the default categories")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("icon").long("icon").default_value("📒"))
                        .arg(Arg::new("desc").long("desc").default_value("")),
                )
                .subcommand(
                    Command::new("switch")
                        .about("Make another ledger the active one")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(Command::new("list").about("List ledgers")),
        )
        .subcommand(
            Command::new("report")
                .about("Totals and category breakdown for the active ledger")
                .subcommand(
                    Command::new("totals")
                        .about("Income, expense, and balance")
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
                )
                .subcommand(
                    Command::new("breakdown")
                        .about("Expense totals by category")
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                        .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export the active ledger")
                .subcommand(
                    Command::new("transactions")
                        .about("Write the transaction history to a file")
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("advise").about("Ask the AI advisor to review the ledger"))
}
