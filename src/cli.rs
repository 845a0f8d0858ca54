// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn window_arg() -> Arg {
    Arg::new("window")
        .long("window")
        .value_name("WINDOW")
        .default_value("daily")
        .help("Aggregation window: daily, monthly, yearly, or all")
}

fn search_arg() -> Arg {
    Arg::new("search")
        .long("search")
        .value_name("QUERY")
        .help("Case-insensitive substring search over title, note, and category")
}

fn yes_arg() -> Arg {
    Arg::new("yes")
        .long("yes")
        .action(ArgAction::SetTrue)
        .help("Skip the confirmation prompt")
}

fn with_json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Output pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Output JSON Lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendclip")
        .version(crate_version!())
        .about("Personal expense tracking with daily budgets, categories, and spending dashboards")
        .subcommand(Command::new("init").about("Initialise the local data store"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record a new expense")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Amount spent, must be greater than zero"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category from the category set"),
                        )
                        .arg(Arg::new("note").long("note").help("Free-text note")),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Update an expense by id")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense by id")
                        .arg(Arg::new("id").required(true))
                        .arg(yes_arg()),
                )
                .subcommand(with_json_flags(
                    Command::new("list")
                        .about("List the visible expenses")
                        .arg(window_arg())
                        .arg(search_arg()),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Manage the category set")
                .subcommand(
                    Command::new("add")
                        .about("Append a category to the set")
                        .arg(Arg::new("name").required(true)),
                )
                .subcommand(Command::new("list").about("List the category set"))
                .subcommand(
                    Command::new("show")
                        .about("Detail view for one category")
                        .arg(Arg::new("name").required(true))
                        .arg(window_arg())
                        .arg(search_arg()),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Daily budget baseline")
                .subcommand(
                    Command::new("set")
                        .about("Set the daily budget")
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(Command::new("show").about("Show the daily budget")),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Spending total and budget gauge for the active window")
                .arg(window_arg())
                .arg(search_arg())
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .action(ArgAction::SetTrue)
                        .help("Show the compact total on the gauge instead of the percentage"),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Category histogram and grouped activity")
                .arg(window_arg())
                .arg(search_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Export stored data")
                .subcommand(
                    Command::new("json")
                        .about("Full JSON backup of the store")
                        .arg(Arg::new("out").long("out").value_name("FILE")),
                )
                .subcommand(
                    Command::new("report")
                        .about("Tabular CSV report over all expenses")
                        .arg(Arg::new("out").long("out").value_name("FILE")),
                ),
        )
        .subcommand(
            Command::new("theme")
                .about("Show or set the display theme")
                .arg(Arg::new("value").value_parser(["dark", "light"])),
        )
        .subcommand(
            Command::new("reset")
                .about("Delete ALL stored expenses, budget, and settings")
                .arg(yes_arg()),
        )
}
