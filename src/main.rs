// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendclip::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut state = store::load()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            store::save(&state)?;
            println!("Store initialised at {}", store::store_path()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut state, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut state, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&mut state, sub)?,
        Some(("dashboard", sub)) => commands::reports::dashboard(&state, sub)?,
        Some(("stats", sub)) => commands::reports::stats(&state, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&state, sub)?,
        Some(("theme", sub)) => commands::settings::theme(sub)?,
        Some(("reset", sub)) => commands::settings::reset(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
