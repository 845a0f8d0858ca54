// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::models::{AppState, Window};
use crate::ops::{apply, Applied, Mutation};
use crate::store;
use crate::utils::{format_currency, parse_decimal, pretty_table};

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
            match apply(state, Mutation::SetBudget { amount }, Local::now()) {
                Ok(Applied::BudgetSet) => {
                    store::save(state)?;
                    println!("Budget Updated! Daily baseline is {}", format_currency(amount));
                }
                Ok(_) => {}
                Err(e) => eprintln!("{}", e),
            }
        }
        Some(("show", _)) => {
            let rows = [Window::Daily, Window::Monthly, Window::Yearly]
                .iter()
                .map(|w| {
                    vec![
                        w.budget_label().to_string(),
                        format_currency(state.budget * w.budget_scale()),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Window", "Budget"], rows));
        }
        _ => {}
    }
    Ok(())
}
