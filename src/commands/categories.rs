// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::aggregate::category_details;
use crate::filter::visible;
use crate::icons::classify;
use crate::models::AppState;
use crate::ops::{apply, Applied, Mutation};
use crate::store;
use crate::utils::{format_currency, format_time, parse_window, pretty_table};

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().clone();
            match apply(state, Mutation::CreateCategory { name }, Local::now()) {
                Ok(Applied::CategoryAdded(name)) => {
                    store::save(state)?;
                    println!("Added category '{}'", name);
                }
                Ok(Applied::CategoryExists(name)) => {
                    println!("Category '{}' already exists", name);
                }
                Ok(_) => {}
                Err(e) => eprintln!("{}", e),
            }
        }
        Some(("list", _)) => {
            let rows: Vec<Vec<String>> = state
                .categories
                .iter()
                .map(|c| vec![c.clone(), classify(c).name().to_string()])
                .collect();
            println!("{}", pretty_table(&["Category", "Icon"], rows));
        }
        Some(("show", sub)) => show(state, sub)?,
        _ => {}
    }
    Ok(())
}

/// The category detail view. An empty visible set for the category closes the
/// view (prints the empty state) instead of rendering a listing.
fn show(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let window = parse_window(sub.get_one::<String>("window").unwrap());
    let query = sub.get_one::<String>("search").map(String::as_str).unwrap_or("");

    let vis = visible(&state.transactions, window, Local::now(), query);
    let details = category_details(&vis, name);
    if details.is_empty() {
        println!("No expenses for '{}' in this period", name);
        return Ok(());
    }

    println!("{} Details", name);
    let rows: Vec<Vec<String>> = details
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.note.clone().unwrap_or_else(|| t.title.clone()),
                format_time(t.date),
                format!("-{}", format_currency(t.amount)),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Id", "Title", "Time", "Amount"], rows));
    Ok(())
}
