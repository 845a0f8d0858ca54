// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::filter::visible;
use crate::models::{AppState, ViewState};
use crate::ops::{apply, Applied, Mutation};
use crate::store;
use crate::utils::{
    confirm, format_currency, format_date, format_time, maybe_print_json, parse_decimal, parse_id,
    parse_window, pretty_table,
};

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub)?,
        Some(("edit", sub)) => edit(state, sub)?,
        Some(("rm", sub)) => rm(state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn note_arg(sub: &clap::ArgMatches) -> Option<String> {
    sub.get_one::<String>("note")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().clone();

    let m = Mutation::CreateTransaction {
        amount,
        category: category.clone(),
        note: note_arg(sub),
    };
    match apply(state, m, Local::now()) {
        Ok(Applied::Created(id)) => {
            store::save(state)?;
            println!(
                "Saved! {} under '{}' (id: {})",
                format_currency(amount),
                category,
                id
            );
        }
        Ok(_) => {}
        Err(e) => eprintln!("{}", e),
    }
    Ok(())
}

fn edit(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub.get_one::<String>("id").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().clone();

    // Stage the edit first; a missing id means there is nothing to update.
    let mut view = ViewState::default();
    if !view.start_edit(state, id) {
        println!("No transaction with id {}", id);
        return Ok(());
    }

    let m = Mutation::UpdateTransaction {
        id,
        amount,
        category,
        note: note_arg(sub),
    };
    match apply(state, m, Local::now()) {
        Ok(Applied::Updated(id)) => {
            store::save(state)?;
            println!("Updated! (id: {})", id);
        }
        Ok(Applied::NotFound(id)) => println!("No transaction with id {}", id),
        Ok(_) => {}
        Err(e) => eprintln!("{}", e),
    }
    view.finish_edit();
    Ok(())
}

fn rm(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub.get_one::<String>("id").unwrap())?;
    if !sub.get_flag("yes") && !confirm("Delete this transaction?")? {
        println!("Aborted");
        return Ok(());
    }
    match apply(state, Mutation::DeleteTransaction { id }, Local::now()) {
        Ok(Applied::Deleted(id)) => {
            store::save(state)?;
            println!("Deleted transaction {}", id);
        }
        Ok(Applied::NotFound(id)) => println!("No transaction with id {}", id),
        Ok(_) => {}
        Err(e) => eprintln!("{}", e),
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub title: String,
    pub category: String,
    pub amount: String,
    pub icon: String,
    pub note: String,
}

/// Rows of the visible set for the list view, in store order.
pub fn visible_rows(
    state: &AppState,
    sub: &clap::ArgMatches,
    now: DateTime<Local>,
) -> Vec<TransactionRow> {
    let window = parse_window(sub.get_one::<String>("window").unwrap());
    let query = sub.get_one::<String>("search").map(String::as_str).unwrap_or("");
    visible(&state.transactions, window, now, query)
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: format_date(t.date),
            time: format_time(t.date),
            title: t.title.clone(),
            category: t.category.clone(),
            amount: format!("{:.2}", t.amount),
            icon: t.icon.name().to_string(),
            note: t.note.unwrap_or_default(),
        })
        .collect()
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = visible_rows(state, sub, Local::now());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No expenses for this period");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.time.clone(),
                    r.title.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Time", "Title", "Category", "Amount", "Note"],
                rows,
            )
        );
    }
    Ok(())
}
