// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::aggregate::aggregate;
use crate::filter::visible;
use crate::models::{AppState, Theme};
use crate::store;
use crate::utils::{format_compact, format_currency, parse_window, pretty_table};

fn view_for(state: &AppState, sub: &clap::ArgMatches) -> crate::aggregate::DashboardView {
    let window = parse_window(sub.get_one::<String>("window").unwrap());
    let query = sub.get_one::<String>("search").map(String::as_str).unwrap_or("");
    let vis = visible(&state.transactions, window, Local::now(), query);
    aggregate(&vis, state.budget, window, &state.categories)
}

pub fn dashboard(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let view = view_for(state, sub);
    let theme = store::load_theme()?;

    println!("Spent: {}", format_currency(view.total));
    println!(
        "{}: {}",
        view.budget_label,
        format_currency(view.effective_budget)
    );
    if sub.get_flag("amount") {
        println!("Gauge: {} Total", format_compact(view.total));
    } else {
        println!("Gauge: {}% Spent", view.percentage);
    }
    if view.warning {
        println!("Warning: over 80% of {}", view.budget_label.to_lowercase());
    }
    if theme == Theme::Dark {
        println!("(dark theme)");
    }
    Ok(())
}

pub fn stats(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let view = view_for(state, sub);

    if view.bars.is_empty() {
        println!("No expenses for this period");
        return Ok(());
    }

    println!("Spending by Category");
    for bar in &view.bars {
        // One # per 5% of the tallest bar, so the 10% floor still shows up.
        let fill = "#".repeat((bar.height_pct / 5) as usize);
        println!(
            "{:>12} [{}] {:<20} {}",
            bar.name,
            bar.icon.name(),
            fill,
            format_currency(bar.total)
        );
    }

    let rows: Vec<Vec<String>> = view
        .groups
        .iter()
        .map(|g| {
            vec![
                g.name.clone(),
                g.icon.name().to_string(),
                format!(
                    "{} transaction{}",
                    g.count,
                    if g.count > 1 { "s" } else { "" }
                ),
                format!("-{}", format_currency(g.total)),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Icon", "Activity", "Amount"], rows)
    );
    Ok(())
}
