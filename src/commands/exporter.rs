// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;
use rust_decimal::Decimal;
use std::path::Path;

use crate::models::AppState;
use crate::utils::format_date;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("json", sub)) => {
            let out = sub
                .get_one::<String>("out")
                .cloned()
                .unwrap_or_else(|| default_name("backup", "json"));
            export_json(state, Path::new(&out))?;
            println!("Exported backup to {}", out);
        }
        Some(("report", sub)) => {
            let out = sub
                .get_one::<String>("out")
                .cloned()
                .unwrap_or_else(|| default_name("report", "csv"));
            export_report(state, Path::new(&out))?;
            println!("Exported report to {}", out);
        }
        _ => {}
    }
    Ok(())
}

fn default_name(kind: &str, ext: &str) -> String {
    format!(
        "spendclip_{}_{}.{}",
        kind,
        Local::now().format("%Y-%m-%d"),
        ext
    )
}

/// Full dump of the in-memory state, pretty-printed.
pub fn export_json(state: &AppState, out: &Path) -> Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(state)?)?;
    Ok(())
}

/// Tabular report over ALL transactions, not the windowed subset: a summary
/// block (total spending, daily budget baseline) followed by one row per
/// transaction, most recent first.
pub fn export_report(state: &AppState, out: &Path) -> Result<()> {
    let total: Decimal = state.transactions.iter().map(|t| t.amount).sum();

    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(out)?;
    wtr.write_record(["Total Spending".to_string(), format!("{:.2}", total)])?;
    wtr.write_record(["Daily Budget".to_string(), format!("{:.2}", state.budget)])?;

    wtr.write_record(["date", "category", "description", "amount"])?;
    let mut sorted: Vec<_> = state.transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    for t in sorted {
        wtr.write_record([
            format_date(t.date),
            t.category.clone(),
            t.note.clone().unwrap_or_else(|| t.title.clone()),
            format!("{:.2}", t.amount),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
