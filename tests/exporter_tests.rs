// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, TimeZone};
use rust_decimal::Decimal;

use spendclip::commands::exporter::{export_json, export_report};
use spendclip::icons::IconTag;
use spendclip::models::{AppState, Transaction};

fn millis(y: i32, mo: u32, d: u32) -> i64 {
    Local
        .with_ymd_and_hms(y, mo, d, 12, 0, 0)
        .single()
        .unwrap()
        .timestamp_millis()
}

fn tx(date: i64, amount: i64, category: &str, note: Option<&str>) -> Transaction {
    Transaction {
        id: date,
        title: format!("{} Expense", category),
        amount: Decimal::from(amount),
        category: category.to_string(),
        date,
        icon: IconTag::Pricetag,
        note: note.map(|s| s.to_string()),
    }
}

fn sample_state() -> AppState {
    AppState {
        transactions: vec![
            tx(millis(2024, 4, 30), 100, "Food", None),
            tx(millis(2024, 5, 1), 50, "Transport", Some("airport run")),
        ],
        budget: Decimal::from(200),
        categories: vec!["Food".to_string(), "Transport".to_string()],
    }
}

#[test]
fn json_backup_round_trips_the_full_state() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("backup.json");
    let state = sample_state();
    export_json(&state, &out).unwrap();

    let blob = std::fs::read_to_string(&out).unwrap();
    let loaded: AppState = serde_json::from_str(&blob).unwrap();
    assert_eq!(loaded, state);
}

#[test]
fn report_has_summary_block_then_all_rows_date_desc() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.csv");
    export_report(&sample_state(), &out).unwrap();

    let body = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines[0], "Total Spending,150.00");
    assert_eq!(lines[1], "Daily Budget,200.00");
    assert_eq!(lines[2], "date,category,description,amount");
    // Most recent first; description falls back to the title without a note.
    assert_eq!(lines[3], "2024-05-01,Transport,airport run,50.00");
    assert_eq!(lines[4], "2024-04-30,Food,Food Expense,100.00");
    assert_eq!(lines.len(), 5);
}

#[test]
fn report_covers_all_transactions_not_a_window() {
    // Transactions from different years all land in the report.
    let state = AppState {
        transactions: vec![
            tx(millis(2020, 1, 1), 10, "Food", None),
            tx(millis(2024, 5, 1), 20, "Food", None),
        ],
        budget: Decimal::from(200),
        categories: vec!["Food".to_string()],
    };
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.csv");
    export_report(&state, &out).unwrap();

    let body = std::fs::read_to_string(&out).unwrap();
    assert_eq!(body.lines().count(), 5);
    assert_eq!(body.lines().nth(0).unwrap(), "Total Spending,30.00");
}
