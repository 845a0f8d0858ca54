// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Local, TimeZone};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::{self, Write};

use crate::models::Window;

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_id(s: &str) -> Result<i64> {
    s.parse::<i64>()
        .with_context(|| format!("Invalid transaction id '{}'", s))
}

/// Window names map to the three calendar windows; anything else means no
/// filter.
pub fn parse_window(s: &str) -> Window {
    match s {
        "daily" => Window::Daily,
        "monthly" => Window::Monthly,
        "yearly" => Window::Yearly,
        _ => Window::All,
    }
}

// en-IN grouping: last three digits, then pairs. 1234567 -> 12,34,567
fn group_indian(int_part: &str) -> String {
    if int_part.len() <= 3 {
        return int_part.to_string();
    }
    let (head, tail) = int_part.split_at(int_part.len() - 3);
    let mut parts: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 0 {
        let start = i.saturating_sub(2);
        parts.push(&head[start..i]);
        i = start;
    }
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}

pub fn format_currency(amount: Decimal) -> String {
    let fixed = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let s = format!("{:.2}", fixed);
    match s.split_once('.') {
        Some((int_part, frac)) => format!("₹{}.{}", group_indian(int_part), frac),
        None => format!("₹{}.00", group_indian(&s)),
    }
}

/// Compact form for the gauge, so large totals do not overflow it: whole
/// rupees, lakhs at one decimal from 1,00,000 up.
pub fn format_compact(amount: Decimal) -> String {
    let lakh = Decimal::from(100_000);
    if amount >= lakh {
        format!("₹{:.1}L", amount / lakh)
    } else {
        format!(
            "₹{}",
            amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        )
    }
}

pub fn format_time(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(at) => at.format("%-I:%M %p").to_string(),
        None => String::from("-"),
    }
}

pub fn format_date(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(at) => at.format("%Y-%m-%d").to_string(),
        None => String::from("-"),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Read confirmation")?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
