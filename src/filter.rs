// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Datelike, Local};

use crate::models::{Transaction, Window};

fn in_window(t: &Transaction, window: Window, now: DateTime<Local>) -> bool {
    let Some(at) = t.occurred_at() else {
        // A timestamp outside the representable local range never matches.
        return false;
    };
    match window {
        Window::Daily => {
            at.year() == now.year() && at.month() == now.month() && at.day() == now.day()
        }
        Window::Monthly => at.year() == now.year() && at.month() == now.month(),
        Window::Yearly => at.year() == now.year(),
        Window::All => true,
    }
}

fn matches_query(t: &Transaction, lower_query: &str) -> bool {
    t.title.to_lowercase().contains(lower_query)
        || t.note
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(lower_query))
        || t.category.to_lowercase().contains(lower_query)
}

/// The visible subset: calendar-window predicate first, then a
/// case-insensitive substring search over title, note, and category.
/// A blank query matches everything. Order of the result is the store
/// order; consumers impose their own ordering.
pub fn visible(
    transactions: &[Transaction],
    window: Window,
    now: DateTime<Local>,
    query: &str,
) -> Vec<Transaction> {
    let mut out: Vec<Transaction> = transactions
        .iter()
        .filter(|t| in_window(t, window, now))
        .cloned()
        .collect();

    // Trimming only decides blankness; a non-blank query matches as typed,
    // padding included.
    if !query.trim().is_empty() {
        let lower = query.to_lowercase();
        out.retain(|t| matches_query(t, &lower));
    }

    out
}
