// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::icons::{classify, IconTag};
use crate::models::{Transaction, Window};

/// Warning styling kicks in at this percentage of the effective budget.
const WARN_THRESHOLD: u32 = 80;

/// Bars never render below this height so small totals stay legible.
const BAR_FLOOR_PCT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBar {
    pub name: String,
    pub total: Decimal,
    /// Height relative to the tallest bar, floored at 10.
    pub height_pct: u32,
    pub icon: IconTag,
}

/// One row of the home list: a category with its summed visible activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub name: String,
    pub total: Decimal,
    pub count: usize,
    /// Icon of the most recently added transaction in the group, not a fixed
    /// per-category icon.
    pub icon: IconTag,
    /// Latest occurrence timestamp in the group, epoch milliseconds.
    pub latest: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub total: Decimal,
    pub effective_budget: Decimal,
    pub budget_label: &'static str,
    /// `round(total / effective_budget * 100)` clamped to 0..=100.
    pub percentage: u32,
    pub warning: bool,
    pub category_totals: Vec<CategoryTotal>,
    pub bars: Vec<HistogramBar>,
    /// Ordered by latest activity, most recent first.
    pub groups: Vec<CategoryGroup>,
}

fn percentage_of(total: Decimal, effective: Decimal) -> u32 {
    if effective.is_zero() {
        // Zero budget must report 0, never a propagated non-finite value.
        return 0;
    }
    let pct = (total / effective * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    pct.to_u32().unwrap_or(100).min(100)
}

fn category_totals(visible: &[Transaction], categories: &[String]) -> Vec<CategoryTotal> {
    // Seed every known category at zero, in set order, so unused ones are
    // still defined; legacy categories are appended as they are encountered
    // without touching the set itself.
    let mut totals: Vec<CategoryTotal> = categories
        .iter()
        .map(|c| CategoryTotal {
            name: c.clone(),
            total: Decimal::ZERO,
        })
        .collect();
    for t in visible {
        match totals.iter_mut().find(|ct| ct.name == t.category) {
            Some(ct) => ct.total += t.amount,
            None => totals.push(CategoryTotal {
                name: t.category.clone(),
                total: t.amount,
            }),
        }
    }
    totals
}

fn histogram(totals: &[CategoryTotal]) -> Vec<HistogramBar> {
    let mut max = totals
        .iter()
        .map(|ct| ct.total)
        .max()
        .unwrap_or(Decimal::ZERO);
    if max.is_zero() {
        max = Decimal::ONE;
    }
    totals
        .iter()
        .filter(|ct| ct.total > Decimal::ZERO)
        .map(|ct| {
            let height = (ct.total / max * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_u32()
                .unwrap_or(100);
            HistogramBar {
                name: ct.name.clone(),
                total: ct.total,
                height_pct: height.max(BAR_FLOOR_PCT),
                icon: classify(&ct.name),
            }
        })
        .collect()
}

fn grouped(visible: &[Transaction]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for t in visible {
        match groups.iter_mut().find(|g| g.name == t.category) {
            Some(g) => {
                g.total += t.amount;
                g.count += 1;
                if t.date > g.latest {
                    g.latest = t.date;
                    g.icon = t.icon;
                }
            }
            None => groups.push(CategoryGroup {
                name: t.category.clone(),
                total: t.amount,
                count: 1,
                icon: t.icon,
                latest: t.date,
            }),
        }
    }
    groups.sort_by(|a, b| b.latest.cmp(&a.latest));
    groups
}

/// Derive every dashboard view from the visible set. Pure: same inputs, same
/// output, nothing cached between calls.
pub fn aggregate(
    visible: &[Transaction],
    budget: Decimal,
    window: Window,
    categories: &[String],
) -> DashboardView {
    let total: Decimal = visible.iter().map(|t| t.amount).sum();
    let effective_budget = budget * window.budget_scale();
    let percentage = percentage_of(total, effective_budget);
    let totals = category_totals(visible, categories);
    let bars = histogram(&totals);
    let groups = grouped(visible);

    DashboardView {
        total,
        effective_budget,
        budget_label: window.budget_label(),
        percentage,
        warning: percentage >= WARN_THRESHOLD,
        category_totals: totals,
        bars,
        groups,
    }
}

/// The category detail listing: visible transactions of one category, most
/// recent first. Empty when the category has no visible activity, in which
/// case the detail view closes.
pub fn category_details(visible: &[Transaction], category: &str) -> Vec<Transaction> {
    let mut out: Vec<Transaction> = visible
        .iter()
        .filter(|t| t.category == category)
        .cloned()
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}
