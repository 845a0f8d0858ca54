// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Local, TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::icons::IconTag;

/// A single spending event. `id` doubles as the creation timestamp in epoch
/// milliseconds; two creations within the same millisecond would collide,
/// which is accepted for a single-user store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    /// Occurrence time, epoch milliseconds. Never changed by an edit.
    pub date: i64,
    /// Frozen at write time from the category; deliberately NOT re-derived
    /// when the category set later changes, so historical rows keep the icon
    /// they were saved with.
    pub icon: IconTag,
    #[serde(default)]
    pub note: Option<String>,
}

impl Transaction {
    pub fn occurred_at(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.date).single()
    }
}

/// Active aggregation period. Anything that is not one of the three calendar
/// windows behaves as "no filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    Daily,
    Monthly,
    Yearly,
    All,
}

impl Window {
    /// Multiplier applied to the daily budget baseline. Fixed approximations,
    /// not calendar-accurate.
    pub fn budget_scale(self) -> Decimal {
        match self {
            Window::Monthly => Decimal::from(30),
            Window::Yearly => Decimal::from(365),
            Window::Daily | Window::All => Decimal::ONE,
        }
    }

    pub fn budget_label(self) -> &'static str {
        match self {
            Window::Monthly => "Monthly Budget",
            Window::Yearly => "Yearly Budget",
            Window::Daily | Window::All => "Daily Budget",
        }
    }
}

/// The Record Store: everything that survives a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub transactions: Vec<Transaction>,
    pub budget: Decimal,
    pub categories: Vec<String>,
}

pub fn default_budget() -> Decimal {
    Decimal::new(20000, 2)
}

pub fn default_categories() -> Vec<String> {
    ["Food", "Transport", "Shopping", "Ent"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            transactions: Vec::new(),
            budget: default_budget(),
            categories: default_categories(),
        }
    }
}

/// Ephemeral view preferences. Owned by the active session, never persisted;
/// window and search reset on every invocation.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub window: Window,
    pub query: String,
    /// Gauge toggle: show the compact total instead of the percentage.
    pub show_amount: bool,
    /// Identifier staged for update, if any. At most one at a time.
    pub editing: Option<i64>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            window: Window::Daily,
            query: String::new(),
            show_amount: false,
            editing: None,
        }
    }
}

impl ViewState {
    /// Stage a transaction for editing. Last-writer-wins: starting a new edit
    /// while one is staged silently replaces the target. Returns false when
    /// the identifier is not in the store (nothing is staged).
    pub fn start_edit(&mut self, state: &AppState, id: i64) -> bool {
        if state.transactions.iter().any(|t| t.id == id) {
            self.editing = Some(id);
            true
        } else {
            false
        }
    }

    pub fn finish_edit(&mut self) {
        self.editing = None;
    }
}

/// Persisted display theme, independent of the Record Store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
