// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;

use crate::models::{default_budget, default_categories, AppState, Theme, Transaction};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Spendclip", "spendclip"));

/// Current-format blob.
pub const STORE_FILE: &str = "spendclip.json";
/// Legacy key holding a bare transaction array, migrated on first load.
pub const LEGACY_FILE: &str = "transactions.json";
/// Theme flag, independent of the record store.
pub const THEME_FILE: &str = "theme";

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir)
}

pub fn store_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(STORE_FILE))
}

/// On-disk shape of the current blob. `categories` arrived after the first
/// release, so older blobs may lack the field; a missing `budget` falls back
/// to the default baseline.
#[derive(Debug, Serialize, Deserialize)]
struct RawStore {
    transactions: Vec<Transaction>,
    #[serde(default = "default_budget")]
    budget: Decimal,
    #[serde(default)]
    categories: Option<Vec<String>>,
}

// Migration chain: each step is a total function from one historical shape to
// the next, applied in order until the terminal shape is reached.

/// Step 1: a bare transaction array (the legacy key, or nothing at all) gets
/// wrapped with the default budget and category set.
fn wrap_legacy(transactions: Vec<Transaction>) -> RawStore {
    RawStore {
        transactions,
        budget: default_budget(),
        categories: Some(default_categories()),
    }
}

/// Step 2: a current blob without a category set gets the defaults injected.
fn fill_categories(raw: RawStore) -> RawStore {
    RawStore {
        transactions: raw.transactions,
        budget: raw.budget,
        categories: raw.categories.or_else(|| Some(default_categories())),
    }
}

fn finish(raw: RawStore) -> AppState {
    AppState {
        transactions: raw.transactions,
        budget: raw.budget,
        categories: raw.categories.unwrap_or_else(default_categories),
    }
}

/// Rebuild the Record Store from whichever blob is present. A malformed blob
/// is a fatal startup error; corruption is not defended against.
pub fn restore(current: Option<&str>, legacy: Option<&str>) -> Result<AppState> {
    let raw = match current {
        Some(blob) => serde_json::from_str::<RawStore>(blob).context("Malformed store blob")?,
        None => match legacy {
            Some(blob) => wrap_legacy(
                serde_json::from_str(blob).context("Malformed legacy transaction list")?,
            ),
            None => wrap_legacy(Vec::new()),
        },
    };
    Ok(finish(fill_categories(raw)))
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    if path.exists() {
        let s = fs::read_to_string(path)
            .with_context(|| format!("Read {}", path.display()))?;
        Ok(Some(s))
    } else {
        Ok(None)
    }
}

pub fn load_from(dir: &Path) -> Result<AppState> {
    let current = read_optional(&dir.join(STORE_FILE))?;
    let legacy = read_optional(&dir.join(LEGACY_FILE))?;
    restore(current.as_deref(), legacy.as_deref())
}

pub fn load() -> Result<AppState> {
    load_from(&data_dir()?)
}

/// Full rewrite of the current blob. Last-write-wins; there is no torn-write
/// protection layer.
pub fn save_to(dir: &Path, state: &AppState) -> Result<()> {
    let path = dir.join(STORE_FILE);
    let blob = serde_json::to_string_pretty(state)?;
    fs::write(&path, blob).with_context(|| format!("Write {}", path.display()))?;
    Ok(())
}

pub fn save(state: &AppState) -> Result<()> {
    save_to(&data_dir()?, state)
}

pub fn load_theme_from(dir: &Path) -> Result<Theme> {
    match read_optional(&dir.join(THEME_FILE))? {
        Some(v) if v.trim() == "dark" => Ok(Theme::Dark),
        _ => Ok(Theme::Light),
    }
}

pub fn load_theme() -> Result<Theme> {
    load_theme_from(&data_dir()?)
}

pub fn save_theme_to(dir: &Path, theme: Theme) -> Result<()> {
    let path = dir.join(THEME_FILE);
    fs::write(&path, theme.as_str()).with_context(|| format!("Write {}", path.display()))?;
    Ok(())
}

pub fn save_theme(theme: Theme) -> Result<()> {
    save_theme_to(&data_dir()?, theme)
}

/// Delete every persisted key: transactions, budget, categories, theme.
pub fn reset_from(dir: &Path) -> Result<()> {
    for file in [STORE_FILE, LEGACY_FILE, THEME_FILE] {
        let path = dir.join(file);
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("Remove {}", path.display()))?;
        }
    }
    Ok(())
}

pub fn reset() -> Result<()> {
    reset_from(&data_dir()?)
}
