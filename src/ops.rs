// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::icons::classify;
use crate::models::{AppState, Transaction};

/// Validation failures. Surfaced to the user as a prompt, the operation is
/// aborted and the store left unchanged. These are never fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpError {
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Please enter a valid budget")]
    InvalidBudget,
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
    #[error("Category name must not be empty")]
    EmptyCategory,
}

/// Every way the Record Store can change. All mutation funnels through
/// [`apply`]; there is no other write path.
#[derive(Debug, Clone)]
pub enum Mutation {
    CreateTransaction {
        amount: Decimal,
        category: String,
        note: Option<String>,
    },
    UpdateTransaction {
        id: i64,
        amount: Decimal,
        category: String,
        note: Option<String>,
    },
    DeleteTransaction {
        id: i64,
    },
    CreateCategory {
        name: String,
    },
    SetBudget {
        amount: Decimal,
    },
}

/// What a successful apply did. `NotFound` is a signal, not an error: an
/// update or delete against a missing identifier leaves the store untouched
/// and the caller decides whether to mention it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Created(i64),
    Updated(i64),
    Deleted(i64),
    NotFound(i64),
    CategoryAdded(String),
    CategoryExists(String),
    BudgetSet,
}

fn expense_title(category: &str) -> String {
    format!("{} Expense", category)
}

fn check_category(state: &AppState, name: &str) -> Result<(), OpError> {
    if state.categories.iter().any(|c| c == name) {
        Ok(())
    } else {
        Err(OpError::UnknownCategory(name.to_string()))
    }
}

/// Single mutation entry point over the Record Store. Callers persist the
/// state and recompute derived views after every `Ok`.
pub fn apply(state: &mut AppState, m: Mutation, now: DateTime<Local>) -> Result<Applied, OpError> {
    match m {
        Mutation::CreateTransaction {
            amount,
            category,
            note,
        } => {
            if amount <= Decimal::ZERO {
                return Err(OpError::InvalidAmount);
            }
            check_category(state, &category)?;
            let stamp = now.timestamp_millis();
            state.transactions.push(Transaction {
                id: stamp,
                title: expense_title(&category),
                amount,
                icon: classify(&category),
                category,
                date: stamp,
                note,
            });
            Ok(Applied::Created(stamp))
        }
        Mutation::UpdateTransaction {
            id,
            amount,
            category,
            note,
        } => {
            if amount <= Decimal::ZERO {
                return Err(OpError::InvalidAmount);
            }
            check_category(state, &category)?;
            match state.transactions.iter_mut().find(|t| t.id == id) {
                Some(t) => {
                    // Identifier and occurrence timestamp survive the edit.
                    t.amount = amount;
                    t.title = expense_title(&category);
                    t.icon = classify(&category);
                    t.category = category;
                    t.note = note;
                    Ok(Applied::Updated(id))
                }
                None => Ok(Applied::NotFound(id)),
            }
        }
        Mutation::DeleteTransaction { id } => {
            let before = state.transactions.len();
            state.transactions.retain(|t| t.id != id);
            if state.transactions.len() == before {
                Ok(Applied::NotFound(id))
            } else {
                Ok(Applied::Deleted(id))
            }
        }
        Mutation::CreateCategory { name } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(OpError::EmptyCategory);
            }
            // Exact-match dedup only; "food" and "Food" are distinct.
            if state.categories.iter().any(|c| *c == name) {
                return Ok(Applied::CategoryExists(name));
            }
            state.categories.push(name.clone());
            Ok(Applied::CategoryAdded(name))
        }
        Mutation::SetBudget { amount } => {
            if amount <= Decimal::ZERO {
                return Err(OpError::InvalidBudget);
            }
            state.budget = amount;
            Ok(Applied::BudgetSet)
        }
    }
}
