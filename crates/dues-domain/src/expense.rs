//! Domain models for community-wide outgoing payments.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    Maintenance,
    Works,
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseKind::Maintenance => "Maintenance",
            ExpenseKind::Works => "Works",
        };
        f.write_str(label)
    }
}

/// A general payment made by the community; never attributed to a single lot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Expense {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: ExpenseKind,
    pub amount: u64,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl Expense {
    pub fn new(kind: ExpenseKind, amount: u64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            date,
            category: String::new(),
            description: String::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

impl Amounted for Expense {
    fn amount(&self) -> u64 {
        self.amount
    }
}
