//! Domain models for lot payments into the community funds.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Enumerates the funds a contribution can be credited to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum FundType {
    Maintenance,
    Works,
    Others,
}

impl FundType {
    pub const ALL: [FundType; 3] = [FundType::Maintenance, FundType::Works, FundType::Others];

    pub fn as_str(self) -> &'static str {
        match self {
            FundType::Maintenance => "maintenance",
            FundType::Works => "works",
            FundType::Others => "others",
        }
    }

}

impl FromStr for FundType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "maintenance" => Ok(FundType::Maintenance),
            "works" => Ok(FundType::Works),
            "others" => Ok(FundType::Others),
            other => Err(format!("unknown fund type `{other}`")),
        }
    }
}

impl fmt::Display for FundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FundType::Maintenance => "Maintenance",
            FundType::Works => "Works",
            FundType::Others => "Others",
        };
        f.write_str(label)
    }
}

/// A payment made by a lot into exactly one fund.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contribution {
    pub id: Uuid,
    pub lot_id: Uuid,
    #[serde(rename = "type")]
    pub fund: FundType,
    pub amount: u64,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl Contribution {
    pub fn new(lot_id: Uuid, fund: FundType, amount: u64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            lot_id,
            fund,
            amount,
            date,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn belongs_to(&self, lot_id: Uuid) -> bool {
        self.lot_id == lot_id
    }
}

impl Amounted for Contribution {
    fn amount(&self) -> u64 {
        self.amount
    }
}
