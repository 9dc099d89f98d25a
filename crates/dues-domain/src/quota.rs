//! Community-wide quota schedule entries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;
use crate::contribution::FundType;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QuotaType {
    Maintenance,
    Works,
}

impl QuotaType {
    /// Fund a payment must be credited to in order to settle this quota type.
    pub fn fund(self) -> FundType {
        match self {
            QuotaType::Maintenance => FundType::Maintenance,
            QuotaType::Works => FundType::Works,
        }
    }
}

impl fmt::Display for QuotaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fund(), f)
    }
}

/// A recurring due that applies uniformly to every non-exempt lot once due.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotaConfig {
    pub id: Uuid,
    pub quota_type: QuotaType,
    pub amount: u64,
    /// Unscheduled (draft) quotas carry no due date and never apply.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
}

impl QuotaConfig {
    pub fn new(quota_type: QuotaType, amount: u64, due_date: Option<NaiveDate>) -> Self {
        Self {
            id: Uuid::new_v4(),
            quota_type,
            amount,
            due_date,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Amounted for QuotaConfig {
    fn amount(&self) -> u64 {
        self.amount
    }
}
