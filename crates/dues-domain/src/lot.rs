//! Domain types representing community lots.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A parcel in the community whose owner owes recurring dues.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lot {
    pub id: Uuid,
    /// Display number shown on reports (e.g. "A-12").
    pub number: String,
    pub owner_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_contact: Option<String>,
    /// Debt carried over from before the system existed, attributed to the works fund.
    #[serde(default)]
    pub initial_works_debt: u64,
    #[serde(default)]
    pub is_exempt: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exemption_reason: Option<String>,
}

impl Lot {
    pub fn new(number: impl Into<String>, owner_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: number.into(),
            owner_name: owner_name.into(),
            owner_contact: None,
            initial_works_debt: 0,
            is_exempt: false,
            exemption_reason: None,
        }
    }

    pub fn with_initial_works_debt(mut self, amount: u64) -> Self {
        self.initial_works_debt = amount;
        self
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.owner_contact = Some(contact.into());
        self
    }

    /// Marks the lot as exempt from dues, recording an optional reason.
    pub fn exempt(mut self, reason: Option<&str>) -> Self {
        self.is_exempt = true;
        self.exemption_reason = reason.map(str::to_string);
        self
    }

    /// Returns `true` when the lot participates in debt computation.
    pub fn owes_dues(&self) -> bool {
        !self.is_exempt
    }
}
