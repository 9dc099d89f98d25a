//! Report structures produced by fund aggregation and debt reconciliation.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::contribution::FundType;

/// Income, expenses and resulting balance for one fund or the whole community.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceSummary {
    pub income: u64,
    pub expenses: u64,
    /// Only the consolidated summary can go negative.
    pub balance: i64,
}

impl BalanceSummary {
    /// Summary for a single fund: income only, expenses are never attributed.
    pub fn income_only(income: u64) -> Self {
        Self {
            income,
            expenses: 0,
            balance: crate::common::signed_difference(income, 0),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.income == 0 && self.expenses == 0 && self.balance == 0
    }
}

/// Per-fund balances plus the consolidated community position.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllFundsBalances {
    pub maintenance: BalanceSummary,
    pub works: BalanceSummary,
    pub others: BalanceSummary,
    pub consolidated: BalanceSummary,
}

impl AllFundsBalances {
    pub fn fund(&self, fund: FundType) -> &BalanceSummary {
        match fund {
            FundType::Maintenance => &self.maintenance,
            FundType::Works => &self.works,
            FundType::Others => &self.others,
        }
    }
}

/// Two-state payment standing of a lot. There is deliberately no credit state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Current,
    Overdue,
}

impl PaymentStatus {
    /// `Overdue` iff the signed balance is strictly positive.
    pub fn from_balance(balance: i64) -> Self {
        if balance > 0 {
            PaymentStatus::Overdue
        } else {
            PaymentStatus::Current
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Current => "current",
            PaymentStatus::Overdue => "overdue",
        }
    }

    pub fn is_overdue(self) -> bool {
        matches!(self, PaymentStatus::Overdue)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentStatus::Current => "Current",
            PaymentStatus::Overdue => "Overdue",
        };
        f.write_str(label)
    }
}

/// Jointly-netted outstanding position of one non-exempt lot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LotBalance {
    pub lot_id: Uuid,
    pub lot_number: String,
    pub owner_name: String,
    /// Applicable quotas plus the lot's initial works debt.
    pub total_quotas: u64,
    pub total_contributions: u64,
    pub outstanding_balance: u64,
    pub status: PaymentStatus,
}

/// Per-fund debt breakdown for a single lot.
///
/// `total_debt` clamps each fund before summing whereas `outstanding_balance`
/// nets every fund first, so the two can disagree when one fund is overpaid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LotDebtDetail {
    pub lot_id: Uuid,
    pub lot_number: String,
    pub owner_name: String,
    pub maintenance_quotas: u64,
    pub maintenance_contributions: u64,
    pub maintenance_debt: u64,
    pub works_quotas: u64,
    pub initial_works_debt: u64,
    pub works_contributions: u64,
    pub works_debt: u64,
    pub total_debt: u64,
    pub outstanding_balance: u64,
    pub status: PaymentStatus,
}

/// Headline figures for the debtor summary report.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DebtSummary {
    pub lot_count: usize,
    pub current_count: usize,
    pub overdue_count: usize,
    pub total_outstanding: u64,
}
