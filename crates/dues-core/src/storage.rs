use std::collections::{HashMap, HashSet};

use dues_domain::{Contribution, Expense, Lot, QuotaConfig};
use uuid::Uuid;

use crate::CoreError;

/// Read side of the persistence collaborator that owns lots, payments,
/// expenses and the quota schedule.
pub trait DuesStorage: Send + Sync {
    fn list_lots(&self) -> Result<Vec<Lot>, CoreError>;
    fn list_contributions(&self) -> Result<Vec<Contribution>, CoreError>;
    fn list_expenses(&self) -> Result<Vec<Expense>, CoreError>;
    fn list_quota_configs(&self) -> Result<Vec<QuotaConfig>, CoreError>;
}

/// Plain collections read from a [`DuesStorage`] for a single reconciliation run.
///
/// Each collection is read independently, so a snapshot may mix states when
/// an administrator edits records concurrently.
#[derive(Debug, Clone, Default)]
pub struct DuesSnapshot {
    pub lots: Vec<Lot>,
    pub contributions: Vec<Contribution>,
    pub expenses: Vec<Expense>,
    pub quotas: Vec<QuotaConfig>,
}

impl DuesSnapshot {
    pub fn read(storage: &dyn DuesStorage) -> Result<Self, CoreError> {
        Ok(Self {
            lots: storage.list_lots()?,
            contributions: storage.list_contributions()?,
            expenses: storage.list_expenses()?,
            quotas: storage.list_quota_configs()?,
        })
    }
}

/// Storage backed by owned vectors, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    pub lots: Vec<Lot>,
    pub contributions: Vec<Contribution>,
    pub expenses: Vec<Expense>,
    pub quotas: Vec<QuotaConfig>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DuesStorage for InMemoryStorage {
    fn list_lots(&self) -> Result<Vec<Lot>, CoreError> {
        Ok(self.lots.clone())
    }

    fn list_contributions(&self) -> Result<Vec<Contribution>, CoreError> {
        Ok(self.contributions.clone())
    }

    fn list_expenses(&self) -> Result<Vec<Expense>, CoreError> {
        Ok(self.expenses.clone())
    }

    fn list_quota_configs(&self) -> Result<Vec<QuotaConfig>, CoreError> {
        Ok(self.quotas.clone())
    }
}

/// Detects dangling references and other anomalies within a snapshot.
///
/// Warnings are informational; reconciliation results are unaffected.
pub fn snapshot_warnings(lots: &[Lot], contributions: &[Contribution]) -> Vec<String> {
    let lots_by_id: HashMap<Uuid, &Lot> = lots.iter().map(|lot| (lot.id, lot)).collect();
    let mut duplicate_numbers = HashSet::new();
    let mut seen_numbers = HashSet::new();
    let mut warnings = Vec::new();

    for lot in lots {
        if !seen_numbers.insert(lot.number.as_str()) && duplicate_numbers.insert(lot.number.as_str())
        {
            warnings.push(format!("lot number {} is used by more than one lot", lot.number));
        }
    }

    for contribution in contributions {
        match lots_by_id.get(&contribution.lot_id) {
            None => warnings.push(format!(
                "contribution {} references unknown lot {}",
                contribution.id, contribution.lot_id
            )),
            Some(lot) if lot.is_exempt => warnings.push(format!(
                "contribution {} credited to exempt lot {}",
                contribution.id, lot.number
            )),
            Some(_) => {}
        }
    }
    warnings
}
