//! Fetch-then-compute wrapper around the pure reconciliation services.
//!
//! Every read failure is logged and degraded here: all-zero fund balances,
//! an empty lot list or no detail. Callers never see a partial result.

use chrono::{DateTime, Utc};
use dues_domain::{AllFundsBalances, DebtSummary, Lot, LotBalance, LotDebtDetail};
use uuid::Uuid;

use crate::{
    debt_service::DebtService,
    fund_service::FundService,
    storage::{snapshot_warnings, DuesSnapshot, DuesStorage},
    summary_service::SummaryService,
    time::{Clock, SystemClock},
    CoreError,
};

/// Everything the dashboard needs from one consistent read of the storage.
#[derive(Debug, Clone, Default)]
pub struct DuesReport {
    pub evaluated_at: DateTime<Utc>,
    pub funds: AllFundsBalances,
    pub lots: Vec<LotBalance>,
    pub summary: DebtSummary,
    pub warnings: Vec<String>,
    /// Set when the storage could not be read and every section is empty.
    pub degraded: bool,
}

pub struct ReconciliationService {
    storage: Box<dyn DuesStorage>,
    clock: Box<dyn Clock>,
}

impl ReconciliationService {
    pub fn new(storage: Box<dyn DuesStorage>) -> Self {
        Self::with_clock(storage, Box::new(SystemClock))
    }

    pub fn with_clock(storage: Box<dyn DuesStorage>, clock: Box<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Fund balances, or all zeros when any collection cannot be read.
    pub fn fund_balances(&self) -> AllFundsBalances {
        self.try_fund_balances().unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to load fund balances");
            AllFundsBalances::default()
        })
    }

    pub fn lot_balances(&self) -> Vec<LotBalance> {
        self.lot_balances_at(self.now())
    }

    /// Lot balances at `now`, or an empty list when any collection cannot be read.
    pub fn lot_balances_at(&self, now: DateTime<Utc>) -> Vec<LotBalance> {
        self.try_lot_balances(now).unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to calculate lot balances");
            Vec::new()
        })
    }

    pub fn lot_debt_detail(&self, lot_id: Uuid) -> Option<LotDebtDetail> {
        self.lot_debt_detail_at(lot_id, self.now())
    }

    /// Debt detail at `now`. Unknown lots, exempt lots and read failures all
    /// yield `None`; only the latter is logged as an error.
    pub fn lot_debt_detail_at(&self, lot_id: Uuid, now: DateTime<Utc>) -> Option<LotDebtDetail> {
        match self.try_lot_debt_detail_at(lot_id, now) {
            Ok(detail) => detail,
            Err(err) => {
                tracing::error!(error = %err, %lot_id, "failed to calculate lot debt detail");
                None
            }
        }
    }

    /// Resolves a lot by its display number.
    pub fn find_lot_by_number(&self, number: &str) -> Result<Lot, CoreError> {
        let wanted = number.trim();
        self.storage
            .list_lots()?
            .into_iter()
            .find(|lot| lot.number.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::LotNotFound(wanted.to_string()))
    }

    /// Builds the full dashboard from a single snapshot. A failed read
    /// degrades every section to its empty value at once.
    pub fn report_at(&self, now: DateTime<Utc>) -> DuesReport {
        match DuesSnapshot::read(self.storage.as_ref()) {
            Ok(snapshot) => {
                let warnings = snapshot_warnings(&snapshot.lots, &snapshot.contributions);
                for warning in &warnings {
                    tracing::warn!("{warning}");
                }
                let funds = FundService::all_funds_balances(
                    &snapshot.lots,
                    &snapshot.contributions,
                    &snapshot.expenses,
                );
                let lots = DebtService::calculate_lot_balances(
                    &snapshot.lots,
                    &snapshot.contributions,
                    &snapshot.quotas,
                    now,
                );
                let summary = SummaryService::debt_summary(&lots);
                DuesReport {
                    evaluated_at: now,
                    funds,
                    lots,
                    summary,
                    warnings,
                    degraded: false,
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load dues report");
                DuesReport {
                    evaluated_at: now,
                    degraded: true,
                    ..DuesReport::default()
                }
            }
        }
    }

    fn try_fund_balances(&self) -> Result<AllFundsBalances, CoreError> {
        let lots = self.storage.list_lots()?;
        let contributions = self.storage.list_contributions()?;
        let expenses = self.storage.list_expenses()?;
        Ok(FundService::all_funds_balances(
            &lots,
            &contributions,
            &expenses,
        ))
    }

    fn try_lot_balances(&self, now: DateTime<Utc>) -> Result<Vec<LotBalance>, CoreError> {
        let lots = self.storage.list_lots()?;
        let contributions = self.storage.list_contributions()?;
        let quotas = self.storage.list_quota_configs()?;
        for warning in snapshot_warnings(&lots, &contributions) {
            tracing::warn!("{warning}");
        }
        Ok(DebtService::calculate_lot_balances(
            &lots,
            &contributions,
            &quotas,
            now,
        ))
    }

    /// Debt detail at `now`, keeping read failures apart from "nothing to
    /// report" (`Ok(None)` for unknown or exempt lots).
    pub fn try_lot_debt_detail_at(
        &self,
        lot_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<LotDebtDetail>, CoreError> {
        let lots = self.storage.list_lots()?;
        let contributions = self.storage.list_contributions()?;
        let quotas = self.storage.list_quota_configs()?;
        Ok(DebtService::lot_debt_detail_by_id(
            lot_id,
            &lots,
            &contributions,
            &quotas,
            now,
        ))
    }
}
