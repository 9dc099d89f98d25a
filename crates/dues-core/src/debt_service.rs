//! Quota debt reconciliation for non-exempt lots.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use dues_domain::{
    clamp_owed, signed_difference, total_amount, Contribution, FundType, Lot, LotBalance,
    LotDebtDetail, PaymentStatus, QuotaConfig, QuotaType,
};
use uuid::Uuid;

use crate::time::is_due;

pub struct DebtService;

/// Jointly-netted position of one lot, shared by the summary and detail views.
struct NetPosition {
    total_quotas: u64,
    outstanding_balance: u64,
    status: PaymentStatus,
}

impl NetPosition {
    fn compute(lot: &Lot, applicable_total: u64, contributed: u64) -> Self {
        let total_quotas = applicable_total.saturating_add(lot.initial_works_debt);
        let balance = signed_difference(total_quotas, contributed);
        Self {
            total_quotas,
            outstanding_balance: clamp_owed(balance),
            status: PaymentStatus::from_balance(balance),
        }
    }
}

impl DebtService {
    /// Quotas that are due at `now`. Quotas without a due date are drafts and
    /// never apply.
    pub fn applicable_quotas(quotas: &[QuotaConfig], now: DateTime<Utc>) -> Vec<&QuotaConfig> {
        quotas
            .iter()
            .filter(|quota| quota.due_date.is_some_and(|due| is_due(due, now)))
            .collect()
    }

    /// Outstanding balance and status for every non-exempt lot, largest
    /// debtors first.
    pub fn calculate_lot_balances(
        lots: &[Lot],
        contributions: &[Contribution],
        quotas: &[QuotaConfig],
        now: DateTime<Utc>,
    ) -> Vec<LotBalance> {
        let applicable_total = total_amount(Self::applicable_quotas(quotas, now));

        let mut paid_by_lot: HashMap<Uuid, u64> = HashMap::new();
        for contribution in contributions {
            let paid = paid_by_lot.entry(contribution.lot_id).or_default();
            *paid = paid.saturating_add(contribution.amount);
        }

        let mut balances: Vec<LotBalance> = lots
            .iter()
            .filter(|lot| lot.owes_dues())
            .map(|lot| {
                let contributed = paid_by_lot.get(&lot.id).copied().unwrap_or(0);
                let position = NetPosition::compute(lot, applicable_total, contributed);
                LotBalance {
                    lot_id: lot.id,
                    lot_number: lot.number.clone(),
                    owner_name: lot.owner_name.clone(),
                    total_quotas: position.total_quotas,
                    total_contributions: contributed,
                    outstanding_balance: position.outstanding_balance,
                    status: position.status,
                }
            })
            .collect();
        Self::sort_by_outstanding(&mut balances);

        tracing::debug!(
            lots = balances.len(),
            applicable_total,
            %now,
            "calculated lot balances"
        );
        balances
    }

    /// Per-fund debt breakdown for `lot`, or `None` when the lot is exempt.
    ///
    /// The initial works debt is folded into the works fund only. The status
    /// and outstanding balance follow the jointly-netted rule used by
    /// [`DebtService::calculate_lot_balances`], so `total_debt` may exceed
    /// `outstanding_balance` when one fund is overpaid.
    pub fn calculate_lot_debt_detail(
        lot: &Lot,
        contributions: &[Contribution],
        quotas: &[QuotaConfig],
        now: DateTime<Utc>,
    ) -> Option<LotDebtDetail> {
        if !lot.owes_dues() {
            return None;
        }

        let applicable = Self::applicable_quotas(quotas, now);
        let quotas_of = |kind: QuotaType| {
            total_amount(applicable.iter().copied().filter(|q| q.quota_type == kind))
        };
        let maintenance_quotas = quotas_of(QuotaType::Maintenance);
        let works_quotas = quotas_of(QuotaType::Works);

        let own: Vec<&Contribution> = contributions.iter().filter(|c| c.belongs_to(lot.id)).collect();
        let paid_to = |fund: FundType| total_amount(own.iter().copied().filter(|c| c.fund == fund));
        let maintenance_contributions = paid_to(FundType::Maintenance);
        let works_contributions = paid_to(FundType::Works);

        let maintenance_debt = clamp_owed(signed_difference(
            maintenance_quotas,
            maintenance_contributions,
        ));
        let works_debt = clamp_owed(signed_difference(
            works_quotas.saturating_add(lot.initial_works_debt),
            works_contributions,
        ));

        let position = NetPosition::compute(
            lot,
            total_amount(applicable.iter().copied()),
            total_amount(own.iter().copied()),
        );

        Some(LotDebtDetail {
            lot_id: lot.id,
            lot_number: lot.number.clone(),
            owner_name: lot.owner_name.clone(),
            maintenance_quotas,
            maintenance_contributions,
            maintenance_debt,
            works_quotas,
            initial_works_debt: lot.initial_works_debt,
            works_contributions,
            works_debt,
            total_debt: maintenance_debt.saturating_add(works_debt),
            outstanding_balance: position.outstanding_balance,
            status: position.status,
        })
    }

    /// Looks up `lot_id` and returns its debt detail. Unknown and exempt lots
    /// both yield `None`.
    pub fn lot_debt_detail_by_id(
        lot_id: Uuid,
        lots: &[Lot],
        contributions: &[Contribution],
        quotas: &[QuotaConfig],
        now: DateTime<Utc>,
    ) -> Option<LotDebtDetail> {
        let lot = lots.iter().find(|lot| lot.id == lot_id)?;
        Self::calculate_lot_debt_detail(lot, contributions, quotas, now)
    }

    /// Orders balances by descending outstanding amount, then by lot number.
    pub fn sort_by_outstanding(balances: &mut [LotBalance]) {
        balances.sort_by(|a, b| {
            b.outstanding_balance
                .cmp(&a.outstanding_balance)
                .then_with(|| a.lot_number.cmp(&b.lot_number))
        });
    }
}
