use dues_domain::{DebtSummary, LotBalance, PaymentStatus};

pub struct SummaryService;

impl SummaryService {
    /// Counts lots per status and totals what is still owed.
    pub fn debt_summary(balances: &[LotBalance]) -> DebtSummary {
        balances
            .iter()
            .fold(DebtSummary::default(), |mut summary, balance| {
                summary.lot_count += 1;
                match balance.status {
                    PaymentStatus::Current => summary.current_count += 1,
                    PaymentStatus::Overdue => summary.overdue_count += 1,
                }
                summary.total_outstanding = summary
                    .total_outstanding
                    .saturating_add(balance.outstanding_balance);
                summary
            })
    }

    /// Overdue lots in the order they were supplied.
    pub fn overdue(balances: &[LotBalance]) -> Vec<&LotBalance> {
        balances
            .iter()
            .filter(|balance| balance.status.is_overdue())
            .collect()
    }
}
