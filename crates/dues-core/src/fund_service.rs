//! Per-fund and consolidated income/expense aggregation.

use dues_domain::{
    signed_difference, total_amount, AllFundsBalances, BalanceSummary, Contribution, Expense,
    FundType, Lot,
};

pub struct FundService;

impl FundService {
    /// Income credited to `fund`. Individual funds never carry expenses, so the
    /// balance always equals the income.
    pub fn fund_balance(fund: FundType, contributions: &[Contribution]) -> BalanceSummary {
        let income = total_amount(contributions.iter().filter(|c| c.fund == fund));
        BalanceSummary::income_only(income)
    }

    /// Balances for every fund plus the consolidated position, where every
    /// expense regardless of kind is deducted from the combined income.
    ///
    /// `_lots` does not influence the figures: contributions from exempt lots
    /// still count as income.
    pub fn all_funds_balances(
        _lots: &[Lot],
        contributions: &[Contribution],
        expenses: &[Expense],
    ) -> AllFundsBalances {
        let maintenance = Self::fund_balance(FundType::Maintenance, contributions);
        let works = Self::fund_balance(FundType::Works, contributions);
        let others = Self::fund_balance(FundType::Others, contributions);

        let income = maintenance
            .income
            .saturating_add(works.income)
            .saturating_add(others.income);
        let spent = total_amount(expenses);
        let consolidated = BalanceSummary {
            income,
            expenses: spent,
            balance: signed_difference(income, spent),
        };
        tracing::debug!(
            income,
            expenses = spent,
            balance = consolidated.balance,
            "aggregated fund balances"
        );

        AllFundsBalances {
            maintenance,
            works,
            others,
            consolidated,
        }
    }
}
