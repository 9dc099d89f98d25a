//! Plain-text and JSON rendering of reconciliation results.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use colored::Colorize;
use dues_core::{
    format::{status_label, AmountFormat},
    DuesReport,
};
use dues_domain::{
    AllFundsBalances, BalanceSummary, DebtSummary, FundType, LotBalance, LotDebtDetail,
    PaymentStatus,
};
use serde::Serialize;

const NO_DATA: &str = "Could not load data.";

/// Serializable view of a [`DuesReport`].
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub evaluated_at: DateTime<Utc>,
    pub funds: &'a AllFundsBalances,
    pub lots: &'a [LotBalance],
    pub summary: &'a DebtSummary,
    pub warnings: &'a [String],
    pub degraded: bool,
}

impl<'a> From<&'a DuesReport> for JsonReport<'a> {
    fn from(report: &'a DuesReport) -> Self {
        Self {
            evaluated_at: report.evaluated_at,
            funds: &report.funds,
            lots: &report.lots,
            summary: &report.summary,
            warnings: &report.warnings,
            degraded: report.degraded,
        }
    }
}

pub fn render_report(report: &DuesReport, format: &AmountFormat) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Dues report as of {}",
        report.evaluated_at.format("%Y-%m-%d %H:%M UTC")
    );
    out.push('\n');
    if report.degraded {
        out.push_str(&render_load_failure());
        return out;
    }
    out.push_str(&render_funds(&report.funds, format));
    out.push('\n');
    out.push_str(&render_lot_balances(&report.lots, format));
    out.push('\n');
    out.push_str(&render_summary(&report.summary, format));
    for warning in &report.warnings {
        let _ = writeln!(out, "{} {}", "warning:".yellow(), warning);
    }
    out
}

pub fn render_funds(funds: &AllFundsBalances, format: &AmountFormat) -> String {
    let mut out = String::from("Funds\n");
    let _ = writeln!(
        out,
        "  {:<13} {:>18} {:>18} {:>18}",
        "Fund", "Income", "Expenses", "Balance"
    );
    for fund in FundType::ALL {
        out.push_str(&fund_row(&fund.to_string(), funds.fund(fund), format));
    }
    out.push_str(&fund_row("Consolidated", &funds.consolidated, format));
    out
}

fn fund_row(label: &str, summary: &BalanceSummary, format: &AmountFormat) -> String {
    let balance = format.format_signed(summary.balance);
    let balance = if summary.balance < 0 {
        format!("{:>18}", balance).red().to_string()
    } else {
        format!("{:>18}", balance)
    };
    format!(
        "  {:<13} {:>18} {:>18} {}\n",
        label,
        format.format(summary.income),
        format.format(summary.expenses),
        balance
    )
}

pub fn render_lot_balances(balances: &[LotBalance], format: &AmountFormat) -> String {
    let mut out = String::from("Lot balances\n");
    if balances.is_empty() {
        out.push_str("  No lots to report.\n");
        return out;
    }
    let _ = writeln!(
        out,
        "  {:<8} {:<24} {:>18} {:>18} {:>18}  Status",
        "Lot", "Owner", "Owed", "Paid", "Outstanding"
    );
    for balance in balances {
        let _ = writeln!(
            out,
            "  {:<8} {:<24} {:>18} {:>18} {:>18}  {}",
            balance.lot_number,
            truncate(&balance.owner_name, 24),
            format.format(balance.total_quotas),
            format.format(balance.total_contributions),
            format.format(balance.outstanding_balance),
            colored_status(balance.status)
        );
    }
    out
}

pub fn render_summary(summary: &DebtSummary, format: &AmountFormat) -> String {
    format!(
        "Summary: {} lots, {} current, {} overdue, {} outstanding\n",
        summary.lot_count,
        summary.current_count,
        summary.overdue_count,
        format.format(summary.total_outstanding)
    )
}

pub fn render_detail(detail: &LotDebtDetail, format: &AmountFormat) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Lot {} ({})", detail.lot_number, detail.owner_name);
    let _ = writeln!(
        out,
        "  Maintenance: quotas {}, paid {}, debt {}",
        format.format(detail.maintenance_quotas),
        format.format(detail.maintenance_contributions),
        format.format(detail.maintenance_debt)
    );
    let _ = writeln!(
        out,
        "  Works:       quotas {} + initial debt {}, paid {}, debt {}",
        format.format(detail.works_quotas),
        format.format(detail.initial_works_debt),
        format.format(detail.works_contributions),
        format.format(detail.works_debt)
    );
    let _ = writeln!(out, "  Total debt:  {}", format.format(detail.total_debt));
    let _ = writeln!(
        out,
        "  Outstanding: {}  {}",
        format.format(detail.outstanding_balance),
        colored_status(detail.status)
    );
    out
}

pub fn render_no_detail(lot_number: &str) -> String {
    format!("No debt detail for lot {lot_number} (unknown or exempt).\n")
}

pub fn render_load_failure() -> String {
    format!("{NO_DATA}\n")
}

fn colored_status(status: PaymentStatus) -> String {
    match status {
        PaymentStatus::Current => status_label(status).green().to_string(),
        PaymentStatus::Overdue => status_label(status).red().bold().to_string(),
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dues_domain::uuid::Uuid;

    fn plain() {
        colored::control::set_override(false);
    }

    fn balance(number: &str, outstanding: u64, status: PaymentStatus) -> LotBalance {
        LotBalance {
            lot_id: Uuid::nil(),
            lot_number: number.into(),
            owner_name: "Owner".into(),
            total_quotas: outstanding,
            total_contributions: 0,
            outstanding_balance: outstanding,
            status,
        }
    }

    #[test]
    fn lot_table_lists_each_lot_with_status() {
        plain();
        let rows = vec![
            balance("A-1", 12_500, PaymentStatus::Overdue),
            balance("A-2", 0, PaymentStatus::Current),
        ];
        let text = render_lot_balances(&rows, &AmountFormat::default());
        assert!(text.contains("A-1"));
        assert!(text.contains("USD 125.00"));
        assert!(text.contains("OVERDUE"));
        assert!(text.contains("CURRENT"));
    }

    #[test]
    fn empty_lot_table_says_so() {
        let text = render_lot_balances(&[], &AmountFormat::default());
        assert!(text.contains("No lots to report."));
    }

    #[test]
    fn funds_table_shows_negative_consolidated_balance() {
        plain();
        let funds = AllFundsBalances {
            consolidated: BalanceSummary {
                income: 100,
                expenses: 300,
                balance: -200,
            },
            ..AllFundsBalances::default()
        };
        let text = render_funds(&funds, &AmountFormat::default());
        assert!(text.contains("Consolidated"));
        assert!(text.contains("USD -2.00"));
    }

    #[test]
    fn truncate_keeps_short_names() {
        assert_eq!(truncate("Ana", 24), "Ana");
        assert_eq!(truncate("abcdef", 4).chars().count(), 4);
    }
}
