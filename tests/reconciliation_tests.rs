mod common;

use common::{as_of, community, date, seeded_data_dir};
use dues_core::{time::FixedClock, ReconciliationService};
use dues_domain::{FundType, PaymentStatus};
use dues_storage_json::JsonDuesStorage;

fn service_at(day: chrono::NaiveDate) -> ReconciliationService {
    let storage = JsonDuesStorage::new(seeded_data_dir()).expect("open storage");
    ReconciliationService::with_clock(Box::new(storage), Box::new(FixedClock::on(day)))
}

#[test]
fn fund_balances_follow_contributions_and_all_expenses() {
    let balances = service_at(as_of()).fund_balances();

    assert_eq!(balances.fund(FundType::Maintenance).income, 120_000);
    assert_eq!(balances.fund(FundType::Works).income, 170_000);
    assert_eq!(balances.fund(FundType::Others).income, 25_000);
    assert_eq!(balances.works.expenses, 0);
    assert_eq!(balances.consolidated.income, 315_000);
    assert_eq!(balances.consolidated.expenses, 340_000);
    assert_eq!(balances.consolidated.balance, -25_000);
}

#[test]
fn lot_balances_rank_debtors_and_skip_exempt_lots() {
    let balances = service_at(as_of()).lot_balances();

    let rows: Vec<_> = balances
        .iter()
        .map(|b| (b.lot_number.as_str(), b.outstanding_balance, b.status))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("A-2", 110_000, PaymentStatus::Overdue),
            ("A-1", 30_000, PaymentStatus::Overdue),
            ("A-3", 0, PaymentStatus::Current),
        ]
    );
    assert_eq!(balances[1].total_quotas, 210_000);
    assert_eq!(balances[1].total_contributions, 180_000);
}

#[test]
fn earlier_evaluation_date_only_counts_quotas_due_by_then() {
    let balances = service_at(date(2024, 1, 15)).lot_balances();

    let pedro = balances.iter().find(|b| b.lot_number == "A-2").unwrap();
    assert_eq!(pedro.total_quotas, 30_000);
    assert_eq!(pedro.status, PaymentStatus::Overdue);
}

#[test]
fn lot_detail_splits_debt_by_fund() {
    let service = service_at(as_of());
    let marta = service.find_lot_by_number("a-1").expect("lot exists");

    let detail = service.lot_debt_detail(marta.id).expect("detail");

    assert_eq!(detail.maintenance_debt, 0);
    assert_eq!(detail.works_debt, 30_000);
    assert_eq!(detail.total_debt, 30_000);
    assert_eq!(detail.status, PaymentStatus::Overdue);
}

#[test]
fn exempt_lot_has_no_detail() {
    let service = service_at(as_of());
    let club = service.find_lot_by_number("C-1").expect("lot exists");
    assert!(service.lot_debt_detail(club.id).is_none());
}

#[test]
fn report_combines_sections_from_one_snapshot() {
    let service = service_at(as_of());
    let report = service.report_at(service.now());

    assert!(!report.degraded);
    assert_eq!(report.lots.len(), 3);
    assert_eq!(report.summary.overdue_count, 2);
    assert_eq!(report.summary.current_count, 1);
    assert_eq!(report.summary.total_outstanding, 140_000);
    assert_eq!(report.funds.consolidated.balance, -25_000);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("exempt lot C-1"));
}

#[test]
fn repeated_reports_are_identical() {
    let service = service_at(as_of());
    let first = service.lot_balances();
    let second = service.lot_balances();
    assert_eq!(first, second);
    assert_eq!(community().lots.len(), 4);
}
