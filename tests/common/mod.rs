#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::NaiveDate;
use dues_core::storage::DuesSnapshot;
use dues_domain::{Contribution, Expense, ExpenseKind, FundType, Lot, QuotaConfig, QuotaType};
use dues_storage_json::JsonDuesStorage;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Evaluation date at which the fixture's figures below hold.
pub fn as_of() -> NaiveDate {
    date(2024, 6, 30)
}

/// Creates a unique directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Community fixture, evaluated at [`as_of`]:
///
/// * applicable quotas total 110000 (two maintenance of 30000, one works of 50000)
/// * A-1 owes 30000 (all of it works), A-2 owes 110000, A-3 is settled
/// * C-1 is exempt but its 5000 contribution counts as income
/// * consolidated income 315000, expenses 340000, balance -25000
pub fn community() -> DuesSnapshot {
    let marta = Lot::new("A-1", "Marta").with_initial_works_debt(100_000);
    let pedro = Lot::new("A-2", "Pedro").with_contact("pedro@example.com");
    let rosa = Lot::new("A-3", "Rosa");
    let club = Lot::new("C-1", "Clubhouse").exempt(Some("common area"));

    let contributions = vec![
        Contribution::new(marta.id, FundType::Maintenance, 60_000, date(2024, 2, 15)),
        Contribution::new(marta.id, FundType::Works, 70_000, date(2024, 3, 5)),
        Contribution::new(marta.id, FundType::Works, 50_000, date(2024, 4, 5)),
        Contribution::new(rosa.id, FundType::Maintenance, 60_000, date(2024, 2, 1)),
        Contribution::new(rosa.id, FundType::Works, 50_000, date(2024, 3, 1)),
        Contribution::new(rosa.id, FundType::Others, 20_000, date(2024, 3, 1)),
        Contribution::new(club.id, FundType::Others, 5_000, date(2024, 5, 1)),
    ];
    let expenses = vec![
        Expense::new(ExpenseKind::Maintenance, 40_000, date(2024, 2, 20)).with_category("gardening"),
        Expense::new(ExpenseKind::Works, 300_000, date(2024, 4, 10)).with_category("paving"),
    ];
    let quotas = vec![
        QuotaConfig::new(QuotaType::Maintenance, 30_000, Some(date(2024, 1, 10))),
        QuotaConfig::new(QuotaType::Maintenance, 30_000, Some(date(2024, 2, 10))),
        QuotaConfig::new(QuotaType::Works, 50_000, Some(date(2024, 3, 1))),
        QuotaConfig::new(QuotaType::Maintenance, 30_000, Some(date(2025, 1, 10))),
        QuotaConfig::new(QuotaType::Works, 99_999, None).with_description("draft"),
    ];

    DuesSnapshot {
        lots: vec![marta, pedro, rosa, club],
        contributions,
        expenses,
        quotas,
    }
}

/// Writes the community fixture to a fresh data directory.
pub fn seeded_data_dir() -> PathBuf {
    let dir = temp_dir().join("data");
    let storage = JsonDuesStorage::new(dir.clone()).expect("create json storage");
    storage
        .save_snapshot(&community())
        .expect("seed community fixture");
    dir
}
