use chrono::NaiveDate;
use dues_core::{
    storage::{DuesSnapshot, DuesStorage},
    CoreError,
};
use dues_domain::{Contribution, Expense, ExpenseKind, FundType, Lot, QuotaConfig, QuotaType};
use dues_storage_json::{JsonDuesStorage, LOTS_FILE, QUOTAS_FILE};
use std::fs;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn empty_data_dir_reads_as_empty_collections() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonDuesStorage::new(dir.path().join("data")).expect("create storage");

    assert!(storage.list_lots().expect("lots").is_empty());
    assert!(storage.list_contributions().expect("contributions").is_empty());
    assert!(storage.list_expenses().expect("expenses").is_empty());
    assert!(storage.list_quota_configs().expect("quotas").is_empty());
}

#[test]
fn saved_snapshot_is_read_back() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonDuesStorage::new(dir.path().to_path_buf()).expect("create storage");

    let lot = Lot::new("14", "Elena").with_initial_works_debt(25_000);
    let snapshot = DuesSnapshot {
        contributions: vec![Contribution::new(
            lot.id,
            FundType::Works,
            10_000,
            date(2024, 2, 1),
        )],
        expenses: vec![Expense::new(ExpenseKind::Maintenance, 3_000, date(2024, 2, 3))
            .with_category("gardening")],
        quotas: vec![QuotaConfig::new(QuotaType::Works, 15_000, None)],
        lots: vec![lot.clone()],
    };

    storage.save_snapshot(&snapshot).expect("save snapshot");
    let loaded = DuesSnapshot::read(&storage).expect("read snapshot");

    assert_eq!(loaded.lots, vec![lot]);
    assert_eq!(loaded.contributions, snapshot.contributions);
    assert_eq!(loaded.expenses, snapshot.expenses);
    assert_eq!(loaded.quotas, snapshot.quotas);
    assert!(!storage.collection_path("lots.json.tmp").exists());
}

#[test]
fn hand_written_collections_use_wire_names() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonDuesStorage::new(dir.path().to_path_buf()).expect("create storage");
    fs::write(
        storage.collection_path(QUOTAS_FILE),
        r#"[
            {"id":"6f1c1f0e-9d7e-4a51-8a0b-1b2b3c4d5e6f","quota_type":"maintenance","amount":30000,"due_date":"2024-01-10","description":"January"},
            {"id":"7f1c1f0e-9d7e-4a51-8a0b-1b2b3c4d5e6f","quota_type":"works","amount":50000}
        ]"#,
    )
    .expect("write quotas");

    let quotas = storage.list_quota_configs().expect("quotas");

    assert_eq!(quotas.len(), 2);
    assert_eq!(quotas[0].due_date, Some(date(2024, 1, 10)));
    assert_eq!(quotas[1].quota_type, QuotaType::Works);
    assert_eq!(quotas[1].due_date, None);
}

#[test]
fn malformed_collection_surfaces_serde_error() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonDuesStorage::new(dir.path().to_path_buf()).expect("create storage");
    fs::write(storage.collection_path(LOTS_FILE), "[{\"number\": 1}]").expect("write lots");

    let err = storage.list_lots().expect_err("malformed lots");

    match err {
        CoreError::Serde(message) => assert!(message.contains(LOTS_FILE)),
        other => panic!("unexpected error: {other}"),
    }
}
