//! Filesystem-backed JSON implementation of [`DuesStorage`].
//!
//! A data directory holds one pretty-printed JSON array per collection.
//! Absent files read as empty collections.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dues_core::{
    storage::{DuesSnapshot, DuesStorage},
    CoreError,
};
use dues_domain::{Contribution, Expense, Lot, QuotaConfig};
use serde::{de::DeserializeOwned, Serialize};

pub const LOTS_FILE: &str = "lots.json";
pub const CONTRIBUTIONS_FILE: &str = "contributions.json";
pub const EXPENSES_FILE: &str = "expenses.json";
pub const QUOTAS_FILE: &str = "quotas.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone)]
pub struct JsonDuesStorage {
    data_dir: PathBuf,
}

impl JsonDuesStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn collection_path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    pub fn save_lots(&self, lots: &[Lot]) -> Result<(), CoreError> {
        self.write_collection(LOTS_FILE, lots)
    }

    pub fn save_contributions(&self, contributions: &[Contribution]) -> Result<(), CoreError> {
        self.write_collection(CONTRIBUTIONS_FILE, contributions)
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> Result<(), CoreError> {
        self.write_collection(EXPENSES_FILE, expenses)
    }

    pub fn save_quota_configs(&self, quotas: &[QuotaConfig]) -> Result<(), CoreError> {
        self.write_collection(QUOTAS_FILE, quotas)
    }

    /// Writes every collection of `snapshot`, replacing existing files.
    pub fn save_snapshot(&self, snapshot: &DuesSnapshot) -> Result<(), CoreError> {
        self.save_lots(&snapshot.lots)?;
        self.save_contributions(&snapshot.contributions)?;
        self.save_expenses(&snapshot.expenses)?;
        self.save_quota_configs(&snapshot.quotas)
    }

    fn read_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, CoreError> {
        let path = self.collection_path(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&data)
            .map_err(|err| CoreError::Serde(format!("{}: {}", path.display(), err)))
    }

    fn write_collection<T: Serialize>(&self, file: &str, items: &[T]) -> Result<(), CoreError> {
        let path = self.collection_path(file);
        let json = serde_json::to_string_pretty(items)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl DuesStorage for JsonDuesStorage {
    fn list_lots(&self) -> Result<Vec<Lot>, CoreError> {
        self.read_collection(LOTS_FILE)
    }

    fn list_contributions(&self) -> Result<Vec<Contribution>, CoreError> {
        self.read_collection(CONTRIBUTIONS_FILE)
    }

    fn list_expenses(&self) -> Result<Vec<Expense>, CoreError> {
        self.read_collection(EXPENSES_FILE)
    }

    fn list_quota_configs(&self) -> Result<Vec<QuotaConfig>, CoreError> {
        self.read_collection(QUOTAS_FILE)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
