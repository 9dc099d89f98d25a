use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

const DEFAULT_DATA_DIR_NAME: &str = "LotDues";
/// Amounts are `u64` minor units, which hold at most 19 fractional digits.
pub const MAX_CURRENCY_PRECISION: u8 = 19;

/// Stores user-configurable report preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Overrides the currency's conventional number of minor units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_precision: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory holding the JSON collections. Defaults to `~/Documents/LotDues`.
    pub data_dir: Option<PathBuf>,

    /// `tracing` filter directive, e.g. `dues_engine=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            currency_precision: None,
            data_dir: None,
            log_filter: None,
        }
    }
}

impl Config {
    /// Rejects values that cannot be used to render amounts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.currency_precision {
            Some(precision) if precision > MAX_CURRENCY_PRECISION => {
                Err(ConfigError::Invalid(format!(
                    "currency_precision {precision} exceeds the maximum of {MAX_CURRENCY_PRECISION}"
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(DEFAULT_DATA_DIR_NAME)
    }
}
