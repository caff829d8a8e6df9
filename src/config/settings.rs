//! User settings for the expense ledger
//!
//! Manages preferences that outlive a session: the default currency, where
//! exports go, how dates are shown and whether operations are audited.
//! Expense records themselves are never stored here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::codec::validate_date_format;
use crate::error::LedgerError;
use crate::models::Currency;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency new ledgers start in
    #[serde(default)]
    pub currency: Currency,

    /// File offered by the export and import prompts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_export_file: Option<PathBuf>,

    /// Date format for on-screen tables (strftime format)
    #[serde(default = "default_display_date_format")]
    pub display_date_format: String,

    /// Whether add/edit/delete/transfer operations are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_display_date_format() -> String {
    "%Y/%m/%d".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: Currency::default(),
            default_export_file: None,
            display_date_format: default_display_date_format(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Config(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        validate_date_format(&settings.display_date_format).map_err(|_| {
            LedgerError::Config(format!(
                "Invalid display_date_format '{}' in {}",
                settings.display_date_format,
                settings_path.display()
            ))
        })?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Config(format!("Failed to write settings file: {}", e)))
    }

    /// The export file to suggest, falling back to the data directory
    pub fn export_file(&self, paths: &LedgerPaths) -> PathBuf {
        self.default_export_file
            .clone()
            .unwrap_or_else(|| paths.default_export_file())
    }
}
