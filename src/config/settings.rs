//! User settings for Moonlight Ledger
//!
//! Display preferences, the export directory, the log filter and the
//! profile the sidebar starts with. Settings are read from `config.json`;
//! a missing file means defaults.

use std::fmt::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::MoonlightPaths;
use crate::error::LedgerError;
use crate::models::money::DEFAULT_CURRENCY_SYMBOL;
use crate::models::Profile;

/// User settings for Moonlight Ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in tables and totals
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format) for tables
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Where exports are written; the working directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// tracing filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Profile preselected in the sidebar
    #[serde(default)]
    pub default_profile: Profile,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_filter() -> String {
    "moonlight_ledger=info".to_string()
}

/// Whether `format` renders a calendar date without error
///
/// Unknown directives and time-of-day fields both fail when applied to a
/// `NaiveDate`, and `to_string()` would panic on them.
fn formats_dates(format: &str) -> bool {
    let Some(sample) = NaiveDate::from_ymd_opt(2024, 1, 5) else {
        return false;
    };
    let mut out = String::new();
    write!(out, "{}", sample.format(format)).is_ok()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            export_dir: None,
            log_filter: default_log_filter(),
            default_profile: Profile::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &MoonlightPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;
            settings.default_profile = settings.default_profile.normalized();
            if !formats_dates(&settings.date_format) {
                settings.date_format = default_date_format();
            }

            Ok(settings)
        } else {
            // Don't save - defaults are fine until the user edits the file
            Ok(Settings::default())
        }
    }

    /// Directory exports are written to
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Major};
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "¥");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.log_filter, "moonlight_ledger=info");
        assert_eq!(settings.export_dir(), PathBuf::from("."));
        assert_eq!(settings.default_profile, Profile::default());
    }

    #[test]
    fn test_missing_file_gives_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoonlightPaths::with_base_dir(temp_dir.path().join("cfg"));

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_load_written_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoonlightPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.export_dir = Some(temp_dir.path().join("exports"));
        settings.default_profile = Profile::new(Gender::Female, 22, Major::Arts).with_habits(true, false);
        std::fs::write(
            paths.settings_file(),
            serde_json::to_string_pretty(&settings).unwrap(),
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.export_dir(), temp_dir.path().join("exports"));
        assert_eq!(loaded.default_profile.gender, Gender::Female);
        assert!(loaded.default_profile.uses_budgeting_tool);
    }

    #[test]
    fn test_partial_file_uses_defaults_and_clamps_age() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoonlightPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"currency_symbol": "RMB ", "default_profile": {"age": 7, "major": "business"}}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "RMB ");
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert_eq!(loaded.default_profile.age, 18);
        assert_eq!(loaded.default_profile.major, Major::Business);
    }

    #[test]
    fn test_unusable_date_format_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoonlightPaths::with_base_dir(temp_dir.path().to_path_buf());

        for format in ["%Q", "%Y-%m-%d %H:%M", "%"] {
            std::fs::write(
                paths.settings_file(),
                serde_json::json!({ "date_format": format }).to_string(),
            )
            .unwrap();
            let loaded = Settings::load_or_create(&paths).unwrap();
            assert_eq!(loaded.date_format, "%Y-%m-%d", "format {:?}", format);
        }

        std::fs::write(paths.settings_file(), r#"{"date_format": "%m/%d"}"#).unwrap();
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.date_format, "%m/%d");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoonlightPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
