//! # Settings
//!
//! User settings for the front ends, stored as JSON:
//!
//! ```json
//! {
//!   "export_dir": "exports",
//!   "export_format": "csv"
//! }
//! ```
//!
//! Missing fields fall back to their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{CalcError, CalcResult};
use crate::export::ExportFormat;
use crate::file_io::{read_to_string, write_atomic};

/// Default settings file name, looked up in the working directory
pub const SETTINGS_FILE_NAME: &str = "corbel_settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory where export files are written
    pub export_dir: PathBuf,

    /// Export file format
    pub export_format: ExportFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            export_dir: PathBuf::from("."),
            export_format: ExportFormat::Csv,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid settings in {}: {}", path.display(), e),
        })
    }

    /// Load settings, using defaults when the file does not exist.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: &Path) -> CalcResult<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Settings::default());
        }
        Self::load(path)
    }

    pub fn save(&self, path: &Path) -> CalcResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        write_atomic(path, json.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.export_dir, PathBuf::from("."));
        assert_eq!(settings.export_format, ExportFormat::Csv);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_or_default(&dir.path().join(SETTINGS_FILE_NAME)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, r#"{"export_format": "json"}"#).unwrap();

        let settings = Settings::load_or_default(&path).unwrap();
        assert_eq!(settings.export_format, ExportFormat::Json);
        assert_eq!(settings.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(&path, r#"{"export_format": "xlsx"}"#).unwrap();
        assert_eq!(Settings::load_or_default(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE_NAME);
        let settings = Settings {
            export_dir: PathBuf::from("exports"),
            export_format: ExportFormat::Json,
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }
}
