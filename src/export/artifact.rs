//! Downloadable export artifact
//!
//! Bundles the CSV body with the file name and MIME type the dashboard
//! offers for download, and writes it into a directory on request.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::TransactionLedger;

/// MIME type of the exported file
pub const CSV_MIME_TYPE: &str = "text/csv";

/// File name prefix, followed by `_<YYYYMMDD>.csv`
pub const EXPORT_FILE_PREFIX: &str = "消费记录";

/// A CSV export ready to hand to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// e.g. `消费记录_20240105.csv`
    pub file_name: String,
    /// Always `text/csv`
    pub mime_type: &'static str,
    /// UTF-8 encoded CSV
    pub body: Vec<u8>,
}

impl ExportArtifact {
    /// Build the artifact for a ledger, named after the export date
    pub fn from_ledger(ledger: &TransactionLedger, exported_on: NaiveDate) -> LedgerResult<Self> {
        let body = ledger.export_csv()?.into_bytes();
        Ok(Self {
            file_name: export_file_name(exported_on),
            mime_type: CSV_MIME_TYPE,
            body,
        })
    }

    /// Body as text
    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap_or_default()
    }

    /// Write the artifact into `dir`, creating the directory if needed
    ///
    /// An existing file with the same name is overwritten.
    pub fn write_to_dir(&self, dir: &Path) -> LedgerResult<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| {
            LedgerError::Export(format!(
                "Failed to create export directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let path = dir.join(&self.file_name);
        fs::write(&path, &self.body).map_err(|e| {
            LedgerError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(path)
    }
}

/// `消费记录_<YYYYMMDD>.csv`
pub fn export_file_name(exported_on: NaiveDate) -> String {
    format!(
        "{}_{}.csv",
        EXPORT_FILE_PREFIX,
        exported_on.format("%Y%m%d")
    )
}
