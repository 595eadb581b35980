//! One interactive session
//!
//! A session owns the ledger and the profile for as long as the user keeps
//! the dashboard open. Nothing outlives it; a new session starts empty.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::LedgerResult;
use crate::export::ExportArtifact;
use crate::ledger::TransactionLedger;
use crate::models::{Profile, Transaction};
use crate::reports::{AnalysisReport, Dashboard};

/// Acknowledgment shown after a successful submission
pub const RECORD_ADDED_MESSAGE: &str = "记录已添加！";

#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: TransactionLedger,
    profile: Profile,
}

impl Session {
    /// Start a session with an empty ledger
    pub fn new(profile: Profile) -> Self {
        Self {
            ledger: TransactionLedger::new(),
            profile: profile.normalized(),
        }
    }

    /// Start a session around an existing ledger
    pub fn with_ledger(ledger: TransactionLedger, profile: Profile) -> Self {
        Self {
            ledger,
            profile: profile.normalized(),
        }
    }

    pub fn ledger(&self) -> &TransactionLedger {
        &self.ledger
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = profile.normalized();
    }

    /// Submit a record from the entry form
    pub fn submit(&mut self, record: Transaction) -> LedgerResult<&Transaction> {
        match self.ledger.add(record) {
            Ok(stored) => {
                info!(
                    date = %stored.date,
                    amount = %stored.amount,
                    category = stored.category.key(),
                    "record added"
                );
                Ok(stored)
            }
            Err(err) => {
                warn!(error = %err, "record rejected");
                Err(err)
            }
        }
    }

    pub fn analysis_report(&self) -> AnalysisReport {
        let report = AnalysisReport::generate(&self.profile);
        debug!(recommendation = ?report.recommendation, "analysis report generated");
        report
    }

    /// Snapshot for the renderers
    pub fn dashboard(&self) -> Dashboard {
        Dashboard::build(&self.ledger)
    }

    /// CSV export named after `exported_on`
    pub fn export_artifact(&self, exported_on: NaiveDate) -> LedgerResult<ExportArtifact> {
        let artifact = ExportArtifact::from_ledger(&self.ledger, exported_on)?;
        info!(
            file = %artifact.file_name,
            records = self.ledger.len(),
            bytes = artifact.body.len(),
            "export prepared"
        );
        Ok(artifact)
    }
}
