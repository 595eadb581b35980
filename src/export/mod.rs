//! Export module for Moonlight Ledger
//!
//! Provides the CSV serialization of the ledger and the downloadable
//! artifact wrapping it. The CSV reader is the inverse used by
//! `moonlight summary` to load a previous export into a fresh session.

pub mod artifact;
pub mod csv;

pub use self::artifact::{export_file_name, ExportArtifact, CSV_MIME_TYPE};
pub use self::csv::{parse_csv, read_records, records_to_csv, write_records, CSV_HEADERS};
