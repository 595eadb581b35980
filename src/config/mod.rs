//! Configuration module for Moonlight Ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings loaded from `config.json`

pub mod paths;
pub mod settings;

pub use paths::MoonlightPaths;
pub use settings::Settings;
