//! Terminal User Interface module
//!
//! The interactive dashboard: a profile editor with the on-demand analysis
//! report in the sidebar, the record table, and the analysis tabs, plus a
//! modal form for adding records.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
