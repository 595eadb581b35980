//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{today, ActiveDialog, AnalysisTab, App, FocusedPanel, InputMode};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        // Editing only happens inside the record dialog
        InputMode::Editing => {
            app.input_mode = InputMode::Normal;
            Ok(())
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.open_dialog(ActiveDialog::AddRecord);
            return Ok(());
        }
        KeyCode::Char('x') => {
            app.export(today());
            return Ok(());
        }
        KeyCode::Char('r') => {
            app.generate_report();
            return Ok(());
        }
        KeyCode::Tab => {
            app.next_panel();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.prev_panel();
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.analysis_tab = AnalysisTab::Trend;
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.analysis_tab = AnalysisTab::Category;
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.analysis_tab = AnalysisTab::Prediction;
            return Ok(());
        }
        KeyCode::Esc => {
            app.clear_status();
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Records => handle_records_key(app, key),
        FocusedPanel::Analysis => handle_analysis_key(app, key),
    }

    Ok(())
}

/// Handle keys when the profile editor is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => {
            app.adjust_profile(true)
        }
        KeyCode::Char('h') | KeyCode::Left => app.adjust_profile(false),
        _ => {}
    }
}

/// Handle keys when the records table is focused
fn handle_records_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_record_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_record_index = app.session.ledger().len().saturating_sub(1);
        }
        _ => {}
    }
}

/// Handle keys when the analysis tabs are focused
fn handle_analysis_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => app.analysis_tab = app.analysis_tab.next(),
        KeyCode::Char('h') | KeyCode::Left => app.analysis_tab = app.analysis_tab.prev(),
        _ => {}
    }
}

/// Handle keys when a dialog is active
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::AddRecord => {
            dialogs::transaction::handle_key(app, key);
        }
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MoonlightPaths, Settings};
    use crate::tui::app::ProfileField;
    use std::path::PathBuf;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn paths() -> MoonlightPaths {
        MoonlightPaths::with_base_dir(PathBuf::from("/tmp/moonlight-handler-test"))
    }

    #[test]
    fn test_quit() {
        let settings = Settings::default();
        let paths = paths();
        let mut app = App::new(&settings, &paths);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_dialog_captures_keys() {
        let settings = Settings::default();
        let paths = paths();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddRecord);
        assert_eq!(app.input_mode, InputMode::Editing);

        // 'q' is typed into the form, not treated as quit
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let settings = Settings::default();
        let paths = paths();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('z'));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_sidebar_and_tab_keys() {
        let settings = Settings::default();
        let paths = paths();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.profile_field, ProfileField::Age);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.profile().age, 21);

        press(&mut app, KeyCode::Char('r'));
        assert!(app.report.is_some());

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.analysis_tab, AnalysisTab::Category);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_panel, FocusedPanel::Analysis);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.analysis_tab, AnalysisTab::Prediction);
    }
}
