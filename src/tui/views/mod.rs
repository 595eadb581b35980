//! TUI Views module
//!
//! Each frame builds one dashboard snapshot from the session and hands it
//! to the sidebar, records, analysis and status bar views.

pub mod analysis;
pub mod records;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{top_right_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let dashboard = app.session.dashboard();

    sidebar::render(frame, app, &dashboard, layout.sidebar);
    records::render_header(frame, layout.header);
    records::render(frame, app, &dashboard, layout.records);
    analysis::render(frame, app, &dashboard, layout.analysis);
    status_bar::render(frame, app, &dashboard, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddRecord => dialogs::transaction::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = top_right_rect(40, 4, layout.records);
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}
