//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (profile editor, total, report)
    pub sidebar: Rect,
    /// Title and caption
    pub header: Rect,
    /// Records table
    pub records: Rect,
    /// Analysis tabs
    pub analysis: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        // Split into main area and status bar
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        // Split main area into sidebar and content
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(34), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),      // Title + caption
                Constraint::Percentage(40), // Records
                Constraint::Min(10),        // Analysis
            ])
            .split(horizontal[1]);

        Self {
            sidebar: horizontal[0],
            header: main[0],
            records: main[1],
            analysis: main[2],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    /// Profile editor
    pub profile: Rect,
    /// Total spending metric
    pub metric: Rect,
    /// Generated report
    pub report: Rect,
}

impl SidebarLayout {
    /// Calculate sidebar layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // Five fields, spacer, button, borders
                Constraint::Length(3), // Metric
                Constraint::Min(5),    // Report
            ])
            .split(area);

        Self {
            profile: chunks[0],
            metric: chunks[1],
            report: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Rect of `width` x `height` in the top-right corner of `r`
pub fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.sidebar.width, 34);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.header.x, 34);
        assert!(layout.records.y < layout.analysis.y);
    }

    #[test]
    fn test_top_right_rect_is_clamped() {
        let area = Rect::new(10, 5, 20, 4);
        let rect = top_right_rect(40, 6, area);
        assert_eq!(rect, Rect::new(10, 5, 20, 4));

        let rect = top_right_rect(8, 3, area);
        assert_eq!(rect, Rect::new(22, 5, 8, 3));
    }
}
