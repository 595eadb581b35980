//! Status bar view
//!
//! Shows the record count, the total, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::reports::Dashboard;
use crate::tui::app::App;

const HINTS: &str = " a:添加  x:导出  r:报告  ?:帮助  q:退出 ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, dashboard: &Dashboard, area: Rect) {
    let mut spans = vec![
        Span::styled(" 记录: ", Style::default().fg(Color::White)),
        Span::styled(
            dashboard.record_count.to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" │ "),
        Span::styled("总消费: ", Style::default().fg(Color::White)),
        Span::styled(
            dashboard
                .total
                .format_with_symbol(&app.settings.currency_symbol),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Right-align the hints when there is room
    let left_width: usize = spans.iter().map(|s| s.width()).sum();
    let hints_width = Span::raw(HINTS).width();
    let padding = (area.width as usize)
        .saturating_sub(left_width)
        .saturating_sub(hints_width);

    spans.push(Span::raw(" ".repeat(padding.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
