//! Records view
//!
//! The title header and the table of records, newest first

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::reports::analysis::RESEARCH_CAPTION;
use crate::reports::Dashboard;
use crate::tui::app::{App, FocusedPanel};

/// Render the title and research caption
pub fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "💰 月光族记账本",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            RESEARCH_CAPTION,
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the records table
pub fn render(frame: &mut Frame, app: &App, dashboard: &Dashboard, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Records;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" 消费记录 ({}) ", dashboard.record_count))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if dashboard.is_empty() {
        let text = Paragraph::new("暂无记录，按 a 添加。")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(12), // Amount
        Constraint::Length(6),  // Category
        Constraint::Length(10), // Payment
        Constraint::Min(10),    // Note
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("日期").style(bold),
        Cell::from("金额").style(bold),
        Cell::from("类别").style(bold),
        Cell::from("支付方式").style(bold),
        Cell::from("备注").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = &app.settings.currency_symbol;
    let date_format = &app.settings.date_format;
    let rows: Vec<Row> = dashboard
        .records
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.date.format(date_format).to_string()),
                Cell::from(record.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(Color::Red)),
                Cell::from(record.category.label()),
                Cell::from(record.payment_method.label()),
                Cell::from(record.note.clone()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        let last = dashboard.records.len().saturating_sub(1);
        state.select(Some(app.selected_record_index.min(last)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
