//! Sidebar view
//!
//! Profile editor, total spending metric and the generated report

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::reports::Dashboard;
use crate::tui::app::{App, FocusedPanel, ProfileField};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, dashboard: &Dashboard, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_profile(frame, app, layout.profile);
    render_metric(frame, app, dashboard, layout.metric);
    render_report(frame, app, layout.report);
}

fn render_profile(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" 用户画像 ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let profile = app.session.profile();
    let mut lines = Vec::with_capacity(ProfileField::ALL.len() + 1);

    for field in ProfileField::ALL {
        let selected = is_focused && app.profile_field == field;
        let marker = if selected { "▶ " } else { "  " };
        let label_style = if selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let value = match field {
            ProfileField::Gender => format!("◀ {} ▶", profile.gender),
            ProfileField::Age => format!("◀ {} ▶", profile.age),
            ProfileField::Major => format!("◀ {} ▶", profile.major),
            ProfileField::Budgeting => checkbox(profile.uses_budgeting_tool).to_string(),
            ProfileField::Records => checkbox(profile.keeps_records).to_string(),
            ProfileField::GenerateReport => {
                lines.push(Line::from(""));
                let style = if selected {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                lines.push(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("[ {} ]", field.label()), style),
                ]));
                continue;
            }
        };

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}  ", field.label()), label_style),
            Span::styled(value, Style::default().fg(Color::Yellow)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn render_metric(frame: &mut Frame, app: &App, dashboard: &Dashboard, area: Rect) {
    let block = Block::default()
        .title(" 总消费 ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = if dashboard.is_empty() {
        Line::from(Span::styled("暂无记录", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::styled(
            dashboard
                .total
                .format_with_symbol(&app.settings.currency_symbol),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    };

    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_report(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" 分析报告 ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = match &app.report {
        Some(report) => {
            let mut lines = vec![Line::from(Span::styled(
                report.title(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))];
            lines.extend(report.to_lines().into_iter().skip(1).map(Line::from));
            lines
        }
        None => vec![Line::from(Span::styled(
            "选择「生成月光分析报告」或按 r",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
