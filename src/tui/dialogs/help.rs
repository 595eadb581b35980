//! Help dialog
//!
//! Shows keyboard shortcuts for the focused panel

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" 帮助 ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.focused_panel))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for the focused panel
fn help_lines(panel: FocusedPanel) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("全局"),
        Line::from(""),
        key_line("q", "退出"),
        key_line("?", "显示帮助"),
        key_line("a/n", "添加消费记录"),
        key_line("x", "导出消费记录 (CSV)"),
        key_line("r", "生成月光分析报告"),
        key_line("Tab", "切换面板"),
        key_line("1/2/3", "趋势 / 类别 / 预测"),
        Line::from(""),
    ];

    match panel {
        FocusedPanel::Sidebar => {
            lines.push(heading("用户画像"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "选择项目"));
            lines.push(key_line("h/l", "修改选项 / 年龄"));
            lines.push(key_line("Space", "切换勾选"));
            lines.push(key_line("Enter", "生成报告"));
        }
        FocusedPanel::Records => {
            lines.push(heading("消费记录"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "上下移动"));
            lines.push(key_line("g/G", "跳到顶部 / 底部"));
        }
        FocusedPanel::Analysis => {
            lines.push(heading("消费分析"));
            lines.push(Line::from(""));
            lines.push(key_line("h/l", "切换标签页"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "按任意键关闭",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>8}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
