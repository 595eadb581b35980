//! Analysis view
//!
//! Three tabs over the dashboard snapshot: the daily trend chart, the
//! category breakdown and the prediction placeholder.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Dataset, GraphType,
        Paragraph, Row, Table, Tabs,
    },
    Frame,
};

use crate::reports::analysis::{PREDICTION_NOTE, PREDICTION_STATUS};
use crate::reports::{CategoryBreakdown, Dashboard, DailyTrend};
use crate::tui::app::{AnalysisTab, App, FocusedPanel};

/// Render the analysis panel
pub fn render(frame: &mut Frame, app: &App, dashboard: &Dashboard, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Analysis;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" 消费分析 ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let tabs = Tabs::new(AnalysisTab::ALL.iter().map(|t| t.title()))
        .select(app.analysis_tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" │ ");
    frame.render_widget(tabs, chunks[0]);

    let content = chunks[1];
    match app.analysis_tab {
        AnalysisTab::Trend => render_trend(frame, &dashboard.daily_trend, content),
        AnalysisTab::Category => render_breakdown(
            frame,
            &dashboard.category_breakdown,
            &app.settings.currency_symbol,
            content,
        ),
        AnalysisTab::Prediction => render_prediction(frame, content),
    }
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new("暂无数据，添加记录后显示分析。")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

fn render_trend(frame: &mut Frame, trend: &DailyTrend, area: Rect) {
    let (Some(first), Some(last)) = (trend.first_date(), trend.last_date()) else {
        render_empty(frame, area);
        return;
    };

    let points = trend.chart_points();
    let datasets = vec![
        Dataset::default()
            .name("每日消费")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&points),
    ];

    let x_bounds = trend.x_bounds();
    let y_bounds = trend.y_bounds();

    let chart = Chart::new(datasets)
        .block(Block::default().title(Line::from("每日消费趋势").centered()))
        .x_axis(
            Axis::default()
                .title("日期")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(vec![
                    Span::raw(first.format("%m-%d").to_string()),
                    Span::raw(last.format("%m-%d").to_string()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("金额")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", y_bounds[1] / 2.0)),
                    Span::raw(format!("{:.0}", y_bounds[1])),
                ]),
        );

    frame.render_widget(chart, area);
}

fn render_breakdown(
    frame: &mut Frame,
    breakdown: &CategoryBreakdown,
    currency_symbol: &str,
    area: Rect,
) {
    if breakdown.is_empty() {
        render_empty(frame, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("类别").style(bold),
        Cell::from("金额").style(bold),
        Cell::from("占比").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow));

    let rows: Vec<Row> = breakdown
        .slices
        .iter()
        .map(|slice| {
            Row::new(vec![
                Cell::from(slice.category.label()),
                Cell::from(slice.total.format_with_symbol(currency_symbol)),
                Cell::from(slice.percentage_label()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().title("消费类别占比"));
    frame.render_widget(table, columns[0]);

    let bars: Vec<Bar> = breakdown
        .slices
        .iter()
        .map(|slice| {
            Bar::default()
                .value(slice.total.cents().max(0) as u64)
                .label(Line::from(slice.category.label()))
                .text_value(slice.percentage_label())
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(chart, columns[1]);
}

fn render_prediction(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("⚠ {}", PREDICTION_STATUS),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(PREDICTION_NOTE),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
