use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::interactive::app::DashboardApp;

/// KPI strip: four counters derived from the full raw list, independent of
/// any filters, plus the trend deltas the server supplied.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let summary = app.orchestrator.summary();

    let title_line = {
        let mut spans = vec![Span::styled(
            " Hostel Desk ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];
        if app.orchestrator.is_refreshing() {
            spans.push(Span::styled("⟳ refreshing…", Style::default().fg(Color::Yellow)));
        }
        if !app.controller.filters().is_empty() {
            spans.push(Span::styled(
                format!("  filters:{}", app.controller.filters().selection_count()),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height.saturating_sub(1),
        });

    frame.render_widget(
        Paragraph::new(title_line).style(Style::default().bg(Color::Rgb(20, 22, 30))),
        Rect { height: 1, ..area },
    );

    draw_kpi(
        frame,
        columns[0],
        "Active",
        summary.active_issues,
        None,
        Color::White,
    );
    draw_kpi(
        frame,
        columns[1],
        "Critical",
        summary.critical_issues,
        Some(summary.trend.critical_change),
        Color::Red,
    );
    draw_kpi(
        frame,
        columns[2],
        "SLA risk",
        summary.sla_risk_issues,
        None,
        Color::Yellow,
    );
    draw_kpi(
        frame,
        columns[3],
        "Complaints",
        summary.complaints_today,
        Some(summary.trend.complaints_change),
        Color::Cyan,
    );
}

fn draw_kpi(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: u64,
    change: Option<i64>,
    color: Color,
) {
    let trend = match change {
        Some(c) if c > 0 => Span::styled(format!(" ▲+{}", c), Style::default().fg(Color::Red)),
        Some(c) if c < 0 => Span::styled(format!(" ▼{}", c), Style::default().fg(Color::Green)),
        Some(_) => Span::styled(" —", Style::default().fg(Color::DarkGray)),
        None => Span::raw(""),
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", label),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(
                format!(" {}", value),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            trend,
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
