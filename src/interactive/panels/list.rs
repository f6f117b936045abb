use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::formatting::truncate;
use crate::interactive::app::DashboardApp;
use crate::interactive::ui::draw_loading;
use crate::models::{Issue, IssueStatus};

fn status_color(status: IssueStatus) -> Color {
    match status {
        IssueStatus::Open => Color::Blue,
        IssueStatus::InProgress => Color::Yellow,
        IssueStatus::Resolved => Color::Green,
        IssueStatus::Reopened => Color::Red,
    }
}

fn label_color(label: Option<&str>) -> Color {
    match label {
        Some("CRITICAL") | Some("SEV-1") | Some("BREACHING") | Some("EMERGENCY") => Color::Red,
        Some("HIGH") | Some("SEV-2") | Some("WARNING") => Color::Yellow,
        Some("HEALTHY") | Some("OK") => Color::Green,
        Some("MONITOR") => Color::Cyan,
        Some(_) => Color::White,
        None => Color::DarkGray,
    }
}

pub fn draw_list(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    if app.orchestrator.is_loading() {
        draw_loading(frame, area);
        return;
    }

    if let Some(message) = app.orchestrator.error() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  ✗ {}", message),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "  Press r to retry.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Queue "));
        frame.render_widget(paragraph, area);
        return;
    }

    let page = app.controller.page(app.issues());

    let title = format!(
        " Queue — page {}/{} ({} matching) ",
        page.current_page, page.total_pages, page.filtered_count
    );

    if page.items.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No issues on this page.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        "ID", "Hostel", "Category", "Status", "Priority", "Sev", "Health", "SLA", "Compl",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = page
        .items
        .iter()
        .enumerate()
        .map(|(n, issue)| issue_row(n == app.selected_index, issue))
        .collect();

    let widths = [
        ratatui::layout::Constraint::Length(13),
        ratatui::layout::Constraint::Length(13),
        ratatui::layout::Constraint::Length(13),
        ratatui::layout::Constraint::Length(12),
        ratatui::layout::Constraint::Length(9),
        ratatui::layout::Constraint::Length(6),
        ratatui::layout::Constraint::Length(10),
        ratatui::layout::Constraint::Length(10),
        ratatui::layout::Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}

fn issue_row<'a>(selected: bool, issue: &'a Issue) -> Row<'a> {
    let base = if selected {
        Style::default()
            .bg(Color::Rgb(40, 44, 60))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Row::new(vec![
        Span::styled(truncate(&issue.id, 13), Style::default().fg(Color::Cyan)),
        Span::raw(truncate(&issue.hostel, 13)),
        Span::raw(truncate(&issue.category, 13)),
        Span::styled(
            issue.status.as_str(),
            Style::default().fg(status_color(issue.status)),
        ),
        Span::styled(
            issue.priority_label().unwrap_or("-").to_string(),
            Style::default().fg(label_color(issue.priority_label())),
        ),
        Span::styled(
            issue.severity_label().unwrap_or("-").to_string(),
            Style::default().fg(label_color(issue.severity_label())),
        ),
        Span::styled(
            issue.health_label().unwrap_or("-").to_string(),
            Style::default().fg(label_color(issue.health_label())),
        ),
        Span::styled(
            issue.sla_risk().unwrap_or("-").to_string(),
            Style::default().fg(label_color(issue.sla_risk())),
        ),
        Span::raw(issue.complaint_total().to_string()),
    ])
    .style(base)
}
