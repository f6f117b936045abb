use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::formatting::{format_minutes, format_relative_time};
use crate::interactive::app::DashboardApp;
use crate::models::{Issue, IssueStatus};

fn field(label: &str, value: Span<'static>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<12}", label), Style::default().fg(Color::DarkGray)),
        value,
    ])
}

pub fn draw_detail(frame: &mut Frame, area: Rect, issue: &Issue) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", issue.id),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Hostel", Span::raw(issue.hostel.clone())),
        field("Category", Span::raw(issue.category.clone())),
        field(
            "Status",
            Span::styled(issue.status.as_str(), Style::default().fg(Color::Yellow)),
        ),
        field(
            "Priority",
            Span::raw(
                issue
                    .priority_label()
                    .map(|l| match issue.priority_score() {
                        Some(score) => format!("{} ({:.1})", l, score),
                        None => l.to_string(),
                    })
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ),
        field(
            "Severity",
            Span::raw(issue.severity_label().unwrap_or("-").to_string()),
        ),
        field(
            "Health",
            Span::raw(
                issue
                    .health
                    .as_ref()
                    .map(|h| {
                        format!(
                            "{} ({})",
                            h.label.as_deref().unwrap_or("-"),
                            h.score.map(|s| s.round() as i64).unwrap_or(0)
                        )
                    })
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ),
    ];

    if let Some(sla) = &issue.sla {
        let clock = sla
            .time_remaining_minutes
            .map(|m| {
                if issue.is_breached() {
                    format_minutes(-m.abs())
                } else {
                    format_minutes(m)
                }
            })
            .unwrap_or_else(|| "-".to_string());
        lines.push(field(
            "SLA",
            Span::styled(
                format!("{} {}", sla.risk.as_deref().unwrap_or("-"), clock),
                Style::default().fg(if issue.is_breached() {
                    Color::Red
                } else {
                    Color::White
                }),
            ),
        ));
    }

    if let Some(complaints) = &issue.complaints {
        lines.push(field(
            "Complaints",
            Span::raw(format!(
                "{} total / {} unique / {} duplicates",
                complaints.total.unwrap_or(0),
                complaints.unique.unwrap_or(0),
                complaints.duplicates.unwrap_or(0)
            )),
        ));
    }

    if let Some(created) = issue.created_at() {
        lines.push(field(
            "Created",
            Span::styled(
                format_relative_time(created),
                Style::default().fg(Color::DarkGray),
            ),
        ));
    }
    if let Some(updated) = issue.last_updated() {
        lines.push(field(
            "Updated",
            Span::styled(
                format_relative_time(updated),
                Style::default().fg(Color::DarkGray),
            ),
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " s change status   esc close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Issue ")
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn draw_status_picker(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let mut lines = vec![Line::from("")];

    for (n, status) in IssueStatus::ALL.iter().enumerate() {
        let mut style = Style::default();
        if n == app.status_option_index {
            style = style
                .bg(Color::Rgb(40, 44, 60))
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(Span::styled(
            format!("  {}", status.as_str()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " enter apply   esc cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Set status ")
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
