use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{AppMode, DashboardApp};
use super::panels;

pub fn draw(frame: &mut Frame, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // KPI header
            Constraint::Min(5),    // queue
            Constraint::Length(2), // notice + key hints
        ])
        .split(frame.size());

    panels::header::draw_header(frame, chunks[0], app);

    if app.mode == AppMode::FilterPanel {
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(chunks[1]);
        panels::list::draw_list(frame, main[0], app);
        panels::filters::draw_filter_panel(frame, main[1], app);
    } else {
        panels::list::draw_list(frame, chunks[1], app);
    }

    panels::footer::draw_footer(frame, chunks[2], app);

    match app.mode {
        AppMode::Detail => {
            if let Some(issue) = app.selected_issue() {
                let area = centered_rect(70, 60, frame.size());
                frame.render_widget(Clear, area);
                panels::detail::draw_detail(frame, area, &issue);
            }
        }
        AppMode::StatusPick => {
            let area = centered_rect(30, 30, frame.size());
            frame.render_widget(Clear, area);
            panels::detail::draw_status_picker(frame, area, app);
        }
        _ => {}
    }
}

/// Full-screen takeover for the initial load only; refreshes keep the last
/// view and show the inline indicator instead.
pub fn draw_loading(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("\n\n  Loading dashboard…")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" Queue "));
    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
