use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::interactive::app::{AppMode, DashboardApp, NoticeKind};

pub fn draw_footer(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let page = app.controller.page(app.issues());

    // Page-number window, current page bracketed
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for n in &page.window {
        if *n == page.current_page {
            spans.push(Span::styled(
                format!("[{}] ", n),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("{} ", n),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    if let Some(notice) = &app.notice {
        let (icon, color) = match notice.kind {
            NoticeKind::Success => ("✓", Color::Green),
            NoticeKind::Error => ("✗", Color::Red),
            NoticeKind::Info => ("ⓘ", Color::Blue),
        };
        spans.push(Span::styled(
            format!("  {} {}", icon, notice.message),
            Style::default().fg(color),
        ));
    }

    let hints = match app.mode {
        AppMode::Normal => " j/k select  h/l page  enter detail  f filter  s status  r refresh  q quit",
        AppMode::FilterPanel => " tab dimension  j/k value  space toggle  a/n/c all/none/clear  esc close",
        AppMode::Detail => " s change status  esc close",
        AppMode::StatusPick => " j/k select  enter apply  esc cancel",
    };

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
