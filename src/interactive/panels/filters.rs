use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::app::DashboardApp;
use crate::view::filters::Dimension;

/// Side panel listing the current dimension's data-driven option set.
/// Options come from the live issue list; a vanished value stops being
/// offered even while a sticky selection for it remains.
pub fn draw_filter_panel(frame: &mut Frame, area: Rect, app: &DashboardApp) {
    let dimension = app.current_dimension();

    let tabs: Vec<Span> = Dimension::ALL
        .iter()
        .map(|d| {
            if *d == dimension {
                Span::styled(
                    format!(" {} ", d.title()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(format!(" {} ", d.title()), Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let mut lines = vec![Line::from(tabs), Line::from("")];

    let values = app.filter_panel_values();
    if values.is_empty() {
        lines.push(Line::from(Span::styled(
            "  no values in data",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (n, value) in values.iter().enumerate() {
        let selected = app.controller.filters().contains(dimension, value);
        let marker = if selected { "[x]" } else { "[ ]" };
        let mut style = Style::default();
        if n == app.filter_value_index {
            style = style.bg(Color::Rgb(40, 44, 60)).add_modifier(Modifier::BOLD);
        }
        if selected {
            style = style.fg(Color::Cyan);
        }
        lines.push(Line::from(Span::styled(
            format!(" {} {}", marker, value),
            style,
        )));
    }

    // Sticky selections whose value vanished from the data: still admitted,
    // no longer offered. Shown dimmed so they stay removable.
    for value in app.controller.filters().selected_values(dimension) {
        if !values.contains(&value) {
            lines.push(Line::from(Span::styled(
                format!(" [x] {} (gone)", value),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " space toggle  a all  n none  c clear",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filters ")
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
