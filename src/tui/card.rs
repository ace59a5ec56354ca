//! Employee card rendering

use crate::employee::Employee;
use crate::tui::colors;
use chrono::Locale;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 6;

/// The detail lines of a card, in display order
pub fn card_lines(employee: &Employee, locale: Locale) -> Vec<Line<'static>> {
    let label = Style::default().fg(colors::MUTED).add_modifier(Modifier::BOLD);
    let department = employee.department_label().to_string();
    let department_color = colors::color_for_department(&department);

    vec![
        Line::from(vec![
            Span::styled("Email:           ", label),
            Span::raw(employee.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("Department:      ", label),
            Span::styled(department, Style::default().fg(department_color)),
        ]),
        Line::from(vec![
            Span::styled("Designation:     ", label),
            Span::raw(employee.designation_label().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Date of Joining: ", label),
            Span::raw(employee.joining_date_label(locale)),
        ]),
    ]
}

pub fn draw_card(
    frame: &mut Frame,
    employee: &Employee,
    locale: Locale,
    selected: bool,
    area: Rect,
) {
    let (border_style, bg) = if selected {
        (Style::default().fg(colors::ACCENT), colors::SELECTED_BG)
    } else {
        (Style::default().fg(colors::MUTED), Color::Reset)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", employee.name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(card_lines(employee, locale))
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, area);
}
