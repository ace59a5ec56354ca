use crate::tui::app::App;
use crate::tui::card::{self, CARD_HEIGHT};
use crate::tui::colors;
use crate::tui::search::PLACEHOLDER;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const SEARCH_PREFIX: &str = " > ";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search bar
            Constraint::Min(CARD_HEIGHT), // Cards
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title(frame, chunks[0]);
    draw_search_bar(frame, app, chunks[1]);
    draw_cards(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    if app.search.focused {
        let query = app.coordinator.search_text();
        app.search.clamp_cursor(query);
        frame.set_cursor_position(cursor_position(
            chunks[1],
            &query[..app.search.cursor_pos],
        ));
    }
}

/// Terminal cursor inside the search box, kept left of its right border.
fn cursor_position(search_area: Rect, before_cursor: &str) -> Position {
    let columns = |text: &str| u16::try_from(text.width()).unwrap_or(u16::MAX);
    // Border (1) + prefix + text before the cursor
    let x = search_area
        .x
        .saturating_add(1)
        .saturating_add(columns(SEARCH_PREFIX))
        .saturating_add(columns(before_cursor));
    Position::new(
        x.min(search_area.right().saturating_sub(2)),
        search_area.y.saturating_add(1),
    )
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(" Employee Directory Search")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(title, area);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        Style::default().fg(colors::ACCENT)
    } else {
        Style::default().fg(colors::MUTED)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search ");

    let query = app.coordinator.search_text();
    let line = if query.is_empty() {
        Line::from(vec![
            Span::raw(SEARCH_PREFIX),
            Span::styled(PLACEHOLDER, Style::default().fg(colors::MUTED)),
        ])
    } else {
        Line::from(vec![
            Span::raw(SEARCH_PREFIX),
            Span::styled(query.to_string(), Style::default().fg(Color::White)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_cards(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = (area.height / CARD_HEIGHT) as usize;
    app.list.visible_cards = visible;

    let results = app.coordinator.results();
    if results.is_empty() {
        let message = if app.coordinator.search_text().trim().is_empty() {
            ""
        } else if app.coordinator.is_busy() {
            " Searching..."
        } else {
            " No employees found"
        };
        let paragraph = Paragraph::new(message).style(Style::default().fg(colors::MUTED));
        frame.render_widget(paragraph, area);
        return;
    }

    let start = app.list.scroll_offset.min(results.len().saturating_sub(1));
    let end = (start + visible).min(results.len());

    for (slot, index) in (start..end).enumerate() {
        let card_area = Rect::new(
            area.x,
            area.y + slot as u16 * CARD_HEIGHT,
            area.width,
            CARD_HEIGHT,
        );
        let selected = !app.search.focused && app.list.selected == Some(index);
        card::draw_card(frame, &results[index], app.locale, selected, card_area);
    }
}

/// Left-hand status text
pub fn status_text(app: &App) -> String {
    let coordinator = &app.coordinator;
    if let Some(error) = coordinator.last_error() {
        format!(" Search failed: {}", error)
    } else if coordinator.search_text().trim().is_empty() {
        " Type to search".to_string()
    } else if coordinator.is_busy() {
        " Searching...".to_string()
    } else {
        let count = coordinator.results().len();
        let noun = if count == 1 { "employee" } else { "employees" };
        format!(" {} {}", count, noun)
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = status_text(app);
    let right_text = " Tab:Results  Esc:Clear  Ctrl+Q:Quit ";

    // Build the status line: left-aligned text + padding + right-aligned text
    let available_width = area.width as usize;
    let left_len = left_text.width();
    let right_len = right_text.width();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        format!("{:width$}", left_text, width = available_width)
    };

    let fg = if app.coordinator.last_error().is_some() {
        Color::LightRed
    } else {
        Color::White
    };
    let status = Paragraph::new(status_str).style(Style::default().fg(fg).bg(colors::BAR_BG));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::employee::Employee;
    use crate::error::SearchError;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::{Duration, Instant};

    fn app() -> App {
        let config = AppConfig::new("http://127.0.0.1:9")
            .unwrap()
            .with_debounce(Duration::from_millis(400));
        App::new(&config).unwrap()
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn fire(app: &mut App, query: &str) -> u64 {
        let t0 = Instant::now();
        app.coordinator.set_search_text(query, t0);
        app.coordinator.poll(t0 + Duration::from_secs(1)).unwrap().seq
    }

    #[test]
    fn empty_state_shows_placeholder() {
        let mut app = app();
        let screen = render(&mut app);
        assert!(screen.contains("Employee Directory Search"));
        assert!(screen.contains(PLACEHOLDER));
        assert!(screen.contains("Type to search"));
    }

    #[test]
    fn renders_cards_for_results() {
        let mut app = app();
        let seq = fire(&mut app, "eng");
        let employees = vec![
            Employee {
                id: Some(1),
                name: "Meera Kapoor".to_string(),
                email: "meera.kapoor1@cloudnest.ai".to_string(),
                department: Some("Engineering".to_string()),
                designation: None,
                date_of_joining: None,
            },
            Employee {
                id: Some(2),
                name: "Arjun Gupta".to_string(),
                email: "arjun.gupta2@cloudnest.ai".to_string(),
                department: Some("Engineering".to_string()),
                designation: Some("Senior Engineer".to_string()),
                date_of_joining: NaiveDate::from_ymd_opt(2019, 3, 14),
            },
        ];
        app.coordinator.apply_response(seq, Ok(employees));

        let screen = render(&mut app);
        assert!(screen.contains("Meera Kapoor"));
        assert!(screen.contains("Date of Joining: -"));
        assert!(screen.contains("Arjun Gupta"));
        assert!(!screen.contains("2019-03-14"));
        assert!(screen.contains("2 employees"));
    }

    #[test]
    fn failure_is_visible_in_status_bar() {
        let mut app = app();
        let seq = fire(&mut app, "ali");
        app.coordinator.apply_response(
            seq,
            Err(SearchError::BadResponse {
                status: 500,
                message: "Internal server error".to_string(),
            }),
        );
        assert_eq!(
            status_text(&app),
            " Search failed: server returned 500 (Internal server error)"
        );
    }

    #[test]
    fn cursor_stays_inside_search_box_for_huge_query() {
        let area = Rect::new(0, 1, 80, 3);
        let huge = "w".repeat(usize::from(u16::MAX) + 10);
        assert_eq!(cursor_position(area, &huge), Position::new(78, 2));
        assert_eq!(cursor_position(area, "ab"), Position::new(6, 2));

        let mut app = app();
        app.coordinator.set_search_text(huge, Instant::now());
        let screen = render(&mut app);
        assert!(screen.contains("Searching..."));
    }

    #[test]
    fn pending_search_shows_progress() {
        let mut app = app();
        app.coordinator.set_search_text("bob", Instant::now());
        assert_eq!(status_text(&app), " Searching...");
    }
}
