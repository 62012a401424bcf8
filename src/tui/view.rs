// File: src/tui/view.rs
use crate::tui::state::{ChatState, Speaker};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Greedy word wrap by character count. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in text.lines() {
        let mut current = String::new();
        for word in raw.split(' ') {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.push(word.drain(..width).collect());
            }
            let word: String = word.into_iter().collect();
            let needed = current.chars().count() + word.chars().count() + usize::from(!current.is_empty());
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
        }
        lines.push(current);
    }
    lines
}

fn dialog_lines(state: &ChatState, bubble_width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for entry in &state.dialog {
        let (name, alignment, color) = match entry.speaker {
            Speaker::User => ("You", Alignment::Right, Color::Cyan),
            Speaker::Tally => ("Tally", Alignment::Left, Color::Yellow),
        };
        lines.push(
            Line::from(Span::styled(
                name,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .alignment(alignment),
        );
        for text in wrap_text(&entry.text, bubble_width) {
            let style = if text.starts_with("OOPS!") {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(text, style)).alignment(alignment));
        }
        lines.push(Line::from(""));
    }
    lines
}

pub fn draw(f: &mut Frame, state: &mut ChatState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    // --- Dialog ---
    let inner_width = chunks[0].width.saturating_sub(2) as usize;
    let bubble_width = (inner_width * 3 / 4).max(10);
    let lines = dialog_lines(state, bubble_width);

    let inner_height = chunks[0].height.saturating_sub(2);
    let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_scroll = total.saturating_sub(inner_height);
    // Keep the newest lines visible unless the user scrolled back.
    state.scroll_back = state.scroll_back.min(max_scroll);
    let offset = max_scroll - state.scroll_back;

    let title = if state.scroll_back > 0 {
        format!(" Tally (scrolled back {}) ", state.scroll_back)
    } else {
        " Tally ".to_string()
    };
    let dialog = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((offset, 0));
    f.render_widget(dialog, chunks[0]);

    // --- Input ---
    let input_title = if state.finished {
        " Goodbye "
    } else {
        " Enter: Send | PgUp/PgDn: Scroll | Esc: Quit "
    };
    let input = Paragraph::new(format!("> {}", state.input_buffer))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(input_title));
    f.render_widget(input, chunks[1]);

    if !state.finished {
        f.set_cursor_position(cursor_cell(chunks[1], state.cursor_position));
    }
}

/// Terminal cell for the input cursor, kept inside the box border.
fn cursor_cell(area: Rect, cursor_position: usize) -> (u16, u16) {
    let offset = u16::try_from(cursor_position).unwrap_or(u16::MAX);
    // "> " prompt plus the left border.
    let x = area.x.saturating_add(3).saturating_add(offset);
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    (x.min(max_x), area.y.saturating_add(1))
}
