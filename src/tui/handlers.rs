// File: ./src/tui/handlers.rs
use crate::controller::Controller;
use crate::tui::action::Action;
use crate::tui::state::{ChatState, Speaker};
use crate::ui::Transcript;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const SCROLL_STEP: u16 = 5;

pub fn handle_key_event(key: KeyEvent, state: &mut ChatState) -> Option<Action> {
    if state.finished {
        return Some(Action::Quit);
    }
    match key.code {
        KeyCode::Enter if !state.input_buffer.trim().is_empty() => {
            let line = state.input_buffer.clone();
            state.reset_input();
            Some(Action::Submit(line))
        }
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(c) => {
            state.enter_char(c);
            None
        }
        KeyCode::Backspace => {
            state.delete_char();
            None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            None
        }
        KeyCode::End => {
            state.move_cursor_end();
            None
        }
        KeyCode::PageUp => {
            state.scroll_up(SCROLL_STEP);
            None
        }
        KeyCode::PageDown => {
            state.scroll_down(SCROLL_STEP);
            None
        }
        _ => None,
    }
}

/// Sends one submitted line through the controller and records both sides
/// of the exchange. Returns `true` when the conversation is over.
pub fn submit_line(line: &str, state: &mut ChatState, controller: &mut Controller) -> bool {
    state.push(Speaker::User, line);
    let mut transcript = Transcript::new();
    let exit = controller.handle(line, &mut transcript);
    state.push(Speaker::Tally, transcript.take_reply());
    if exit {
        state.finished = true;
    }
    exit
}
