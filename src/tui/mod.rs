// File: ./src/tui/mod.rs
// Entry point and main loop for the chat-style front end.
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;

use crate::controller::Controller;
use crate::tui::action::Action;
use crate::tui::state::{ChatState, Speaker};
use crate::tui::view::draw;
use crate::ui::WELCOME_MESSAGE;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};

const FAREWELL_PAUSE: Duration = Duration::from_millis(800);

pub fn run(mut controller: Controller, show_welcome: bool) -> Result<()> {
    // Panic Hook: restore the terminal before the default report.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let mut out = io::stdout();
        let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
        log::error!("PANIC: {:?}", info);
        default_hook(info);
    }));

    // --- 1. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- 2. STATE INIT ---
    let mut state = ChatState::new();
    if show_welcome {
        state.push(Speaker::Tally, WELCOME_MESSAGE);
    }

    // --- 3. UI LOOP ---
    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|f| draw(f, &mut state)) {
            break Err(e.into());
        }

        let event = match event::read() {
            Ok(ev) => ev,
            Err(e) => break Err(e.into()),
        };
        match event {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => state.scroll_up(1),
                MouseEventKind::ScrollDown => state.scroll_down(1),
                _ => {}
            },
            Event::Key(key) => {
                // Filter out KeyRelease events to prevent double input on Windows
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                match handlers::handle_key_event(key, &mut state) {
                    Some(Action::Quit) => break Ok(()),
                    Some(Action::Submit(line)) => {
                        if handlers::submit_line(&line, &mut state, &mut controller) {
                            let _ = terminal.draw(|f| draw(f, &mut state));
                            std::thread::sleep(FAREWELL_PAUSE);
                            break Ok(());
                        }
                    }
                    None => {}
                }
            }
            _ => {}
        }
    };

    // --- 4. CLEANUP ---
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}
