use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::Rect;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tracing::debug;

use crate::state::*;
use crate::ui::contact::compute_contact_layout;
use crate::ui::evaluation::compute_evaluation_layout;
use crate::ui::layout::{compute_layout, contains};
use crate::ui::welcome::compute_welcome_layout;

pub fn run_tui(mut state: AppState) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let result = main_loop(&mut terminal, &mut state);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    terminal.show_cursor().ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        // Poll for input events
        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            match event::read().map_err(|e| format!("Read error: {}", e))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(key, state);
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size().unwrap_or_default();
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse(mouse, state, area);
                }
                _ => {}
            }
        }

        state.prune_toasts(chrono::Utc::now());
    }

    Ok(())
}

pub fn handle_key(key: KeyEvent, state: &mut AppState) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
        debug!(screen = ?state.screen, "quit requested");
        state.should_quit = true;
        return;
    }

    match state.screen {
        Screen::Welcome => {
            if key.code == KeyCode::Enter {
                state.start();
            }
        }
        Screen::ContactInfo => handle_contact_key(key, state),
        Screen::Evaluation => handle_evaluation_key(key, state),
        Screen::Completed => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                state.should_quit = true;
            }
        }
    }
}

fn handle_contact_key(key: KeyEvent, state: &mut AppState) {
    if state.dropdown.open {
        match key.code {
            KeyCode::Up => state.move_highlight(false),
            KeyCode::Down => state.move_highlight(true),
            KeyCode::Enter | KeyCode::Char(' ') => state.select_highlighted(),
            KeyCode::Esc => state.dismiss_dropdown(),
            KeyCode::Tab => state.focus_next(),
            KeyCode::BackTab => state.focus_prev(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab => state.focus_next(),
        KeyCode::BackTab => state.focus_prev(),
        KeyCode::Backspace => state.backspace(),
        KeyCode::Enter => match state.contact_focus {
            ContactFocus::Name => state.focus_next(),
            ContactFocus::Country => state.toggle_dropdown(),
            ContactFocus::Phone | ContactFocus::Submit => {
                submit_contact_form(state);
            }
        },
        KeyCode::Down | KeyCode::Char(' ') if state.contact_focus == ContactFocus::Country => {
            state.toggle_dropdown();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.type_char(c);
        }
        _ => {}
    }
}

fn handle_evaluation_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(value) = rating_for_key(state, c) {
                state.answer(value);
            }
        }
        KeyCode::Backspace | KeyCode::Left => state.go_back(),
        _ => {}
    }
}

fn rating_for_key(state: &AppState, c: char) -> Option<u8> {
    let digit = c.to_digit(10)? as u8;
    state
        .content
        .scale
        .iter()
        .find(|r| r.value == digit)
        .map(|r| r.value)
}

pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let main = compute_layout(area).main;
    let (x, y) = (mouse.column, mouse.row);

    match state.screen {
        Screen::Welcome => {
            if contains(compute_welcome_layout(main).button, x, y) {
                state.start();
            }
        }
        Screen::ContactInfo => handle_contact_click(state, main, x, y),
        Screen::Evaluation => {
            let layout = compute_evaluation_layout(main, state);
            if let Some(i) = layout.ratings.iter().position(|r| contains(*r, x, y)) {
                if let Some(value) = state.content.scale.get(i).map(|r| r.value) {
                    state.answer(value);
                }
            } else if layout.back.is_some_and(|b| contains(b, x, y)) {
                state.go_back();
            }
        }
        Screen::Completed => {}
    }
}

fn handle_contact_click(state: &mut AppState, main: Rect, x: u16, y: u16) {
    let layout = compute_contact_layout(main, state);

    // While the list is open, presses inside it stay with it. A press
    // anywhere else closes it and still reaches whatever was pressed.
    if state.dropdown.open {
        if let Some(row) = layout.dropdown_row(x, y) {
            state.select_country(row);
            return;
        }
        if contains(layout.country_button, x, y) {
            state.toggle_dropdown();
            return;
        }
        if layout.in_dropdown_region(x, y) {
            return;
        }
        state.dismiss_dropdown();
    }

    if contains(layout.country_button, x, y) {
        state.contact_focus = ContactFocus::Country;
        state.toggle_dropdown();
    } else if contains(layout.name, x, y) {
        state.contact_focus = ContactFocus::Name;
    } else if contains(layout.phone, x, y) {
        state.contact_focus = ContactFocus::Phone;
    } else if contains(layout.submit, x, y) {
        state.contact_focus = ContactFocus::Submit;
        submit_contact_form(state);
    }
}

fn submit_contact_form(state: &mut AppState) {
    if let Err(e) = state.submit_contact() {
        debug!(error = %e, "contact form kept open");
    }
}
