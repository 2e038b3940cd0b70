use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::Terminal;

use emoquiz::content;
use emoquiz::state::{AppState, ContactFocus, Screen};
use emoquiz::tui::{handle_key, handle_mouse};
use emoquiz::ui::contact::compute_contact_layout;
use emoquiz::ui::evaluation::compute_evaluation_layout;
use emoquiz::ui::layout::compute_layout;
use emoquiz::ui::welcome::compute_welcome_layout;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 40;

fn area() -> Rect {
    Rect::new(0, 0, WIDTH, HEIGHT)
}

fn render(state: &AppState) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| emoquiz::ui::draw(f, state)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }
}

fn type_str(state: &mut AppState, s: &str) {
    for c in s.chars() {
        handle_key(key(KeyCode::Char(c)), state);
    }
}

#[test]
fn test_welcome_screen_copy() {
    let state = AppState::new(content::builtin(), 0);
    let screen = render(&state);
    assert!(screen.contains("Evaluación Gratuita"));
    assert!(screen.contains("Empezar evaluación"));
}

#[test]
fn test_keyboard_walkthrough() {
    let mut state = AppState::new(content::builtin(), 0);
    handle_key(key(KeyCode::Enter), &mut state);
    assert_eq!(state.screen, Screen::ContactInfo);
    assert!(render(&state).contains("Información de contacto"));

    type_str(&mut state, "Ana");
    handle_key(key(KeyCode::Enter), &mut state);
    assert_eq!(state.contact_focus, ContactFocus::Country);
    handle_key(key(KeyCode::Tab), &mut state);
    type_str(&mut state, "123");
    handle_key(key(KeyCode::Enter), &mut state);
    assert_eq!(state.screen, Screen::ContactInfo);
    assert!(render(&state).contains("válido"));

    type_str(&mut state, "4567");
    handle_key(key(KeyCode::Enter), &mut state);
    assert_eq!(state.screen, Screen::Evaluation);

    let screen = render(&state);
    assert!(screen.contains("Pregunta 1 de 23"));
    assert!(screen.contains("Equilibrio Personal"));

    // Out-of-scale digits are ignored
    handle_key(key(KeyCode::Char('9')), &mut state);
    assert!(state.responses.is_empty());

    handle_key(key(KeyCode::Char('4')), &mut state);
    handle_key(key(KeyCode::Char('2')), &mut state);
    assert_eq!(state.responses, vec![4, 2]);
    handle_key(key(KeyCode::Backspace), &mut state);
    assert_eq!(state.responses, vec![4]);
    assert!(render(&state).contains("Pregunta 2 de 23"));

    for _ in 0..22 {
        handle_key(key(KeyCode::Char('3')), &mut state);
    }
    assert_eq!(state.screen, Screen::Completed);
    let screen = render(&state);
    assert!(screen.contains("Evaluación completada"));
    assert!(screen.contains("Ana"));

    handle_key(key(KeyCode::Enter), &mut state);
    assert!(state.should_quit);
}

#[test]
fn test_ctrl_q_quits_anywhere() {
    let mut state = AppState::new(content::builtin(), 0);
    handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL), &mut state);
    assert!(state.should_quit);
}

#[test]
fn test_mouse_start_and_dropdown() {
    let mut state = AppState::new(content::builtin(), 0);
    let main = compute_layout(area()).main;

    let button = compute_welcome_layout(main).button;
    handle_mouse(click(button.x + 1, button.y + 1), &mut state, area());
    assert_eq!(state.screen, Screen::ContactInfo);

    // Open the country list and pick the third row
    let layout = compute_contact_layout(main, &state);
    let country = layout.country_button;
    handle_mouse(click(country.x + 1, country.y + 1), &mut state, area());
    assert!(state.dropdown.open);
    assert!(render(&state).contains("Argentina"));

    let layout = compute_contact_layout(main, &state);
    let list = layout.dropdown.expect("open list");
    handle_mouse(click(list.x + 2, list.y + 3), &mut state, area());
    assert!(!state.dropdown.open);
    assert_eq!(state.selected_country.name, "Argentina");

    // Reopen, then press far away: closes, country unchanged
    handle_mouse(click(country.x + 1, country.y + 1), &mut state, area());
    assert!(state.dropdown.open);
    handle_mouse(click(0, HEIGHT - 3), &mut state, area());
    assert!(!state.dropdown.open);
    assert_eq!(state.selected_country.name, "Argentina");
}

#[test]
fn test_outside_press_closes_dropdown_and_reaches_target() {
    let mut state = AppState::new(content::builtin(), 0);
    state.start();
    let main = compute_layout(area()).main;

    // Pressing the name field while the list is open closes it and focuses the field
    state.contact_focus = ContactFocus::Phone;
    state.toggle_dropdown();
    let layout = compute_contact_layout(main, &state);
    let name = layout.name;
    handle_mouse(click(name.x + name.width - 2, name.y + 1), &mut state, area());
    assert!(!state.dropdown.open);
    assert_eq!(state.contact_focus, ContactFocus::Name);
    assert_eq!(state.screen, Screen::ContactInfo);

    // The open list covers part of the submit button; its uncovered right edge still submits
    state.toggle_dropdown();
    let layout = compute_contact_layout(main, &state);
    let submit = layout.submit;
    state.phone_input = "5512345678".to_string();
    handle_mouse(
        click(submit.x + submit.width - 2, submit.y + 1),
        &mut state,
        area(),
    );
    assert!(!state.dropdown.open);
    assert_eq!(state.screen, Screen::Evaluation);
    assert_eq!(state.responses.len(), 0);
}

#[test]
fn test_mouse_rating_and_back() {
    let mut state = AppState::new(content::builtin(), 0);
    state.start();
    state.phone_input = "612345678".to_string();
    state.submit_contact().unwrap();
    let main = compute_layout(area()).main;

    let layout = compute_evaluation_layout(main, &state);
    assert!(layout.back.is_none());
    let row = layout.ratings[4];
    handle_mouse(click(row.x + 3, row.y), &mut state, area());
    assert_eq!(state.responses, vec![5]);

    let layout = compute_evaluation_layout(main, &state);
    let back = layout.back.expect("back button once answered");
    handle_mouse(click(back.x + 1, back.y), &mut state, area());
    assert!(state.responses.is_empty());
    assert_eq!(state.progress(), 0);
}
