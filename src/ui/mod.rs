pub mod button;
pub mod completed;
pub mod contact;
pub mod evaluation;
pub mod keybar;
pub mod layout;
pub mod titlebar;
pub mod toast;
pub mod welcome;

use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw(f: &mut Frame, state: &AppState) {
    let layout = layout::compute_layout(f.area());

    titlebar::draw_titlebar(f, layout.titlebar, state);

    match state.screen {
        Screen::Welcome => {
            welcome::draw_welcome(f, layout.main, state);
        }
        Screen::ContactInfo => {
            contact::draw_contact(f, layout.main, state);
        }
        Screen::Evaluation => {
            evaluation::draw_evaluation(f, layout.main, state);
        }
        Screen::Completed => {
            completed::draw_completed(f, layout.main, state);
        }
    }

    keybar::draw_keybar(f, layout.keybar, state);

    // Notifications float over whatever screen is showing
    if !state.toasts.is_empty() {
        toast::draw_toasts(f, layout.main, state);
    }
}
