use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::contact::{self, ContactError};
use crate::model::*;
use crate::toast::{Toast, ToastKind};

pub const COMPLETED_MESSAGE: &str = "¡Evaluación completada! Recibirás tus resultados pronto.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Welcome,
    ContactInfo,
    Evaluation,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactFocus {
    Name,
    Country,
    Phone,
    Submit,
}

impl ContactFocus {
    fn next(self) -> Self {
        match self {
            ContactFocus::Name => ContactFocus::Country,
            ContactFocus::Country => ContactFocus::Phone,
            ContactFocus::Phone => ContactFocus::Submit,
            ContactFocus::Submit => ContactFocus::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            ContactFocus::Name => ContactFocus::Submit,
            ContactFocus::Country => ContactFocus::Name,
            ContactFocus::Phone => ContactFocus::Country,
            ContactFocus::Submit => ContactFocus::Phone,
        }
    }
}

/// Open/closed flag of the country picker plus the keyboard highlight.
/// Pointer presses are routed to the picker only while `open` is set, so
/// the outside-press check lives exactly as long as the open list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryDropdown {
    pub open: bool,
    pub highlighted: usize,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub content: EvaluationContent,
    pub current_block: usize,
    pub current_question: usize,
    pub responses: Vec<u8>,
    pub name_input: String,
    pub phone_input: String,
    pub selected_country: CountryOption,
    pub contact: Option<ContactInfo>,
    pub contact_focus: ContactFocus,
    pub dropdown: CountryDropdown,
    pub toasts: Vec<Toast>,
    pub should_quit: bool,
}

impl AppState {
    /// `content` must have passed `content::validate`; `country` indexes
    /// into its country list and falls back to the first entry.
    pub fn new(content: EvaluationContent, country: usize) -> Self {
        let country = country.min(content.countries.len().saturating_sub(1));
        let selected_country = content.countries[country].clone();
        Self {
            screen: Screen::Welcome,
            content,
            current_block: 0,
            current_question: 0,
            responses: Vec::new(),
            name_input: String::new(),
            phone_input: String::new(),
            selected_country,
            contact: None,
            contact_focus: ContactFocus::Name,
            dropdown: CountryDropdown {
                open: false,
                highlighted: country,
            },
            toasts: Vec::new(),
            should_quit: false,
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        debug!(from = ?self.screen, to = ?screen, "screen transition");
        self.screen = screen;
    }

    pub fn start(&mut self) {
        if self.screen == Screen::Welcome {
            self.set_screen(Screen::ContactInfo);
        }
    }

    /// Validate the typed phone number and, on success, begin the
    /// evaluation from its first question. Failures leave the session on
    /// the contact screen and raise an error notification.
    pub fn submit_contact(&mut self) -> Result<(), ContactError> {
        if self.screen != Screen::ContactInfo {
            return Ok(());
        }

        let digits = match contact::validate_phone(&self.phone_input) {
            Ok(d) => d,
            Err(e) => {
                warn!(error = %e, "contact submission rejected");
                self.notify(ToastKind::Error, e.user_message());
                return Err(e);
            }
        };

        self.contact = Some(ContactInfo {
            name: self.name_input.trim().to_string(),
            country: self.selected_country.clone(),
            phone_digits: digits,
        });
        self.dropdown.open = false;
        self.current_block = 0;
        self.current_question = 0;
        self.responses.clear();
        info!(country = %self.selected_country.code, "contact captured");
        self.set_screen(Screen::Evaluation);
        Ok(())
    }

    pub fn answer(&mut self, value: u8) {
        if self.screen != Screen::Evaluation {
            return;
        }

        self.responses.push(value);

        let in_block = self.content.questions_in_block(self.current_block);
        if self.current_question + 1 < in_block {
            self.current_question += 1;
        } else if self.current_block + 1 < self.content.blocks.len() {
            self.current_block += 1;
            self.current_question = 0;
        } else {
            info!(responses = self.responses.len(), "evaluation completed");
            self.set_screen(Screen::Completed);
            self.notify(ToastKind::Success, COMPLETED_MESSAGE);
        }
    }

    pub fn go_back(&mut self) {
        if self.responses.pop().is_none() {
            return;
        }

        // The final answer leaves the cursor on the last question
        if self.screen == Screen::Completed {
            self.set_screen(Screen::Evaluation);
            return;
        }

        if self.current_question > 0 {
            self.current_question -= 1;
        } else if self.current_block > 0 {
            self.current_block -= 1;
            self.current_question = self
                .content
                .questions_in_block(self.current_block)
                .saturating_sub(1);
        }
    }

    /// Global index of the question on screen.
    pub fn progress(&self) -> usize {
        self.content
            .global_index(self.current_block, self.current_question)
    }

    pub fn total_questions(&self) -> usize {
        self.content.total_questions()
    }

    pub fn current_block(&self) -> Option<&QuestionBlock> {
        self.content.blocks.get(self.current_block)
    }

    pub fn current_question_text(&self) -> Option<&str> {
        self.current_block()
            .and_then(|b| b.questions.get(self.current_question))
            .map(|q| q.as_str())
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown.open = !self.dropdown.open;
        if self.dropdown.open {
            self.dropdown.highlighted = self
                .content
                .countries
                .iter()
                .position(|c| *c == self.selected_country)
                .unwrap_or(0);
        }
    }

    pub fn select_country(&mut self, idx: usize) {
        if let Some(country) = self.content.countries.get(idx) {
            self.selected_country = country.clone();
            self.dropdown.highlighted = idx;
            self.dropdown.open = false;
        }
    }

    pub fn select_highlighted(&mut self) {
        self.select_country(self.dropdown.highlighted);
    }

    /// Close the picker without touching the selected country.
    pub fn dismiss_dropdown(&mut self) {
        self.dropdown.open = false;
    }

    pub fn move_highlight(&mut self, down: bool) {
        let len = self.content.countries.len();
        if len == 0 {
            return;
        }
        self.dropdown.highlighted = if down {
            (self.dropdown.highlighted + 1) % len
        } else {
            (self.dropdown.highlighted + len - 1) % len
        };
    }

    pub fn focus_next(&mut self) {
        self.dropdown.open = false;
        self.contact_focus = self.contact_focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.dropdown.open = false;
        self.contact_focus = self.contact_focus.prev();
    }

    pub fn type_char(&mut self, c: char) {
        match self.contact_focus {
            ContactFocus::Name => self.name_input.push(c),
            ContactFocus::Phone => self.phone_input.push(c),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.contact_focus {
            ContactFocus::Name => {
                self.name_input.pop();
            }
            ContactFocus::Phone => {
                self.phone_input.pop();
            }
            _ => {}
        }
    }

    pub fn notify(&mut self, kind: ToastKind, message: &str) {
        self.toasts.push(Toast::new(kind, message, Utc::now()));
    }

    pub fn prune_toasts(&mut self, now: DateTime<Utc>) {
        self.toasts.retain(|t| !t.is_expired(now));
    }
}
