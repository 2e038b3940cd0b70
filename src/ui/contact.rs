use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, ContactFocus};
use crate::ui::button::{draw_button, draw_input};
use crate::ui::layout::{centered_in_row, centered_rect, contains, inner};

pub const SUBMIT_LABEL: &str = "Continuar";

const COUNTRY_BUTTON_WIDTH: u16 = 12;
const DROPDOWN_WIDTH: u16 = 30;

/// Screen geometry of the contact form, shared by the renderer and the
/// mouse handler.
pub struct ContactLayout {
    pub card: Rect,
    pub header: Rect,
    pub name_label: Rect,
    pub name: Rect,
    pub phone_label: Rect,
    pub country_button: Rect,
    pub phone: Rect,
    pub submit: Rect,
    /// Present only while the country list is open.
    pub dropdown: Option<Rect>,
}

impl ContactLayout {
    /// Row of the open country list under (`x`, `y`), if any.
    pub fn dropdown_row(&self, x: u16, y: u16) -> Option<usize> {
        let list = self.dropdown?;
        let rows = inner(list);
        if contains(rows, x, y) {
            Some((y - rows.y) as usize)
        } else {
            None
        }
    }

    /// True when (`x`, `y`) lies on the country button or its open list.
    pub fn in_dropdown_region(&self, x: u16, y: u16) -> bool {
        contains(self.country_button, x, y)
            || self.dropdown.is_some_and(|list| contains(list, x, y))
    }
}

pub fn compute_contact_layout(area: Rect, state: &AppState) -> ContactLayout {
    let card = centered_rect(60, 20, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(1), // "Nombre"
            Constraint::Length(3), // name input
            Constraint::Length(1), // "WhatsApp"
            Constraint::Length(3), // country + phone
            Constraint::Length(1), // spacer
            Constraint::Length(3), // submit
            Constraint::Min(0),
        ])
        .split(inner(card));

    let phone_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(COUNTRY_BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Min(8),
        ])
        .split(rows[4]);

    let country_button = phone_row[0];
    let dropdown = if state.dropdown.open {
        let height = state.content.countries.len() as u16 + 2;
        let top = country_button.y + country_button.height;
        let available = area.y + area.height;
        let height = height.min(available.saturating_sub(top));
        let width = DROPDOWN_WIDTH.min((area.x + area.width).saturating_sub(country_button.x));
        Some(Rect::new(country_button.x, top, width, height))
    } else {
        None
    };

    ContactLayout {
        card,
        header: rows[0],
        name_label: rows[1],
        name: rows[2],
        phone_label: rows[3],
        country_button,
        phone: phone_row[2],
        submit: centered_in_row(24, rows[6]),
        dropdown,
    }
}

pub fn draw_contact(f: &mut Frame, area: Rect, state: &AppState) {
    let layout = compute_contact_layout(area, state);
    let focus = state.contact_focus;

    f.render_widget(Block::default().borders(Borders::ALL), layout.card);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "📱 Información de contacto",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Para enviarte tus resultados personalizados",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, layout.header);

    f.render_widget(Paragraph::new(label_line("Nombre")), layout.name_label);
    draw_input(
        f,
        layout.name,
        &state.name_input,
        "Tu nombre",
        focus == ContactFocus::Name,
    );

    f.render_widget(Paragraph::new(label_line("WhatsApp")), layout.phone_label);
    draw_country_button(f, layout.country_button, state);
    draw_input(
        f,
        layout.phone,
        &state.phone_input,
        &state.selected_country.placeholder,
        focus == ContactFocus::Phone,
    );

    draw_button(f, layout.submit, SUBMIT_LABEL, focus == ContactFocus::Submit);

    // Drawn last so the list overlays the fields below it
    if let Some(list) = layout.dropdown {
        draw_dropdown(f, list, state);
    }
}

fn label_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
}

fn draw_country_button(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.contact_focus == ContactFocus::Country;
    let border_style = if focused || state.dropdown.open {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let arrow = if state.dropdown.open { "▴" } else { "▾" };
    let widget = Paragraph::new(Line::from(format!(
        "{} {} {}",
        state.selected_country.flag, state.selected_country.code, arrow
    )))
    .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(widget, area);
}

fn draw_dropdown(f: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = state
        .content
        .countries
        .iter()
        .enumerate()
        .map(|(i, country)| {
            let style = if i == state.dropdown.highlighted {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else if *country == state.selected_country {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!(" {} {:<5} {}", country.flag, country.code, country.name),
                style,
            ))
        })
        .collect();

    f.render_widget(Clear, area);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(widget, area);
}
