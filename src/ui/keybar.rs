use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Screen};

pub fn draw_keybar(f: &mut Frame, area: Rect, state: &AppState) {
    let scale = &state.content.scale;
    let rating_keys = match (scale.first(), scale.last()) {
        (Some(lo), Some(hi)) if lo.value != hi.value => format!("{}-{}", lo.value, hi.value),
        (Some(only), _) => only.value.to_string(),
        _ => String::new(),
    };

    let bindings: Vec<(&str, &str)> = match state.screen {
        Screen::Welcome => vec![("Enter", "empezar"), ("Ctrl+Q", "salir")],
        Screen::ContactInfo if state.dropdown.open => vec![
            ("↑/↓", "país"),
            ("Enter", "elegir"),
            ("Esc", "cerrar"),
            ("Ctrl+Q", "salir"),
        ],
        Screen::ContactInfo => vec![
            ("Tab", "siguiente campo"),
            ("Shift+Tab", "anterior"),
            ("Enter", "continuar"),
            ("Ctrl+Q", "salir"),
        ],
        Screen::Evaluation => {
            let mut b = vec![(rating_keys.as_str(), "responder")];
            if !state.responses.is_empty() {
                b.push(("Backspace", "anterior"));
            }
            b.push(("Ctrl+Q", "salir"));
            b
        }
        Screen::Completed => vec![("Enter", "salir")],
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
