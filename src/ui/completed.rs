use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::layout::centered_rect;

pub fn draw_completed(f: &mut Frame, area: Rect, state: &AppState) {
    let greeting = match state.contact.as_ref().map(|c| c.name.as_str()) {
        Some(name) if !name.is_empty() => format!("¡Gracias, {}!", name),
        _ => "¡Gracias!".to_string(),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓  Evaluación completada",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(greeting),
        Line::from(""),
        Line::from("Hemos recibido tus respuestas."),
        Line::from("Muy pronto recibirás tus resultados personalizados por WhatsApp."),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Salir",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let card = centered_rect(72, lines.len() as u16 + 2, area);
    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, card);
}
