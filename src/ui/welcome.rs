use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::button;
use crate::ui::layout::{centered_in_row, centered_rect, inner};

pub const START_LABEL: &str = "Empezar evaluación";

pub struct WelcomeLayout {
    pub card: Rect,
    pub body: Rect,
    pub button: Rect,
    pub note: Rect,
}

pub fn compute_welcome_layout(area: Rect) -> WelcomeLayout {
    let card = centered_rect(76, 26, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // pitch
            Constraint::Length(3), // start button
            Constraint::Length(3), // note
        ])
        .split(inner(card));

    WelcomeLayout {
        card,
        body: rows[0],
        button: centered_in_row(30, rows[1]),
        note: rows[2],
    }
}

pub fn draw_welcome(f: &mut Frame, area: Rect, _state: &AppState) {
    let layout = compute_welcome_layout(area);

    let dim = Style::default().fg(Color::Gray);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🏆 Millonario Emocional",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Evaluación Gratuita",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("En pocos minutos descubrirás si tu "),
            Span::styled("COMPORTAMIENTO", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" es tu mayor aliado o tu mayor freno."),
        ]),
        Line::from(""),
        Line::from(Span::styled("👉 Estrés que te impulsa o te roba energía.", dim)),
        Line::from(Span::styled(
            "👉 Relaciones profesionales y familiares que te restan o te suman.",
            dim,
        )),
        Line::from(Span::styled(
            "👉 Influencia/Liderazgo/Ventas que abren puertas… o las cierran.",
            dim,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "No hay respuestas buenas ni malas. Solo la verdad que necesitas para recuperar tu claridad.",
            dim.add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "🔥 +2,847 personas ya han descubierto su potencial • Solo 5 minutos",
            Style::default().fg(Color::LightRed),
        )),
    ];

    f.render_widget(Block::default().borders(Borders::ALL), layout.card);
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(body, layout.body);

    button::draw_button(f, layout.button, START_LABEL, true);

    let note = Paragraph::new(Line::from(vec![
        Span::styled("Nota: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(
            "Esta evaluación es una herramienta de autoconocimiento. Su objetivo es generar reflexión sobre áreas clave para el alto rendimiento.",
        ),
    ]))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(note, layout.note);
}
