use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{AppState, Screen};

pub const APP_TITLE: &str = "Millonario Emocional";

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let step = match state.screen {
        Screen::Welcome => 1,
        Screen::ContactInfo => 2,
        Screen::Evaluation => 3,
        Screen::Completed => 4,
    };
    let step_text = format!(" Paso {} de 4 ", step);

    let title_text = format!("[ {} ]", APP_TITLE);
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Center the title: pad left so title sits in the middle of the full width
    let available = area.width as usize;
    let title_len = title_text.chars().count();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad = available.saturating_sub(center_pad + title_len + step_text.len());

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        Span::styled(step_text, Style::default().fg(Color::Rgb(200, 200, 120))),
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
