use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Bordered, centered label. Focused buttons are drawn inverted.
pub fn draw_button(f: &mut Frame, area: Rect, label: &str, focused: bool) {
    let (text_style, border_style) = if focused {
        (
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (Style::default().fg(Color::White), Style::default().fg(Color::Gray))
    };

    let widget = Paragraph::new(Line::from(Span::styled(format!(" {} ", label), text_style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(widget, area);
}

/// Single-line text field. Shows `placeholder` dimmed while `value` is
/// empty and a block cursor while focused.
pub fn draw_input(f: &mut Frame, area: Rect, value: &str, placeholder: &str, focused: bool) {
    let mut spans = if value.is_empty() {
        vec![Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::raw(value.to_string())]
    };
    if focused {
        let cursor = Span::styled(" ", Style::default().bg(Color::White));
        if value.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let widget = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(widget, area);
}
