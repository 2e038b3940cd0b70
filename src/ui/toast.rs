use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;
use crate::toast::ToastKind;

const TOAST_HEIGHT: u16 = 3;

/// Stack live notifications in the bottom-right corner, newest lowest.
pub fn draw_toasts(f: &mut Frame, area: Rect, state: &AppState) {
    let mut bottom = area.y + area.height;

    for toast in state.toasts.iter().rev() {
        if bottom < area.y + TOAST_HEIGHT {
            break;
        }
        let (icon, color) = match toast.kind {
            ToastKind::Success => ("✓", Color::Green),
            ToastKind::Error => ("✗", Color::Red),
        };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", icon),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(toast.message.as_str()),
            Span::raw(" "),
        ]);
        let width = (line.width() as u16 + 2).min(area.width);
        let rect = Rect::new(
            area.x + area.width - width,
            bottom - TOAST_HEIGHT,
            width,
            TOAST_HEIGHT,
        );

        f.render_widget(Clear, rect);
        let widget = Paragraph::new(line)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(widget, rect);
        bottom -= TOAST_HEIGHT;
    }
}
