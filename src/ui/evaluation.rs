use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::layout::{centered_rect, inner};

pub const BACK_LABEL: &str = "← Anterior";

/// Geometry of the evaluation card. `ratings[i]` is the clickable row of
/// `content.scale[i]`.
pub struct EvaluationLayout {
    pub card: Rect,
    pub heading: Rect,
    pub counter: Rect,
    pub gauge: Rect,
    pub question: Rect,
    pub ratings: Vec<Rect>,
    pub back: Option<Rect>,
}

pub fn compute_evaluation_layout(area: Rect, state: &AppState) -> EvaluationLayout {
    let scale_len = state.content.scale.len();
    // heading 3 + counter 1 + gauge 1 + gap 1 + question 4 + gap 1 + scale + gap 1 + back 1, plus borders
    let height = (scale_len + 13 + 2) as u16;
    let card = centered_rect(84, height, area);

    let mut constraints = vec![
        Constraint::Length(3), // block title, subtitle, description
        Constraint::Length(1), // "Pregunta N de T"
        Constraint::Length(1), // gauge
        Constraint::Length(1),
        Constraint::Length(4), // question
        Constraint::Length(1),
    ];
    constraints.extend(std::iter::repeat(Constraint::Length(1)).take(scale_len));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1)); // back
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner(card));

    let ratings = rows[6..6 + scale_len].to_vec();
    let back_row = rows[6 + scale_len + 1];
    let back = if state.responses.is_empty() {
        None
    } else {
        let width = (BACK_LABEL.chars().count() as u16 + 4).min(back_row.width);
        Some(Rect::new(back_row.x, back_row.y, width, back_row.height))
    };

    EvaluationLayout {
        card,
        heading: rows[0],
        counter: rows[1],
        gauge: rows[2],
        question: rows[4],
        ratings,
        back,
    }
}

pub fn draw_evaluation(f: &mut Frame, area: Rect, state: &AppState) {
    let layout = compute_evaluation_layout(area, state);
    let Some(block) = state.current_block() else {
        return;
    };

    f.render_widget(Block::default().borders(Borders::ALL), layout.card);

    let mut heading = vec![Line::from(Span::styled(
        block.title.as_str(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))];
    if !block.subtitle.is_empty() {
        heading.push(Line::from(block.subtitle.as_str()));
    }
    if !block.description.is_empty() {
        heading.push(Line::from(Span::styled(
            block.description.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }
    f.render_widget(Paragraph::new(heading), layout.heading);

    let total = state.total_questions();
    let position = state.progress();
    f.render_widget(
        Paragraph::new(format!("Pregunta {} de {}", position + 1, total))
            .style(Style::default().fg(Color::Gray)),
        layout.counter,
    );

    let ratio = if total == 0 {
        0.0
    } else {
        (position as f64 / total as f64).clamp(0.0, 1.0)
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Yellow).bg(Color::Rgb(40, 40, 40)))
        .ratio(ratio)
        .label(format!("{}%", (ratio * 100.0).round() as u32));
    f.render_widget(gauge, layout.gauge);

    let question = Paragraph::new(Line::from(Span::styled(
        state.current_question_text().unwrap_or_default(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(question, layout.question);

    for (option, row) in state.content.scale.iter().zip(layout.ratings.iter()) {
        let line = Line::from(vec![
            Span::styled(
                format!("  [{}] ", option.value),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(option.label.as_str()),
        ]);
        f.render_widget(Paragraph::new(line), *row);
    }

    if let Some(back) = layout.back {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!("  {}", BACK_LABEL),
                Style::default().fg(Color::Gray),
            )),
            back,
        );
    }
}
