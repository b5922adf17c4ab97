use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{client::Prediction, form::FormModel};

const ERROR_HEIGHT: u16 = 3;
const PREDICTION_HEIGHT: u16 = 4;

/// Rows the result region needs; zero hides it.
pub fn result_height(model: &FormModel) -> u16 {
    let mut height = 0;
    if model.api_error().is_some() {
        height += ERROR_HEIGHT;
    }
    if model.prediction().is_some() {
        height += PREDICTION_HEIGHT;
    }
    height
}

pub fn render_result(frame: &mut Frame<'_>, area: Rect, model: &FormModel) {
    let mut constraints = Vec::new();
    if model.api_error().is_some() {
        constraints.push(Constraint::Length(ERROR_HEIGHT));
    }
    if model.prediction().is_some() {
        constraints.push(Constraint::Length(PREDICTION_HEIGHT));
    }
    if constraints.is_empty() {
        return;
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut slots = chunks.iter();

    if let Some(message) = model.api_error()
        && let Some(slot) = slots.next()
    {
        let style = Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD);
        let widget = Paragraph::new(format!("Error: {message}"))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        frame.render_widget(widget, *slot);
    }

    if let Some(prediction) = model.prediction()
        && let Some(slot) = slots.next()
    {
        let color = match prediction {
            Prediction::Detected => Color::Red,
            Prediction::NotDetected => Color::Green,
        };
        let lines = vec![
            Line::from(Span::styled(
                prediction.headline(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(prediction.advice(), Style::default().fg(color))),
        ];
        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        frame.render_widget(widget, *slot);
    }
}
