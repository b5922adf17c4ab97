use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::{FormModel, Phase};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn submit_label(model: &FormModel, tick: usize) -> String {
    match model.phase() {
        Phase::Submitting { .. } => format!("{} Analyzing...", SPINNER[tick % SPINNER.len()]),
        Phase::Cancelling { .. } => format!("{} Cancelling...", SPINNER[tick % SPINNER.len()]),
        Phase::Idle => "Submit For Prediction".to_string(),
    }
}

pub fn render_submit(frame: &mut Frame<'_>, area: Rect, model: &FormModel, tick: usize) {
    let style = if model.can_submit() {
        Style::default()
            .fg(Color::White)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    };
    let button = Paragraph::new(submit_label(model, tick))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}
