use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub const SUBTITLE: &str = "Enter patient details to predict heart disease probability";

pub fn render_header(frame: &mut Frame<'_>, area: Rect, title: &str) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::LightMagenta))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
