use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::super::view::UiContext;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let error_count = ctx.model.error_count();
    let badge = if error_count > 0 {
        Span::styled(
            format!("[! {error_count}]"),
            Style::default().fg(Color::Red).bg(Color::Black),
        )
    } else {
        Span::styled("[ok]", Style::default().fg(Color::Green))
    };
    let mut status = ctx.status_message.to_string();
    if status.trim().is_empty() {
        status = "Ready".to_string();
    }
    let status_widget = Paragraph::new(Line::from(vec![
        badge,
        Span::raw(" "),
        Span::raw(status),
    ]));
    frame.render_widget(status_widget, rows[0]);

    if let Some(help) = ctx.help {
        let help_widget = Paragraph::new(help.to_string())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help_widget, rows[1]);
    }
}
