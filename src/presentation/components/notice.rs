use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::form::Notice;

const NOTICE_HEIGHT: u16 = 6;
const NOTICE_PADDING: u16 = 6;

pub fn render_notice(frame: &mut Frame<'_>, notice: Notice) {
    let message = notice.message();
    let area = notice_area(frame.area(), &message);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Cannot submit")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(widget, area);
}

/// Centered box wide enough for the message, never wider than the screen.
fn notice_area(screen: Rect, message: &str) -> Rect {
    let width_limit = screen.width.saturating_sub(2).max(1);
    let width = (message.chars().count() as u16)
        .saturating_add(NOTICE_PADDING)
        .min(width_limit);
    let [row] = Layout::vertical([Constraint::Length(NOTICE_HEIGHT)])
        .flex(Flex::Center)
        .areas(screen);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    area
}
