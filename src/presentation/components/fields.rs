use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{FIELD_COUNT, FieldId, field_spec},
    form::FormModel,
};

/// Border plus one value line plus up to two error lines.
pub const CELL_HEIGHT: u16 = 5;

pub fn column_count(width: u16) -> usize {
    match width {
        w if w >= 96 => 3,
        w if w >= 60 => 2,
        _ => 1,
    }
}

/// First grid row to draw so the focused field stays on screen.
pub fn first_visible_row(focus_row: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 || focus_row < visible_rows {
        0
    } else {
        focus_row + 1 - visible_rows
    }
}

pub fn render_fields(frame: &mut Frame<'_>, area: Rect, model: &FormModel, enable_cursor: bool) {
    let columns = column_count(area.width);
    let total_rows = FIELD_COUNT.div_ceil(columns);
    let visible_rows = ((area.height / CELL_HEIGHT) as usize).clamp(1, total_rows);
    let focus_row = model.focus().index() / columns;
    let first_row = first_visible_row(focus_row, visible_rows);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); visible_rows])
        .split(area);

    for (slot, row_area) in rows.iter().enumerate() {
        let row = first_row + slot;
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (column, cell) in cells.iter().enumerate() {
            let Some(field) = FieldId::from_index(row * columns + column) else {
                break;
            };
            let focused = field == model.focus();
            render_cell(frame, *cell, model, field, focused, enable_cursor && focused);
        }
    }
}

fn render_cell(
    frame: &mut Frame<'_>,
    area: Rect,
    model: &FormModel,
    field: FieldId,
    focused: bool,
    place_cursor: bool,
) {
    let spec = field_spec(field);
    let error = model.error(field);
    let border_style = match (focused, error.is_some()) {
        (_, true) => Style::default().fg(Color::Red),
        (true, false) => Style::default().fg(Color::Yellow),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let title_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(spec.label, title_style));
    let inner = block.inner(area);

    let value = model.value(field);
    let value_style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let mut lines = vec![Line::from(Span::styled(value.to_string(), value_style))];
    match error {
        Some(message) => {
            let width = (inner.width as usize).max(8);
            for segment in wrap(message, width).into_iter().take(2) {
                lines.push(Line::from(Span::styled(
                    segment.into_owned(),
                    Style::default().fg(Color::Red),
                )));
            }
        }
        None => lines.push(Line::from(Span::styled(
            format!("allowed: {}", spec.rule.hint()),
            Style::default().fg(Color::DarkGray),
        ))),
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);

    if place_cursor && inner.width > 0 && inner.height > 0 {
        let offset = (UnicodeWidthStr::width(value) as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + offset, inner.y));
    }
}
