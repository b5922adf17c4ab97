use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::form::FormModel;

use super::components::{
    render_fields, render_footer, render_header, render_notice, render_result, render_submit,
    result_height,
};

pub struct UiContext<'a> {
    pub model: &'a FormModel,
    pub title: &'a str,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    /// Animation frame for the busy indicator.
    pub tick: usize,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(result_height(ctx.model)),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let notice = ctx.model.notice();
    render_header(frame, chunks[0], ctx.title);
    render_fields(frame, chunks[1], ctx.model, notice.is_none());
    render_submit(frame, chunks[2], ctx.model, ctx.tick);
    render_result(frame, chunks[3], ctx.model);
    render_footer(frame, chunks[4], &ctx);

    if let Some(notice) = notice {
        render_notice(frame, notice);
    }
}
