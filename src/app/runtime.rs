use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use tracing::info;

use crate::{
    client::PredictionClient,
    domain::field_spec,
    form::{FormEvent, FormModel, Phase, edit_value},
    presentation::{self, UiContext},
};

use super::{
    controller::{Dispatched, SubmissionController},
    input::{CommandDispatch, InputRouter, KeyAction},
    keymap::KeymapContext,
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

pub(crate) struct App {
    controller: SubmissionController,
    options: UiOptions,
    title: String,
    status: StatusLine,
    input_router: InputRouter,
    exit_armed: bool,
    should_quit: bool,
    tick: usize,
}

impl App {
    pub(crate) fn new(
        model: FormModel,
        client: Arc<dyn PredictionClient>,
        options: UiOptions,
        title: String,
    ) -> Self {
        let input_router = InputRouter::new(options.keymap_store.clone());
        Self {
            controller: SubmissionController::new(model, client),
            options,
            title,
            status: StatusLine::new(),
            input_router,
            exit_armed: false,
            should_quit: false,
            tick: 0,
        }
    }

    pub(crate) fn run(mut self) -> Result<FormModel> {
        let mut terminal = TerminalGuard::enter()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(self.options.tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(width, height) => {
                        terminal.resize(Rect::new(0, 0, width, height))?;
                    }
                    _ => {}
                }
            }
            self.on_tick();
        }
        info!(attempts = self.controller.model().attempts(), "form closed");
        Ok(self.controller.into_model())
    }

    fn context(&self) -> KeymapContext {
        let model = self.controller.model();
        if model.notice().is_some() {
            KeymapContext::Notice
        } else if model.is_busy() {
            KeymapContext::Submitting
        } else {
            KeymapContext::Default
        }
    }

    fn current_help_text(&self) -> Option<String> {
        if !self.options.show_help {
            return None;
        }
        self.options.keymap_store.help_text(self.context())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let help = self.current_help_text();
        presentation::draw(
            frame,
            UiContext {
                model: self.controller.model(),
                title: &self.title,
                status_message: self.status.message(),
                help: help.as_deref(),
                tick: self.tick,
            },
        );
    }

    fn on_tick(&mut self) {
        let before = self.controller.model().phase();
        if self.controller.poll() > 0 && !self.controller.model().is_busy() {
            let model = self.controller.model();
            match before {
                Phase::Submitting { .. } => {
                    self.status.settled(model.prediction(), model.api_error())
                }
                Phase::Cancelling { .. } => self.status.ready(),
                Phase::Idle => {}
            }
            self.exit_armed = false;
        }
        if self.controller.model().is_busy() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let context = self.context();
        if context == KeymapContext::Notice {
            // Any key closes the notice.
            self.controller.handle(FormEvent::DismissNotice);
            self.status.ready();
            return;
        }

        match self.input_router.route(&key, context) {
            CommandDispatch::Action(action) => self.handle_action(action),
            CommandDispatch::Input(event) => self.handle_field_input(&event),
        }
    }

    fn handle_action(&mut self, action: KeyAction) {
        if action != KeyAction::Quit {
            self.exit_armed = false;
        }
        match action {
            KeyAction::Submit => self.on_submit(),
            KeyAction::Quit => self.on_exit(),
            KeyAction::Cancel => {
                if let Dispatched::Abandoned { attempt } =
                    self.controller.handle(FormEvent::Cancel)
                {
                    self.status.cancelled(attempt);
                }
            }
            KeyAction::Dismiss => {
                self.controller.handle(FormEvent::DismissNotice);
            }
            KeyAction::ResetStatus => self.status.ready(),
            KeyAction::ClearResult => {
                self.controller.handle(FormEvent::ClearResult);
                self.status.ready();
            }
            KeyAction::FieldStep(delta) => {
                self.controller.handle(FormEvent::FocusStep(delta));
            }
            KeyAction::Passthrough => {}
        }
    }

    fn handle_field_input(&mut self, key: &KeyEvent) {
        let model = self.controller.model();
        let field = model.focus();
        if let Some(value) = edit_value(field, model.value(field), key) {
            self.controller.change_field(field, value);
            self.status.editing(field_spec(field).label);
        }
    }

    fn on_submit(&mut self) {
        match self.controller.model().phase() {
            Phase::Submitting { .. } => {
                self.status.already_submitting();
                return;
            }
            Phase::Cancelling { attempt } => {
                self.status.cancel_pending(attempt);
                return;
            }
            Phase::Idle => {}
        }
        match self.controller.submit() {
            Dispatched::Request { attempt } => self.status.submitting(attempt),
            Dispatched::Nothing | Dispatched::Abandoned { .. } => {
                if let Some(notice) = self.controller.model().notice() {
                    self.status.blocked(notice);
                }
            }
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.controller.model().is_busy() && !self.exit_armed
        {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}
