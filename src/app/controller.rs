use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::debug;

use crate::{
    client::PredictionClient,
    domain::FieldId,
    form::{Effect, FormEvent, FormModel, Transition, reduce},
};

use super::worker::SubmissionWorker;

/// What a call to [`SubmissionController::handle`] set in motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    Nothing,
    Request { attempt: u64 },
    Abandoned { attempt: u64 },
}

/// Owns the current [`FormModel`] and carries out the effects its transitions
/// ask for. Usable without a terminal.
pub struct SubmissionController {
    model: FormModel,
    worker: SubmissionWorker,
}

impl SubmissionController {
    pub fn new(model: FormModel, client: Arc<dyn PredictionClient>) -> Self {
        Self {
            model,
            worker: SubmissionWorker::new(client),
        }
    }

    pub fn model(&self) -> &FormModel {
        &self.model
    }

    pub fn into_model(self) -> FormModel {
        self.model
    }

    pub fn handle(&mut self, event: FormEvent) -> Dispatched {
        let Transition { model, effect } = reduce(std::mem::take(&mut self.model), event);
        self.model = model;
        match effect {
            Some(Effect::Dispatch(request)) => {
                let attempt = request.attempt;
                self.worker.dispatch(request);
                Dispatched::Request { attempt }
            }
            Some(Effect::Abandon { attempt }) => {
                debug!(attempt, "outcome of this attempt will be discarded");
                Dispatched::Abandoned { attempt }
            }
            None => Dispatched::Nothing,
        }
    }

    pub fn change_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.handle(FormEvent::FieldChanged {
            field,
            value: value.into(),
        });
    }

    pub fn submit(&mut self) -> Dispatched {
        self.handle(FormEvent::Submit)
    }

    /// Feeds finished requests back into the model; returns how many arrived.
    pub fn poll(&mut self) -> usize {
        let events = self.worker.drain();
        let count = events.len();
        for event in events {
            self.handle(event);
        }
        count
    }

    /// Blocks until the outstanding attempt reports back, cancelled or not,
    /// or `timeout` runs out. Returns whether the form is idle afterwards.
    pub fn wait_settled(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.model.is_busy() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match self.worker.wait(remaining) {
                Some(event) => {
                    self.handle(event);
                }
                None => return !self.model.is_busy(),
            }
        }
        true
    }
}
