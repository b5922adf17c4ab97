use tracing::{debug, info, warn};

use crate::{
    client::{Prediction, SubmitError},
    domain::{FIELD_COUNT, FieldId, field_spec, validate},
    logging::redact_value,
};

use super::{
    actions::{Effect, FormEvent, SubmissionRequest},
    payload::PredictionPayload,
    state::{FormModel, Notice, Phase},
};

/// Result of applying one event: the next snapshot plus an optional effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub model: FormModel,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(model: FormModel) -> Self {
        Self {
            model,
            effect: None,
        }
    }

    fn with_effect(model: FormModel, effect: Effect) -> Self {
        Self {
            model,
            effect: Some(effect),
        }
    }
}

pub fn reduce(model: FormModel, event: FormEvent) -> Transition {
    match event {
        FormEvent::FieldChanged { field, value } => Transition::to(change_field(model, field, value)),
        FormEvent::FocusStep(delta) => Transition::to(step_focus(model, delta)),
        FormEvent::Focus(field) => Transition::to(FormModel {
            focus: field,
            ..model
        }),
        FormEvent::Submit => submit(model),
        FormEvent::Settled { attempt, outcome } => Transition::to(settle(model, attempt, outcome)),
        FormEvent::Cancel => cancel(model),
        FormEvent::DismissNotice => Transition::to(FormModel {
            notice: None,
            ..model
        }),
        FormEvent::ClearResult => Transition::to(FormModel {
            prediction: None,
            api_error: None,
            ..model
        }),
    }
}

fn change_field(mut model: FormModel, field: FieldId, value: String) -> FormModel {
    let error = validate(field, &value);
    debug!(
        %field,
        value = redact_value(&value),
        valid = error.is_none(),
        "field changed"
    );
    model.values.set(field, value);
    model.errors.set(field, error);
    model
}

fn step_focus(mut model: FormModel, delta: i32) -> FormModel {
    let len = FIELD_COUNT as i32;
    let next = ((model.focus.index() as i32 + delta) % len + len) % len;
    if let Some(field) = FieldId::from_index(next as usize) {
        model.focus = field;
    }
    model
}

fn submit(mut model: FormModel) -> Transition {
    if model.phase.is_busy() {
        debug!("submit ignored while a request is in flight");
        return Transition::to(model);
    }

    if model.has_errors() {
        info!(errors = model.error_count(), "submission blocked by validation errors");
        model.notice = Some(Notice::SubmissionBlocked);
        return Transition::to(model);
    }

    let missing = FieldId::ALL
        .into_iter()
        .filter(|field| model.values[*field].trim().is_empty())
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        info!(missing = missing.len(), "submission blocked by empty fields");
        for field in &missing {
            model
                .errors
                .set(*field, Some(field_spec(*field).required_message()));
        }
        model.notice = Some(Notice::MissingFields(missing.len()));
        return Transition::to(model);
    }

    let payload = match PredictionPayload::from_values(&model.values) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(field = %err.field, "field could not be converted for submission");
            model.errors.set(err.field, Some(err.message));
            model.notice = Some(Notice::SubmissionBlocked);
            return Transition::to(model);
        }
    };

    model.prediction = None;
    model.api_error = None;
    model.notice = None;
    model.attempts += 1;
    let attempt = model.attempts;
    model.phase = Phase::Submitting { attempt };
    info!(attempt, "submitting prediction request");

    Transition::with_effect(model, Effect::Dispatch(SubmissionRequest { attempt, payload }))
}

fn settle(
    mut model: FormModel,
    attempt: u64,
    outcome: Result<Prediction, SubmitError>,
) -> FormModel {
    match model.phase {
        Phase::Submitting { attempt: current } if current == attempt => {}
        Phase::Cancelling { attempt: current } if current == attempt => {
            debug!(attempt, "cancelled attempt finished, outcome dropped");
            model.phase = Phase::Idle;
            return model;
        }
        _ => {
            debug!(attempt, "dropping outcome of an unknown attempt");
            return model;
        }
    }

    model.phase = Phase::Idle;
    match outcome {
        Ok(prediction) => {
            info!(attempt, prediction = prediction.as_wire(), "prediction received");
            model.prediction = Some(prediction);
        }
        Err(err) => {
            warn!(attempt, error = %err, "prediction attempt failed");
            model.api_error = Some(err.user_message());
        }
    }
    model
}

fn cancel(mut model: FormModel) -> Transition {
    match model.phase {
        Phase::Submitting { attempt } => {
            info!(attempt, "prediction request abandoned");
            model.phase = Phase::Cancelling { attempt };
            Transition::with_effect(model, Effect::Abandon { attempt })
        }
        Phase::Cancelling { .. } | Phase::Idle => Transition::to(model),
    }
}
