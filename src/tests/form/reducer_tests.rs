use serde_json::json;

use crate::{
    client::{NETWORK_FAILURE, Prediction, SubmitError},
    domain::FieldId,
    form::{Effect, FormEvent, FormModel, Notice, Phase, SubmissionRequest, reduce},
};

fn apply(model: FormModel, event: FormEvent) -> FormModel {
    reduce(model, event).model
}

fn change(model: FormModel, field: FieldId, value: &str) -> FormModel {
    apply(
        model,
        FormEvent::FieldChanged {
            field,
            value: value.to_string(),
        },
    )
}

fn submitted() -> (FormModel, SubmissionRequest) {
    let transition = reduce(FormModel::new(), FormEvent::Submit);
    match transition.effect {
        Some(Effect::Dispatch(request)) => (transition.model, request),
        other => panic!("expected a dispatch, got {other:?}"),
    }
}

#[test]
fn field_change_updates_value_and_error_together() {
    let model = change(FormModel::new(), FieldId::Chol, "700");
    assert_eq!(model.value(FieldId::Chol), "700");
    assert_eq!(model.error(FieldId::Chol), Some("Cholesterol must be 100-600."));

    let model = change(model, FieldId::Chol, "");
    assert_eq!(model.value(FieldId::Chol), "");
    assert_eq!(model.error(FieldId::Chol), None);
    assert_eq!(model.values().len(), model.errors().len());
}

#[test]
fn defaults_submit_the_numeric_payload() {
    let (model, request) = submitted();
    assert_eq!(model.phase(), Phase::Submitting { attempt: 1 });
    assert_eq!(request.attempt, 1);
    assert_eq!(
        request.payload.to_json(),
        json!({
            "age": 58, "sex": 0, "cp": 0, "trestbps": 100, "chol": 248, "fbs": 0,
            "restecg": 0, "thalach": 122, "exang": 0, "oldpeak": 1, "slope": 1,
            "ca": 0, "thal": 2
        })
    );
}

#[test]
fn any_validation_error_blocks_submission() {
    let model = change(FormModel::new(), FieldId::Age, "abc");
    let transition = reduce(model, FormEvent::Submit);
    assert_eq!(transition.effect, None);
    assert_eq!(transition.model.phase(), Phase::Idle);
    assert_eq!(transition.model.notice(), Some(Notice::SubmissionBlocked));
    assert_eq!(transition.model.attempts(), 0);
}

#[test]
fn empty_fields_are_required_at_submit_time() {
    let model = change(FormModel::new(), FieldId::Thal, "  ");
    assert!(model.can_submit());

    let transition = reduce(model, FormEvent::Submit);
    assert_eq!(transition.effect, None);
    assert_eq!(transition.model.notice(), Some(Notice::MissingFields(1)));
    assert_eq!(
        transition.model.error(FieldId::Thal),
        Some("Thal (1=N, 2=Fixed, 3=Rev) is required.")
    );
    assert!(!transition.model.can_submit());
}

#[test]
fn submit_is_ignored_while_a_request_is_in_flight() {
    let (model, _) = submitted();
    let transition = reduce(model, FormEvent::Submit);
    assert_eq!(transition.effect, None);
    assert_eq!(transition.model.attempts(), 1);
    assert!(transition.model.is_submitting());
}

#[test]
fn new_submission_clears_the_previous_result() {
    let (model, request) = submitted();
    let model = apply(
        model,
        FormEvent::Settled {
            attempt: request.attempt,
            outcome: Err(SubmitError::ServerReported("boom".into())),
        },
    );
    assert_eq!(model.api_error(), Some("boom"));

    let transition = reduce(model, FormEvent::Submit);
    assert_eq!(transition.model.api_error(), None);
    assert_eq!(transition.model.prediction(), None);
    assert!(transition.effect.is_some());
}

#[test]
fn predictions_settle_into_the_result() {
    for (outcome, expected) in [
        (Prediction::Detected, "Heart Disease Detected"),
        (Prediction::NotDetected, "No Heart Disease Detected"),
    ] {
        let (model, request) = submitted();
        let model = apply(
            model,
            FormEvent::Settled {
                attempt: request.attempt,
                outcome: Ok(outcome),
            },
        );
        assert_eq!(model.phase(), Phase::Idle);
        assert_eq!(model.prediction().map(Prediction::headline), Some(expected));
        assert_eq!(model.api_error(), None);
    }
}

#[test]
fn server_reported_errors_are_shown_verbatim() {
    let (model, request) = submitted();
    let model = apply(
        model,
        FormEvent::Settled {
            attempt: request.attempt,
            outcome: Err(SubmitError::ServerReported("X".into())),
        },
    );
    assert_eq!(model.api_error(), Some("X"));
    assert_eq!(model.prediction(), None);
}

#[test]
fn transport_failures_use_the_fallback_and_release_the_control() {
    let (model, request) = submitted();
    assert!(!model.can_submit());
    let model = apply(
        model,
        FormEvent::Settled {
            attempt: request.attempt,
            outcome: Err(SubmitError::Transport("connection refused".into())),
        },
    );
    assert_eq!(model.api_error(), Some(NETWORK_FAILURE));
    assert!(!model.is_submitting());
    assert!(model.can_submit());
}

#[test]
fn stale_outcomes_are_dropped() {
    let (model, request) = submitted();
    let before = model.clone();
    let model = apply(
        model,
        FormEvent::Settled {
            attempt: request.attempt + 7,
            outcome: Ok(Prediction::Detected),
        },
    );
    assert_eq!(model, before);
}

#[test]
fn cancelling_abandons_the_attempt() {
    let (model, request) = submitted();
    let transition = reduce(model, FormEvent::Cancel);
    assert_eq!(
        transition.effect,
        Some(Effect::Abandon {
            attempt: request.attempt
        })
    );
    assert_eq!(
        transition.model.phase(),
        Phase::Cancelling {
            attempt: request.attempt
        }
    );
    assert!(!transition.model.can_submit());

    let model = apply(
        transition.model,
        FormEvent::Settled {
            attempt: request.attempt,
            outcome: Ok(Prediction::Detected),
        },
    );
    assert_eq!(model.phase(), Phase::Idle);
    assert_eq!(model.prediction(), None);
    assert!(model.can_submit());
}

#[test]
fn no_new_submission_until_the_cancelled_attempt_returns() {
    let (model, request) = submitted();
    let model = apply(model, FormEvent::Cancel);

    let transition = reduce(model, FormEvent::Submit);
    assert_eq!(transition.effect, None);
    assert_eq!(transition.model.attempts(), 1);

    let transition = reduce(transition.model, FormEvent::Cancel);
    assert_eq!(transition.effect, None);

    let model = apply(
        transition.model,
        FormEvent::Settled {
            attempt: request.attempt,
            outcome: Err(SubmitError::Transport("timed out".into())),
        },
    );
    assert_eq!(model.api_error(), None);
    let transition = reduce(model, FormEvent::Submit);
    assert!(matches!(
        transition.effect,
        Some(Effect::Dispatch(SubmissionRequest { attempt: 2, .. }))
    ));
}

#[test]
fn fields_stay_editable_while_submitting() {
    let (model, _) = submitted();
    let model = change(model, FieldId::Age, "61");
    assert_eq!(model.value(FieldId::Age), "61");
    assert!(model.is_submitting());
}

#[test]
fn focus_wraps_in_both_directions() {
    let model = apply(FormModel::new(), FormEvent::FocusStep(-1));
    assert_eq!(model.focus(), FieldId::Thal);
    let model = apply(model, FormEvent::FocusStep(1));
    assert_eq!(model.focus(), FieldId::Age);
    let model = apply(model, FormEvent::Focus(FieldId::Ca));
    assert_eq!(model.focus(), FieldId::Ca);
}

#[test]
fn dismissing_and_clearing_touch_only_their_slots() {
    let model = change(FormModel::new(), FieldId::Sex, "4");
    let model = apply(model, FormEvent::Submit);
    assert!(model.notice().is_some());
    let model = apply(model, FormEvent::DismissNotice);
    assert_eq!(model.notice(), None);
    assert_eq!(model.error(FieldId::Sex), Some("Sex must be 0 (Female) or 1 (Male)."));

    let model = change(model, FieldId::Sex, "1");
    let (model, request) = {
        let transition = reduce(model, FormEvent::Submit);
        match transition.effect {
            Some(Effect::Dispatch(request)) => (transition.model, request),
            other => panic!("expected a dispatch, got {other:?}"),
        }
    };
    let model = apply(
        model,
        FormEvent::Settled {
            attempt: request.attempt,
            outcome: Ok(Prediction::NotDetected),
        },
    );
    let model = apply(model, FormEvent::ClearResult);
    assert_eq!(model.prediction(), None);
    assert_eq!(model.value(FieldId::Sex), "1");
}
