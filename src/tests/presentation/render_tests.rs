use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use crate::{
    client::{Prediction, SubmitError},
    domain::FieldId,
    form::{Effect, FormEvent, FormModel, reduce},
    presentation::{UiContext, draw, submit_label},
};

fn render(model: &FormModel, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| {
            draw(
                frame,
                UiContext {
                    model,
                    title: "Heart Disease Prediction",
                    status_message: "Ready",
                    help: Some("Enter submit"),
                    tick: 0,
                },
            )
        })
        .expect("draw");
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn settled(outcome: Result<Prediction, SubmitError>) -> FormModel {
    let transition = reduce(FormModel::new(), FormEvent::Submit);
    let Some(Effect::Dispatch(request)) = transition.effect else {
        panic!("defaults should dispatch");
    };
    reduce(
        transition.model,
        FormEvent::Settled {
            attempt: request.attempt,
            outcome,
        },
    )
    .model
}

#[test]
fn idle_form_shows_title_and_submit_control() {
    let text = render(&FormModel::new(), 120, 40);
    assert!(text.contains("Heart Disease Prediction"));
    assert!(text.contains("Submit For Prediction"));
    assert!(!text.contains("Detected"));
}

#[test]
fn field_errors_render_under_their_input() {
    let model = reduce(
        FormModel::new(),
        FormEvent::FieldChanged {
            field: FieldId::Age,
            value: "abc".into(),
        },
    )
    .model;
    let text = render(&model, 120, 40);
    assert!(text.contains("Must be a valid number."));
}

#[test]
fn negative_prediction_renders_its_headline() {
    let text = render(&settled(Ok(Prediction::NotDetected)), 120, 40);
    assert!(text.contains("No Heart Disease Detected"));
}

#[test]
fn positive_prediction_renders_headline_and_advice() {
    let text = render(&settled(Ok(Prediction::Detected)), 120, 40);
    assert!(text.contains("Heart Disease Detected"));
    assert!(!text.contains("No Heart Disease Detected"));
    assert!(text.contains("Further consultation with a specialist"));
}

#[test]
fn prediction_renders_on_tall_terminals_too() {
    let text = render(&settled(Ok(Prediction::NotDetected)), 120, 60);
    assert!(text.contains("No Heart Disease Detected"));
}

#[test]
fn api_error_renders_above_the_result() {
    let text = render(&settled(Err(SubmitError::ServerReported("model offline".into()))), 120, 40);
    assert!(text.contains("Error: model offline"));
}

#[test]
fn blocked_submission_raises_the_notice() {
    let model = reduce(
        FormModel::new(),
        FormEvent::FieldChanged {
            field: FieldId::Chol,
            value: "50".into(),
        },
    )
    .model;
    let model = reduce(model, FormEvent::Submit).model;
    let text = render(&model, 120, 40);
    assert!(text.contains("Cannot submit"));
    assert!(text.contains("Please fix the errors before submitting."));
}

#[test]
fn submit_label_switches_while_submitting() {
    let model = reduce(FormModel::new(), FormEvent::Submit).model;
    assert_eq!(submit_label(&model, 0), "⠋ Analyzing...");
    assert_eq!(submit_label(&FormModel::new(), 0), "Submit For Prediction");
    let cancelling = reduce(model, FormEvent::Cancel).model;
    assert_eq!(submit_label(&cancelling, 1), "⠙ Cancelling...");
}
