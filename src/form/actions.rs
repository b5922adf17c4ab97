use crate::{
    client::{Prediction, SubmitError},
    domain::FieldId,
};

use super::payload::PredictionPayload;

/// Everything that can happen to the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    FieldChanged {
        field: FieldId,
        value: String,
    },
    FocusStep(i32),
    Focus(FieldId),
    Submit,
    Settled {
        attempt: u64,
        outcome: Result<Prediction, SubmitError>,
    },
    Cancel,
    DismissNotice,
    ClearResult,
}

/// Side effect requested by a transition; the runtime carries it out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Dispatch(SubmissionRequest),
    Abandon { attempt: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    pub attempt: u64,
    pub payload: PredictionPayload,
}
