use crate::{
    client::Prediction,
    domain::{FieldId, FieldMap, default_values, validate_all},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting { attempt: u64 },
    /// Abandoned by the user; its thread has not reported back yet.
    Cancelling { attempt: u64 },
}

impl Phase {
    pub fn is_submitting(self) -> bool {
        matches!(self, Phase::Submitting { .. })
    }

    /// A request thread is still outstanding.
    pub fn is_busy(self) -> bool {
        !matches!(self, Phase::Idle)
    }
}

/// Blocking interstitial shown after a refused submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SubmissionBlocked,
    MissingFields(usize),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::SubmissionBlocked => "Please fix the errors before submitting.".to_string(),
            Notice::MissingFields(1) => "1 field is empty. Fill it in before submitting.".to_string(),
            Notice::MissingFields(count) => {
                format!("{count} fields are empty. Fill them in before submitting.")
            }
        }
    }
}

/// One snapshot of the form. Transitions go through [`super::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    pub(super) values: FieldMap<String>,
    pub(super) errors: FieldMap<Option<String>>,
    pub(super) focus: FieldId,
    pub(super) phase: Phase,
    pub(super) attempts: u64,
    pub(super) prediction: Option<Prediction>,
    pub(super) api_error: Option<String>,
    pub(super) notice: Option<Notice>,
}

impl Default for FormModel {
    fn default() -> Self {
        Self::with_values(default_values())
    }
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the given raw values, validating each one.
    pub fn with_values(values: FieldMap<String>) -> Self {
        let errors = validate_all(&values);
        Self {
            values,
            errors,
            focus: FieldId::Age,
            phase: Phase::Idle,
            attempts: 0,
            prediction: None,
            api_error: None,
            notice: None,
        }
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(field).as_deref()
    }

    pub fn values(&self) -> &FieldMap<String> {
        &self.values
    }

    pub fn errors(&self) -> &FieldMap<Option<String>> {
        &self.errors
    }

    pub fn focus(&self) -> FieldId {
        self.focus
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.is_submitting()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn prediction(&self) -> Option<Prediction> {
        self.prediction
    }

    pub fn api_error(&self) -> Option<&str> {
        self.api_error.as_deref()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().filter(|error| error.is_some()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Mirrors the enabled state of the submit control.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.has_errors()
    }
}
