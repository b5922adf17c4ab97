use std::{fmt, sync::LazyLock};

use jsonschema::{Validator, validator_for};
use serde::Deserialize;
use serde_json::{Value, json};

use super::error::SubmitError;

/// Binary label returned by the inference service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    NotDetected,
    Detected,
}

impl Prediction {
    pub fn from_wire(value: &Value) -> Option<Self> {
        match value.as_f64()? {
            v if v == 1.0 => Some(Prediction::Detected),
            v if v == 0.0 => Some(Prediction::NotDetected),
            _ => None,
        }
    }

    pub fn as_wire(self) -> u8 {
        match self {
            Prediction::NotDetected => 0,
            Prediction::Detected => 1,
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Prediction::Detected => "Heart Disease Detected",
            Prediction::NotDetected => "No Heart Disease Detected",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Prediction::Detected => "Further consultation with a specialist is highly recommended.",
            Prediction::NotDetected => "The model indicates a low probability of heart disease.",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())
    }
}

static ENVELOPE: LazyLock<Validator> = LazyLock::new(|| {
    let schema = json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "error": { "type": "string" },
            "prediction": { "type": "number" }
        },
        "anyOf": [
            { "required": ["error"], "properties": { "error": { "minLength": 1 } } },
            { "required": ["prediction"] }
        ]
    });
    validator_for(&schema).expect("prediction envelope schema must compile")
});

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    prediction: Option<Value>,
}

/// Interprets a successful response body.
pub fn interpret_body(body: &str) -> Result<Prediction, SubmitError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| SubmitError::Decode(err.to_string()))?;
    interpret_value(value)
}

pub fn interpret_value(value: Value) -> Result<Prediction, SubmitError> {
    if !ENVELOPE.is_valid(&value) {
        let issues = ENVELOPE
            .iter_errors(&value)
            .map(|error| error.to_string())
            .collect::<Vec<_>>();
        return Err(SubmitError::Malformed(issues.join("; ")));
    }
    let envelope: Envelope =
        serde_json::from_value(value).map_err(|err| SubmitError::Malformed(err.to_string()))?;

    if let Some(message) = envelope.error.filter(|message| !message.is_empty()) {
        return Err(SubmitError::ServerReported(message));
    }
    let Some(raw) = envelope.prediction else {
        return Err(SubmitError::Malformed("missing prediction".to_string()));
    };
    Prediction::from_wire(&raw).ok_or(SubmitError::UnexpectedPrediction(raw))
}
