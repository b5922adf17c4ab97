use super::field::{FieldId, FieldMap};

pub const INVALID_NUMBER: &str = "Must be a valid number.";

/// Static validation policy attached to a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    /// Inclusive numeric bound.
    Range {
        min: f64,
        max: f64,
        message: &'static str,
    },
    /// Value must equal one of the listed integers.
    Allowed {
        values: &'static [i64],
        message: &'static str,
    },
}

impl FieldRule {
    pub fn message(&self) -> &'static str {
        match self {
            FieldRule::Range { message, .. } | FieldRule::Allowed { message, .. } => message,
        }
    }

    pub fn accepts(&self, value: f64) -> bool {
        match self {
            FieldRule::Range { min, max, .. } => value >= *min && value <= *max,
            FieldRule::Allowed { values, .. } => {
                values.iter().any(|allowed| *allowed as f64 == value)
            }
        }
    }

    /// Short human hint such as `1-120` or `0/1/2`.
    pub fn hint(&self) -> String {
        match self {
            FieldRule::Range { min, max, .. } => format!("{min}-{max}"),
            FieldRule::Allowed { values, .. } => values
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join("/"),
        }
    }
}

pub fn rule_for(field: FieldId) -> FieldRule {
    use FieldRule::{Allowed, Range};

    match field {
        FieldId::Age => Range {
            min: 1.0,
            max: 120.0,
            message: "Age must be between 1 and 120.",
        },
        FieldId::Sex => Allowed {
            values: &[0, 1],
            message: "Sex must be 0 (Female) or 1 (Male).",
        },
        FieldId::Cp => Allowed {
            values: &[0, 1, 2, 3],
            message: "Chest Pain type must be 0-3.",
        },
        FieldId::Trestbps => Range {
            min: 80.0,
            max: 220.0,
            message: "BP must be between 80 and 220.",
        },
        FieldId::Chol => Range {
            min: 100.0,
            max: 600.0,
            message: "Cholesterol must be 100-600.",
        },
        FieldId::Fbs => Allowed {
            values: &[0, 1],
            message: "Fasting Blood Sugar must be 0 or 1.",
        },
        FieldId::Restecg => Allowed {
            values: &[0, 1, 2],
            message: "Resting ECG must be 0, 1, or 2.",
        },
        FieldId::Thalach => Range {
            min: 60.0,
            max: 220.0,
            message: "Max Heart Rate must be 60-220.",
        },
        FieldId::Exang => Allowed {
            values: &[0, 1],
            message: "Exercise Angina must be 0 or 1.",
        },
        FieldId::Oldpeak => Range {
            min: 0.0,
            max: 10.0,
            message: "Oldpeak must be between 0 and 10.",
        },
        FieldId::Slope => Allowed {
            values: &[0, 1, 2],
            message: "Slope must be 0, 1, or 2.",
        },
        FieldId::Ca => Allowed {
            values: &[0, 1, 2, 3],
            message: "CA must be between 0 and 3.",
        },
        FieldId::Thal => Allowed {
            values: &[0, 1, 2, 3],
            message: "Thal must be between 0 and 3.",
        },
    }
}

/// Parses raw field text the way the form does: surrounding whitespace is
/// ignored, and `NaN` and infinities are not numbers.
pub fn parse_number(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Checks one raw input against its field rule.
///
/// Empty input is "not yet entered" and never an error here; the submit gate
/// handles required fields separately.
pub fn validate(field: FieldId, raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    let Some(value) = parse_number(raw) else {
        return Some(INVALID_NUMBER.to_string());
    };
    let rule = rule_for(field);
    if rule.accepts(value) {
        None
    } else {
        Some(rule.message().to_string())
    }
}

pub fn validate_all(values: &FieldMap<String>) -> FieldMap<Option<String>> {
    values.map(|field, raw| validate(field, raw))
}
