use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};

use crate::domain::{FieldId, FieldMap, INVALID_NUMBER, parse_number};

use super::error::FieldCoercionError;

// Largest integer an f64 represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Numeric request body, keyed by wire name in form order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionPayload {
    values: IndexMap<&'static str, Number>,
}

impl PredictionPayload {
    pub fn from_values(values: &FieldMap<String>) -> Result<Self, FieldCoercionError> {
        let mut map = IndexMap::with_capacity(values.len());
        for (field, raw) in values.iter() {
            map.insert(field.as_str(), to_number(field, raw)?);
        }
        Ok(Self { values: map })
    }

    pub fn get(&self, field: FieldId) -> Option<&Number> {
        self.values.get(field.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(key, number)| (key.to_string(), Value::Number(number.clone())))
                .collect(),
        )
    }
}

fn to_number(field: FieldId, raw: &str) -> Result<Number, FieldCoercionError> {
    let coercion_error = || FieldCoercionError {
        field,
        message: INVALID_NUMBER.to_string(),
    };
    let value = parse_number(raw).ok_or_else(coercion_error)?;
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        return Ok(Number::from(value as i64));
    }
    Number::from_f64(value).ok_or_else(coercion_error)
}
