use crate::domain::FieldId;

/// Raised when a field's text cannot be turned into a payload number.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCoercionError {
    pub field: FieldId,
    pub message: String,
}

impl std::fmt::Display for FieldCoercionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldCoercionError {}
