use super::{
    field::{FieldId, FieldMap},
    rules::{FieldRule, rule_for},
};

/// Display metadata for one form input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub default: &'static str,
    pub rule: FieldRule,
}

impl FieldSpec {
    pub fn required_message(&self) -> String {
        format!("{} is required.", self.label)
    }
}

pub fn field_spec(id: FieldId) -> FieldSpec {
    let (label, default) = match id {
        FieldId::Age => ("Age", "58"),
        FieldId::Sex => ("Sex (1=M, 0=F)", "0"),
        FieldId::Cp => ("Chest Pain Type (0-3)", "0"),
        FieldId::Trestbps => ("Resting Blood Pressure", "100"),
        FieldId::Chol => ("Serum Cholesterol (mg/dl)", "248"),
        FieldId::Fbs => ("Fasting Blood Sugar > 120 (1=T, 0=F)", "0"),
        FieldId::Restecg => ("Resting ECG (0-2)", "0"),
        FieldId::Thalach => ("Max Heart Rate Achieved", "122"),
        FieldId::Exang => ("Exercise Induced Angina (1=Y, 0=N)", "0"),
        FieldId::Oldpeak => ("Oldpeak", "1"),
        FieldId::Slope => ("Slope of ST Segment", "1"),
        FieldId::Ca => ("Major Vessels Colored (0-3)", "0"),
        FieldId::Thal => ("Thal (1=N, 2=Fixed, 3=Rev)", "2"),
    };
    FieldSpec {
        id,
        label,
        default,
        rule: rule_for(id),
    }
}

pub fn catalog() -> impl Iterator<Item = FieldSpec> {
    FieldId::ALL.into_iter().map(field_spec)
}

/// The literal values the form starts with.
pub fn default_values() -> FieldMap<String> {
    FieldMap::from_fn(|id| field_spec(id).default.to_string())
}
