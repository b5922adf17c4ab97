mod catalog;
mod field;
mod rules;

pub use catalog::{FieldSpec, catalog, default_values, field_spec};
pub use field::{FIELD_COUNT, FieldId, FieldMap, UnknownField};
pub use rules::{FieldRule, INVALID_NUMBER, parse_number, rule_for, validate, validate_all};
