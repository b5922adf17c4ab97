use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::{FieldId, FieldRule, parse_number, rule_for};

/// Applies a key press to a field's text, returning the new text when the key
/// edits it.
///
/// Left/Right step the value: enumerated fields cycle through their allowed
/// set, ranged fields move by one unit (a tenth for `oldpeak`) and stay inside
/// the bound.
pub fn edit_value(field: FieldId, current: &str, key: &KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Left => Some(step_value(field, current, -1)),
        KeyCode::Right => Some(step_value(field, current, 1)),
        KeyCode::Char(ch) => {
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return None;
            }
            let mut next = current.to_string();
            next.push(ch);
            Some(next)
        }
        KeyCode::Backspace => {
            let mut next = current.to_string();
            next.pop()?;
            Some(next)
        }
        KeyCode::Delete => (!current.is_empty()).then(String::new),
        _ => None,
    }
}

pub fn step_value(field: FieldId, current: &str, direction: i32) -> String {
    let parsed = parse_number(current);
    match rule_for(field) {
        FieldRule::Allowed { values, .. } => {
            let len = values.len() as i32;
            let position = parsed.and_then(|value| {
                values
                    .iter()
                    .position(|allowed| *allowed as f64 == value)
            });
            let next = match position {
                Some(index) => ((index as i32 + direction) % len + len) % len,
                None if direction >= 0 => 0,
                None => len - 1,
            };
            values[next as usize].to_string()
        }
        FieldRule::Range { min, max, .. } => {
            let step = if field == FieldId::Oldpeak { 0.1 } else { 1.0 };
            let next = match parsed {
                Some(value) => value + step * direction as f64,
                None => min,
            };
            let rounded = (next.clamp(min, max) * 10.0).round() / 10.0;
            format_number(rounded)
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
