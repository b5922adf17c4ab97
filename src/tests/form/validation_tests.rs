use crate::domain::{FieldId, FieldRule, INVALID_NUMBER, catalog, rule_for, validate};

#[test]
fn range_rules_reject_values_just_outside_the_bound() {
    for spec in catalog() {
        let FieldRule::Range { min, max, message } = spec.rule else {
            continue;
        };
        for inside in [min, max, (min + max) / 2.0] {
            assert_eq!(validate(spec.id, &inside.to_string()), None, "{}", spec.id);
        }
        for outside in [min - 0.5, max + 0.5] {
            assert_eq!(
                validate(spec.id, &outside.to_string()).as_deref(),
                Some(message),
                "{} = {outside}",
                spec.id
            );
        }
    }
}

#[test]
fn enumerated_rules_accept_exactly_their_members() {
    for spec in catalog() {
        let FieldRule::Allowed { values, message } = spec.rule else {
            continue;
        };
        for value in values {
            assert_eq!(validate(spec.id, &value.to_string()), None, "{}", spec.id);
        }
        let above = values.iter().max().copied().unwrap_or_default() + 1;
        for outside in [-1, above] {
            assert_eq!(
                validate(spec.id, &outside.to_string()).as_deref(),
                Some(message),
                "{} = {outside}",
                spec.id
            );
        }
    }
}

#[test]
fn empty_input_is_never_an_error() {
    for field in FieldId::ALL {
        assert_eq!(validate(field, ""), None);
    }
}

#[test]
fn text_input_is_not_a_number() {
    for field in FieldId::ALL {
        assert_eq!(validate(field, "abc").as_deref(), Some(INVALID_NUMBER));
    }
}

#[test]
fn every_field_has_exactly_one_rule_message() {
    let messages = FieldId::ALL
        .into_iter()
        .map(|field| rule_for(field).message())
        .collect::<Vec<_>>();
    assert_eq!(messages.len(), 13);
    assert!(messages.iter().all(|message| message.ends_with('.')));
}
