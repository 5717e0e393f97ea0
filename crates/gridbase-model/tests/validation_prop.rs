use gridbase_model::{validate_field_value, FieldType, FieldValue};
use proptest::prelude::*;

proptest! {
    #[test]
    fn percentage_accepts_exactly_its_range(n in -1000.0f64..1000.0) {
        let inside = (0.0..=100.0).contains(&n);
        prop_assert_eq!(
            validate_field_value(&FieldValue::Number(n), FieldType::Percentage),
            inside
        );
    }

    #[test]
    fn rating_accepts_exactly_its_range(n in -100.0f64..100.0) {
        let inside = (0.0..=5.0).contains(&n);
        prop_assert_eq!(
            validate_field_value(&FieldValue::Number(n), FieldType::Rating),
            inside
        );
    }

    #[test]
    fn year_accepts_exactly_its_window(n in 0.0f64..4000.0) {
        let inside = (1900.0..=2100.0).contains(&n);
        prop_assert_eq!(
            validate_field_value(&FieldValue::Number(n), FieldType::Year),
            inside
        );
    }

    // Raw input arrives as text; the numeric predicates must agree with the
    // number they stringify from.
    #[test]
    fn numeric_text_agrees_with_number(n in -1000.0f64..1000.0) {
        for ty in [
            FieldType::Number,
            FieldType::Currency,
            FieldType::Percentage,
            FieldType::Rating,
            FieldType::Year,
        ] {
            let as_number = validate_field_value(&FieldValue::Number(n), ty);
            let as_text = validate_field_value(&FieldValue::Text(n.to_string()), ty);
            prop_assert_eq!(as_number, as_text, "field type {}", ty);
        }
    }

    #[test]
    fn arbitrary_text_never_panics(s in ".*") {
        for ty in FieldType::ALL {
            let _ = validate_field_value(&FieldValue::Text(s.clone()), ty);
        }
    }
}
