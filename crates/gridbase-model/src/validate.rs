use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use thiserror::Error;

use crate::{Column, FieldType, FieldValue};

/// Length cap for single-line text and email columns.
pub const TEXT_MAX_LEN: usize = 255;
/// Length cap for textarea columns.
pub const TEXTAREA_MAX_LEN: usize = 65_535;
/// Length cap for url/link columns.
pub const URL_MAX_LEN: usize = 2_048;

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static regex"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{5,14}$").expect("static regex"))
}

fn time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("static regex"))
}

fn duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d:[0-5]\d$").expect("static regex"))
}

/// Numeric reading of a value, accepting numeric text.
///
/// Raw input that fails to coerce is stored as text and rejected here, so the
/// numeric predicates must parse strings the way the input controls hand them
/// over.
fn lenient_number(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Number(n) => n.is_finite().then_some(*n),
        FieldValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// The display-string form used by string-shape predicates (email, decimal).
fn string_form(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(s) => Some(s.clone()),
        FieldValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_date(s: &str) -> bool {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").is_ok()
}

fn parse_datetime(s: &str) -> bool {
    let s = s.trim();
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(s, fmt).is_ok())
        || parse_date(s)
}

/// Cell-level validity check: pure, synchronous, one rule per field type.
///
/// Null is always valid — absence is not a violation at display time;
/// required-ness belongs to the submission-time check
/// ([`check_column_value`]). The result feeds the display renderer's
/// invalid flag and never blocks editing.
pub fn validate_field_value(value: &FieldValue, field_type: FieldType) -> bool {
    if value.is_null() {
        return true;
    }
    match field_type {
        FieldType::Email => string_form(value)
            .map(|s| email_re().is_match(&s))
            .unwrap_or(false),
        // Float/decimal: must parse as a number AND carry a decimal point in
        // string form ("2" is an integer, not a decimal).
        FieldType::Decimal => {
            lenient_number(value).is_some()
                && string_form(value).is_some_and(|s| s.contains('.'))
        }
        FieldType::Number | FieldType::Currency => lenient_number(value).is_some(),
        FieldType::Percentage => {
            lenient_number(value).is_some_and(|n| (0.0..=100.0).contains(&n))
        }
        FieldType::Rating => lenient_number(value).is_some_and(|n| (0.0..=5.0).contains(&n)),
        FieldType::Year => lenient_number(value).is_some_and(|n| (1900.0..=2100.0).contains(&n)),
        FieldType::PhoneNumber => value.as_str().is_some_and(|s| phone_re().is_match(s)),
        FieldType::Time => value.as_str().is_some_and(|s| time_re().is_match(s)),
        FieldType::Duration => value.as_str().is_some_and(|s| duration_re().is_match(s)),
        FieldType::Date => value.as_str().is_some_and(parse_date),
        FieldType::DateTime => value.as_str().is_some_and(parse_datetime),
        FieldType::MultiSelect => matches!(value, FieldValue::List(_)),
        FieldType::Select | FieldType::Radio => matches!(value, FieldValue::Text(_)),
        FieldType::Checkbox => matches!(value, FieldValue::Bool(_)),
        FieldType::File => matches!(value, FieldValue::File(_)),
        FieldType::Map => value.is_point(),
        FieldType::Text | FieldType::Textarea | FieldType::Url | FieldType::Link => true,
    }
}

/// A way a submitted value can violate its column schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaViolation {
    #[error("value is required")]
    Required,
    #[error("value does not match field type '{field_type}'")]
    WrongShape { field_type: FieldType },
    #[error("text exceeds the {max} character limit")]
    TooLong { max: usize },
    #[error("'{value}' is not one of the column's options")]
    UnknownOption { value: String },
    #[error("rating must be a multiple of 0.5")]
    NotHalfStep,
    #[error("currency allows at most 2 decimal digits")]
    TooManyDecimals,
}

/// A violation attributed to the column key it occurred under.
#[derive(Debug, Clone, PartialEq)]
pub struct RowViolation {
    pub key: String,
    pub violation: SchemaViolation,
}

fn text_len_cap(field_type: FieldType) -> Option<usize> {
    match field_type {
        FieldType::Text | FieldType::Email => Some(TEXT_MAX_LEN),
        FieldType::Textarea => Some(TEXTAREA_MAX_LEN),
        FieldType::Url | FieldType::Link => Some(URL_MAX_LEN),
        _ => None,
    }
}

/// Count of fractional digits in the canonical string form of a number.
fn decimal_digits(value: &FieldValue) -> usize {
    string_form(value)
        .and_then(|s| {
            s.split_once('.')
                .map(|(_, frac)| frac.trim_end_matches(|c: char| !c.is_ascii_digit()).len())
        })
        .unwrap_or(0)
}

/// Submission-time schema check: stricter than [`validate_field_value`].
///
/// This is the blocking path used when a whole row form is submitted, while
/// the cell-level predicate only flags. On top of the per-type predicate it
/// enforces required-ness, text length caps, option membership, rating
/// half-steps, and currency precision.
pub fn check_column_value(column: &Column, value: &FieldValue) -> Result<(), SchemaViolation> {
    if value.is_null() {
        return if column.is_required {
            Err(SchemaViolation::Required)
        } else {
            Ok(())
        };
    }

    let field_type = column.field_type;
    if !validate_field_value(value, field_type) {
        return Err(SchemaViolation::WrongShape { field_type });
    }

    if let (Some(max), Some(s)) = (text_len_cap(field_type), value.as_str()) {
        if s.chars().count() > max {
            return Err(SchemaViolation::TooLong { max });
        }
    }

    match field_type {
        FieldType::Select | FieldType::Radio => {
            if let Some(s) = value.as_str() {
                if column.option_index(s).is_none() {
                    return Err(SchemaViolation::UnknownOption {
                        value: s.to_string(),
                    });
                }
            }
        }
        FieldType::MultiSelect => {
            if let Some(items) = value.as_list() {
                for item in items {
                    if column.option_index(item).is_none() {
                        return Err(SchemaViolation::UnknownOption {
                            value: item.clone(),
                        });
                    }
                }
            }
        }
        FieldType::Rating => {
            if let Some(n) = lenient_number(value) {
                if (n * 2.0).fract() != 0.0 {
                    return Err(SchemaViolation::NotHalfStep);
                }
            }
        }
        FieldType::Currency => {
            if decimal_digits(value) > 2 {
                return Err(SchemaViolation::TooManyDecimals);
            }
        }
        _ => {}
    }

    Ok(())
}

/// Check a whole row-creation/update payload against its columns.
///
/// Missing keys are treated as null, so required columns fail even when the
/// payload omits them entirely.
pub fn validate_row_payload(
    columns: &[Column],
    payload: &BTreeMap<String, FieldValue>,
) -> Result<(), Vec<RowViolation>> {
    static NULL: FieldValue = FieldValue::Null;
    let mut violations = Vec::new();
    for column in columns {
        let value = payload.get(&column.key).unwrap_or(&NULL);
        if let Err(violation) = check_column_value(column, value) {
            violations.push(RowViolation {
                key: column.key.clone(),
                violation,
            });
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
