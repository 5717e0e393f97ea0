use gridbase_model::{validate_field_value, Column, FieldType, FieldValue};

use crate::coerce::format_field_value;

/// Number of deterministic color buckets for option badges and pills.
pub const COLOR_BUCKETS: usize = 5;

/// Formatting options that affect rendered cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Prefix for currency cells.
    pub currency_symbol: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
        }
    }
}

/// One pill of a multiselect cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pill {
    pub label: String,
    /// Deterministic color bucket, `option index % COLOR_BUCKETS`.
    pub bucket: u8,
}

/// Read-only presentation of one cell.
///
/// This is intended for UI rendering: it provides the user-visible text plus
/// the hints a view needs (icon kind, color bucket, fill count), leaving
/// widgets and styling to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayFragment {
    /// Checkbox cell: a check or empty icon.
    Check { checked: bool },
    /// Select/radio cell: a single colored badge.
    Badge { label: String, bucket: u8 },
    /// Multiselect cell: one pill per selected value.
    Pills(Vec<Pill>),
    /// Url/link cell. Activation opens a new browsing context and must not
    /// reach row-level click handlers.
    Anchor { href: String, text: String },
    /// Rating cell: `filled` of `slots` fixed slots.
    Rating { filled: u8, slots: u8 },
    /// Currency cell: symbol prefix, fixed two decimals.
    Money { text: String },
    /// Percentage cell: numeric value suffixed with `%`.
    Percent { text: String },
    /// Map cell: coordinate or address text with a location glyph.
    Location { text: String },
    /// Generic text. `invalid` flags values the cell-level validator rejects
    /// so the view can render them in an alternate color.
    Text { text: String, invalid: bool },
}

fn bucket_for(column: &Column, label: &str, fallback_position: usize) -> u8 {
    let index = column.option_index(label).unwrap_or(fallback_position);
    (index % COLOR_BUCKETS) as u8
}

fn numeric(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Number(n) => Some(*n),
        FieldValue::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Fallback rendering shared by all text-like types: the coerced display
/// string, flagged when the validator rejects the value.
fn text_fragment(column: &Column, value: &FieldValue) -> DisplayFragment {
    DisplayFragment::Text {
        text: format_field_value(value),
        invalid: !validate_field_value(value, column.field_type),
    }
}

/// Render one cell for read-only display.
///
/// Pure: no side effects, no hidden state — identical inputs always produce
/// identical fragments.
pub fn render_display(
    column: &Column,
    value: &FieldValue,
    options: &FormatOptions,
) -> DisplayFragment {
    match column.field_type {
        FieldType::Checkbox => DisplayFragment::Check {
            checked: matches!(value, FieldValue::Bool(true)),
        },
        FieldType::Select | FieldType::Radio => match value {
            FieldValue::Text(label) => DisplayFragment::Badge {
                label: label.clone(),
                bucket: bucket_for(column, label, 0),
            },
            _ => text_fragment(column, value),
        },
        FieldType::MultiSelect => match value {
            FieldValue::List(items) => DisplayFragment::Pills(
                items
                    .iter()
                    .enumerate()
                    .map(|(position, label)| Pill {
                        label: label.clone(),
                        bucket: bucket_for(column, label, position),
                    })
                    .collect(),
            ),
            _ => text_fragment(column, value),
        },
        FieldType::Url | FieldType::Link => match value {
            FieldValue::Text(href) => DisplayFragment::Anchor {
                href: href.clone(),
                text: href.clone(),
            },
            _ => text_fragment(column, value),
        },
        FieldType::Rating => {
            let filled = numeric(value)
                .map(|n| n.round().clamp(0.0, 5.0) as u8)
                .unwrap_or(0);
            DisplayFragment::Rating { filled, slots: 5 }
        }
        FieldType::Currency => match numeric(value) {
            Some(n) => DisplayFragment::Money {
                text: format!("{}{:.2}", options.currency_symbol, n),
            },
            None => text_fragment(column, value),
        },
        FieldType::Percentage => match numeric(value) {
            Some(n) => DisplayFragment::Percent {
                text: format!("{n}%"),
            },
            None => text_fragment(column, value),
        },
        FieldType::Map => match value {
            FieldValue::Point(_) => DisplayFragment::Location {
                text: format_field_value(value),
            },
            _ => text_fragment(column, value),
        },
        FieldType::Text
        | FieldType::Textarea
        | FieldType::Number
        | FieldType::Decimal
        | FieldType::Email
        | FieldType::PhoneNumber
        | FieldType::Date
        | FieldType::Time
        | FieldType::Year
        | FieldType::DateTime
        | FieldType::Duration
        | FieldType::File => text_fragment(column, value),
    }
}
