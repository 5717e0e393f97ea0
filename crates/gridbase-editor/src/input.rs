use gridbase_format::{to_input_value, InputSeed};
use gridbase_model::{Column, FieldType, FieldValue, FileRef, GeoPoint};

/// Input-mode hint for single-line text controls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextMode {
    Plain,
    Email,
    Phone,
    Url,
    /// Free text with an `HH:MM:SS` placeholder.
    Duration,
}

/// The native control a cell renders while editing, seeded with its current
/// value.
///
/// The grid host maps these onto actual widgets; the enum only fixes which
/// control each field type gets and what seed it starts from.
#[derive(Clone, Debug, PartialEq)]
pub enum EditControl {
    TextBox { seed: String, mode: TextMode },
    TextArea { seed: String },
    NumberBox { seed: Option<f64>, step: f64 },
    Checkbox { checked: bool },
    Dropdown { options: Vec<String>, selected: Option<String> },
    RadioGroup { options: Vec<String>, selected: Option<String> },
    MultiDropdown { options: Vec<String>, selected: Vec<String> },
    CoordPair { lat: Option<f64>, lng: Option<f64> },
    FilePicker { current: Option<FileRef> },
    DatePicker { seed: String },
    TimePicker { seed: String },
    DateTimePicker { seed: String },
}

fn text_seed(value: &FieldValue) -> String {
    to_input_value(value).into_text()
}

fn number_seed(value: &FieldValue) -> Option<f64> {
    match to_input_value(value) {
        InputSeed::Number(n) => Some(n),
        InputSeed::Text(s) => s.trim().parse().ok(),
    }
}

/// Pick the edit control for a cell.
pub fn control_for(column: &Column, value: &FieldValue) -> EditControl {
    let options = || column.options.clone();
    match column.field_type {
        FieldType::Textarea => EditControl::TextArea {
            seed: text_seed(value),
        },
        FieldType::Number => EditControl::NumberBox {
            seed: number_seed(value),
            step: 1.0,
        },
        FieldType::Decimal | FieldType::Percentage => EditControl::NumberBox {
            seed: number_seed(value),
            step: 0.1,
        },
        FieldType::Currency => EditControl::NumberBox {
            seed: number_seed(value),
            step: 0.01,
        },
        FieldType::Rating => EditControl::NumberBox {
            seed: number_seed(value),
            step: 0.5,
        },
        FieldType::Year => EditControl::NumberBox {
            seed: number_seed(value),
            step: 1.0,
        },
        FieldType::Checkbox => EditControl::Checkbox {
            checked: matches!(value, FieldValue::Bool(true)),
        },
        FieldType::Select => EditControl::Dropdown {
            options: options(),
            selected: value.as_str().map(str::to_string),
        },
        FieldType::Radio => EditControl::RadioGroup {
            options: options(),
            selected: value.as_str().map(str::to_string),
        },
        FieldType::MultiSelect => EditControl::MultiDropdown {
            options: options(),
            selected: value.as_list().map(<[String]>::to_vec).unwrap_or_default(),
        },
        FieldType::Map => {
            let point = value.as_point();
            EditControl::CoordPair {
                lat: point.map(|p| p.lat),
                lng: point.map(|p| p.lng),
            }
        }
        FieldType::File => EditControl::FilePicker {
            current: value.as_file().cloned(),
        },
        FieldType::Date => EditControl::DatePicker {
            seed: text_seed(value),
        },
        FieldType::Time => EditControl::TimePicker {
            seed: text_seed(value),
        },
        FieldType::DateTime => EditControl::DateTimePicker {
            seed: text_seed(value),
        },
        FieldType::Email => EditControl::TextBox {
            seed: text_seed(value),
            mode: TextMode::Email,
        },
        FieldType::PhoneNumber => EditControl::TextBox {
            seed: text_seed(value),
            mode: TextMode::Phone,
        },
        FieldType::Url | FieldType::Link => EditControl::TextBox {
            seed: text_seed(value),
            mode: TextMode::Url,
        },
        FieldType::Duration => EditControl::TextBox {
            seed: text_seed(value),
            mode: TextMode::Duration,
        },
        FieldType::Text => EditControl::TextBox {
            seed: text_seed(value),
            mode: TextMode::Plain,
        },
    }
}

/// Which coordinate of a map cell changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CoordAxis {
    Lat,
    Lng,
}

/// A native control event, as the hosting view reports it.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Text-like control changed; carries the raw string, coercion included.
    TextChanged(String),
    /// Checkbox toggled.
    Toggled(bool),
    /// Select/radio option picked.
    OptionPicked(String),
    /// Multiselect option toggled on or off.
    OptionToggled(String),
    /// One coordinate field of a map cell edited.
    CoordChanged { axis: CoordAxis, raw: String },
    /// File chosen in a file picker.
    FilePicked(FileRef),
}

/// Result of translating an input event.
#[derive(Clone, Debug, PartialEq)]
pub struct EventOutcome {
    /// The new canonical cell value.
    pub value: FieldValue,
    /// True when the event itself is the commit point (file pick: a file
    /// picker has no blur-to-save affordance, so choosing a file saves
    /// immediately).
    pub commit: bool,
}

impl EventOutcome {
    fn buffered(value: FieldValue) -> Self {
        Self {
            value,
            commit: false,
        }
    }
}

/// Coerce raw text from a control into the value a field type stores.
///
/// Numeric types parse; anything that fails to parse stays the raw string so
/// validation, not the editor, rejects it. Empty input clears the cell.
fn coerce_text(raw: String, field_type: FieldType) -> FieldValue {
    if raw.is_empty() {
        return FieldValue::Null;
    }
    if field_type.is_numeric() {
        if let Ok(n) = raw.trim().parse::<f64>() {
            return FieldValue::Number(n);
        }
    }
    FieldValue::Text(raw)
}

/// Translate a native control event into the canonical cell value.
///
/// `current` is the buffered value the control was rendered from; events that
/// edit part of a composite value (multiselect toggles, coordinate edits)
/// merge into it rather than replacing it.
pub fn translate_event(column: &Column, current: &FieldValue, event: InputEvent) -> EventOutcome {
    match event {
        InputEvent::TextChanged(raw) => {
            EventOutcome::buffered(coerce_text(raw, column.field_type))
        }
        InputEvent::Toggled(checked) => EventOutcome::buffered(FieldValue::Bool(checked)),
        InputEvent::OptionPicked(option) => EventOutcome::buffered(FieldValue::Text(option)),
        InputEvent::OptionToggled(option) => {
            let mut selection = current.as_list().map(<[String]>::to_vec).unwrap_or_default();
            match selection.iter().position(|s| s == &option) {
                Some(index) => {
                    selection.remove(index);
                }
                None => selection.push(option),
            }
            EventOutcome::buffered(FieldValue::List(selection))
        }
        InputEvent::CoordChanged { axis, raw } => {
            let mut point = current
                .as_point()
                .cloned()
                .unwrap_or_else(|| GeoPoint::new(0.0, 0.0));
            // Unparsable coordinate text leaves that axis untouched.
            if let Ok(n) = raw.trim().parse::<f64>() {
                match axis {
                    CoordAxis::Lat => point.lat = n,
                    CoordAxis::Lng => point.lng = n,
                }
            }
            EventOutcome::buffered(FieldValue::Point(point))
        }
        InputEvent::FilePicked(file) => EventOutcome {
            value: FieldValue::File(file),
            commit: true,
        },
    }
}

/// A key press the editor cares about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyPress {
    Enter { shift: bool },
    Escape,
}

/// What a key press does to the open cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Commit,
    Cancel,
    None,
}

/// Uniform keyboard protocol across all text-like controls: Enter (without
/// Shift) saves, Escape cancels. Shift+Enter is left to the control (newline
/// in a textarea).
pub fn key_action(key: KeyPress) -> KeyAction {
    match key {
        KeyPress::Enter { shift: false } => KeyAction::Commit,
        KeyPress::Enter { shift: true } => KeyAction::None,
        KeyPress::Escape => KeyAction::Cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn col(field_type: FieldType) -> Column {
        Column::new("c1", "k", field_type)
    }

    #[test]
    fn checkbox_toggle_produces_a_boolean() {
        let out = translate_event(
            &col(FieldType::Checkbox),
            &FieldValue::Null,
            InputEvent::Toggled(true),
        );
        assert_eq!(out.value, FieldValue::Bool(true));
        assert!(!out.commit);
    }

    #[test]
    fn multiselect_toggle_preserves_selection_order() {
        let column = col(FieldType::MultiSelect).with_options(["x", "y"]);
        let current = FieldValue::from(vec!["x".to_string()]);

        let on = translate_event(&column, &current, InputEvent::OptionToggled("y".to_string()));
        assert_eq!(
            on.value,
            FieldValue::from(vec!["x".to_string(), "y".to_string()])
        );

        let off = translate_event(&column, &on.value, InputEvent::OptionToggled("x".to_string()));
        assert_eq!(off.value, FieldValue::from(vec!["y".to_string()]));
    }

    #[test]
    fn coordinate_edit_merges_one_axis() {
        let column = col(FieldType::Map);
        let current = FieldValue::Point(GeoPoint::new(1.0, 2.0));
        let out = translate_event(
            &column,
            &current,
            InputEvent::CoordChanged {
                axis: CoordAxis::Lng,
                raw: "5".to_string(),
            },
        );
        assert_eq!(out.value, FieldValue::Point(GeoPoint::new(1.0, 5.0)));
    }

    #[test]
    fn unparsable_coordinate_leaves_the_axis_untouched() {
        let column = col(FieldType::Map);
        let current = FieldValue::Point(GeoPoint::new(1.0, 2.0));
        let out = translate_event(
            &column,
            &current,
            InputEvent::CoordChanged {
                axis: CoordAxis::Lat,
                raw: "north".to_string(),
            },
        );
        assert_eq!(out.value, current);
    }

    #[test]
    fn numeric_text_parses_but_garbage_stays_raw() {
        let column = col(FieldType::Number);
        let parsed =
            translate_event(&column, &FieldValue::Null, InputEvent::TextChanged("42".into()));
        assert_eq!(parsed.value, FieldValue::Number(42.0));

        // Coercion impossibility: the raw string flows through unchanged and
        // validation rejects it later.
        let raw =
            translate_event(&column, &FieldValue::Null, InputEvent::TextChanged("42px".into()));
        assert_eq!(raw.value, FieldValue::Text("42px".to_string()));
    }

    #[test]
    fn empty_text_clears_the_cell() {
        let out = translate_event(
            &col(FieldType::Text),
            &FieldValue::from("old"),
            InputEvent::TextChanged(String::new()),
        );
        assert_eq!(out.value, FieldValue::Null);
    }

    #[test]
    fn file_pick_commits_immediately() {
        let out = translate_event(
            &col(FieldType::File),
            &FieldValue::Null,
            InputEvent::FilePicked(FileRef::new("a.png")),
        );
        assert!(out.commit);
        assert_eq!(out.value, FieldValue::File(FileRef::new("a.png")));
    }

    #[test]
    fn keyboard_protocol() {
        assert_eq!(key_action(KeyPress::Enter { shift: false }), KeyAction::Commit);
        assert_eq!(key_action(KeyPress::Enter { shift: true }), KeyAction::None);
        assert_eq!(key_action(KeyPress::Escape), KeyAction::Cancel);
    }

    #[test]
    fn controls_seed_from_the_stored_value() {
        let rating = control_for(&col(FieldType::Rating), &FieldValue::Number(3.5));
        assert_eq!(
            rating,
            EditControl::NumberBox {
                seed: Some(3.5),
                step: 0.5
            }
        );

        let select = col(FieldType::Select).with_options(["a", "b"]);
        assert_eq!(
            control_for(&select, &FieldValue::from("b")),
            EditControl::Dropdown {
                options: vec!["a".to_string(), "b".to_string()],
                selected: Some("b".to_string()),
            }
        );

        let map = control_for(&col(FieldType::Map), &FieldValue::Point(GeoPoint::new(1.0, 2.0)));
        assert_eq!(
            map,
            EditControl::CoordPair {
                lat: Some(1.0),
                lng: Some(2.0)
            }
        );

        let bool_text = control_for(&col(FieldType::Text), &FieldValue::Bool(true));
        assert_eq!(
            bool_text,
            EditControl::TextBox {
                seed: "true".to_string(),
                mode: TextMode::Plain
            }
        );
    }
}
