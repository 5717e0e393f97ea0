use gridbase_model::FieldValue;

/// The user-visible string form of a stored cell value.
///
/// Exact interop rules:
/// - null → empty string
/// - file reference → its filename
/// - list → comma-joined (no space, `Array.join` style)
/// - point → its address if present, else `"{lat}, {lng}"`
/// - everything else → plain string conversion (`2.0` renders as `"2"`,
///   booleans as `true`/`false`)
pub fn format_field_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => String::new(),
        FieldValue::File(file) => file.filename.clone(),
        FieldValue::List(items) => items.join(","),
        FieldValue::Point(p) => p
            .address
            .clone()
            .unwrap_or_else(|| format!("{}, {}", p.lat, p.lng)),
        FieldValue::Number(n) => n.to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Text(s) => s.clone(),
    }
}

/// Seed value for a native input control.
#[derive(Clone, Debug, PartialEq)]
pub enum InputSeed {
    Text(String),
    Number(f64),
}

impl InputSeed {
    /// The seed as the string a text control would hold.
    pub fn into_text(self) -> String {
        match self {
            InputSeed::Text(s) => s,
            InputSeed::Number(n) => n.to_string(),
        }
    }
}

/// The value used to seed a native input control when a cell opens for
/// editing.
///
/// Mirrors [`format_field_value`], except numbers stay numbers (so number
/// inputs keep their native stepping) and booleans become the literal strings
/// `"true"` / `"false"`.
pub fn to_input_value(value: &FieldValue) -> InputSeed {
    match value {
        FieldValue::Number(n) => InputSeed::Number(*n),
        FieldValue::Bool(b) => InputSeed::Text(if *b { "true" } else { "false" }.to_string()),
        other => InputSeed::Text(format_field_value(other)),
    }
}
