use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference to an uploaded binary file.
///
/// The grid never holds file bytes; rows store this descriptor and the
/// backend serves the content from `url`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl FileRef {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: None,
            mime_type: None,
            size: None,
        }
    }
}

impl fmt::Display for FileRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.filename)
    }
}

/// Geographic coordinate pair with an optional reverse-geocoded address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            address: None,
        }
    }
}

/// JSON-shaped cell value union.
///
/// Serde is untagged: the wire shape alone (`"x"`, `3.5`, `true`,
/// `["a","b"]`, `{"lat":1,"lng":2}`, `{"filename":…}`, `null`) selects the
/// variant, matching how the backend stores cells. In particular, "is a map
/// value" means "is an object with numeric `lat` and `lng`" — a structural
/// test, not a tag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Empty / unset cell value (JSON `null`).
    #[default]
    Null,
    /// Boolean, canonical for checkbox columns.
    Bool(bool),
    /// IEEE-754 double precision number.
    Number(f64),
    /// Plain string. Also the holding shape for raw input that failed to
    /// coerce to a richer type; validation rejects it later.
    Text(String),
    /// Ordered selection, canonical for multiselect columns.
    List(Vec<String>),
    /// Coordinate pair, canonical for map columns.
    Point(GeoPoint),
    /// Uploaded-file descriptor, canonical for file columns.
    File(FileRef),
}

impl FieldValue {
    /// Returns true if the value is [`FieldValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// The sole map-value discriminator: a coordinate object with numeric
    /// `lat` and `lng`.
    pub fn is_point(&self) -> bool {
        matches!(self, FieldValue::Point(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_point(&self) -> Option<&GeoPoint> {
        match self {
            FieldValue::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileRef> {
        match self {
            FieldValue::File(f) => Some(f),
            _ => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<GeoPoint> for FieldValue {
    fn from(value: GeoPoint) -> Self {
        FieldValue::Point(value)
    }
}

impl From<FileRef> for FieldValue {
    fn from(value: FileRef) -> Self {
        FieldValue::File(value)
    }
}
