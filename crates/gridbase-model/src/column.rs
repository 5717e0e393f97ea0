use serde::{Deserialize, Serialize};

use crate::{FieldType, FieldValue};

/// Schema descriptor for one attribute of a row.
///
/// Columns arrive from the backend as given; the grid trusts `field_type`
/// and `options` and does not validate the schema itself. `options` is only
/// meaningful for select/radio/multiselect columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "FieldValue::is_null")]
    pub default: FieldValue,
}

impl Column {
    /// Create a column with the given identity and type; `key` doubles as the
    /// label until one is set.
    pub fn new(id: impl Into<String>, key: impl Into<String>, field_type: FieldType) -> Self {
        let key = key.into();
        Self {
            id: id.into(),
            label: key.clone(),
            key,
            field_type,
            options: Vec::new(),
            is_required: false,
            default: FieldValue::Null,
        }
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Zero-based position of an option label, if the column declares it.
    pub fn option_index(&self, label: &str) -> Option<usize> {
        self.options.iter().position(|o| o == label)
    }
}
