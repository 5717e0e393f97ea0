use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::FieldValue;

/// Keys the backend owns on every row payload. They carry identity and audit
/// data, never cell values, and must be stripped before a row is resubmitted
/// as a template (cloning).
pub const RESERVED_ROW_KEYS: [&str; 6] = [
    "id",
    "hash",
    "createdAt",
    "createdBy",
    "updatedAt",
    "updatedBy",
];

/// One record of a table: identity plus a mapping from column key to value.
///
/// Cell values are kept in a flattened map so the serialized form matches the
/// backend's flat row objects (`{"id": …, "createdAt": …, "status": "done"}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(flatten)]
    pub values: BTreeMap<String, FieldValue>,
}

impl Row {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// The cell value for a column key, treating missing as null.
    pub fn value(&self, key: &str) -> &FieldValue {
        static NULL: FieldValue = FieldValue::Null;
        self.values.get(key).unwrap_or(&NULL)
    }

    pub fn set_value(&mut self, key: impl Into<String>, value: FieldValue) {
        self.values.insert(key.into(), value);
    }

    /// Cell values as a creation payload for cloning this row.
    ///
    /// Identity and audit keys ([`RESERVED_ROW_KEYS`]) are stripped even if a
    /// backend quirk left them inside the value map.
    pub fn clone_payload(&self) -> BTreeMap<String, FieldValue> {
        self.values
            .iter()
            .filter(|(key, _)| !RESERVED_ROW_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
