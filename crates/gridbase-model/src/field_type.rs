use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed set of column field-type tags.
///
/// The tag governs a column's storage shape, validation, and rendering. The
/// set is fixed; tags the front end does not know (including an empty tag)
/// resolve to [`FieldType::Text`], the generic text behavior, so a newer
/// backend schema cannot break the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Textarea,
    Number,
    Decimal,
    Currency,
    Percentage,
    Rating,
    Email,
    PhoneNumber,
    Url,
    Link,
    Checkbox,
    Radio,
    Select,
    MultiSelect,
    Map,
    File,
    Date,
    Time,
    Year,
    DateTime,
    Duration,
}

impl FieldType {
    /// All known tags, in schema order.
    pub const ALL: [FieldType; 22] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Number,
        FieldType::Decimal,
        FieldType::Currency,
        FieldType::Percentage,
        FieldType::Rating,
        FieldType::Email,
        FieldType::PhoneNumber,
        FieldType::Url,
        FieldType::Link,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Select,
        FieldType::MultiSelect,
        FieldType::Map,
        FieldType::File,
        FieldType::Date,
        FieldType::Time,
        FieldType::Year,
        FieldType::DateTime,
        FieldType::Duration,
    ];

    /// Resolve a schema tag. Unknown or empty tags fall back to [`FieldType::Text`].
    ///
    /// `"float"` is accepted as a legacy alias of `"decimal"`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "text" => FieldType::Text,
            "textarea" => FieldType::Textarea,
            "number" => FieldType::Number,
            "decimal" | "float" => FieldType::Decimal,
            "currency" => FieldType::Currency,
            "percentage" => FieldType::Percentage,
            "rating" => FieldType::Rating,
            "email" => FieldType::Email,
            "phonenumber" => FieldType::PhoneNumber,
            "url" => FieldType::Url,
            "link" => FieldType::Link,
            "checkbox" => FieldType::Checkbox,
            "radio" => FieldType::Radio,
            "select" => FieldType::Select,
            "multiselect" => FieldType::MultiSelect,
            "map" => FieldType::Map,
            "file" => FieldType::File,
            "date" => FieldType::Date,
            "time" => FieldType::Time,
            "year" => FieldType::Year,
            "datetime" => FieldType::DateTime,
            "duration" => FieldType::Duration,
            _ => FieldType::Text,
        }
    }

    /// The canonical lowercase schema tag.
    pub const fn as_tag(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Number => "number",
            FieldType::Decimal => "decimal",
            FieldType::Currency => "currency",
            FieldType::Percentage => "percentage",
            FieldType::Rating => "rating",
            FieldType::Email => "email",
            FieldType::PhoneNumber => "phonenumber",
            FieldType::Url => "url",
            FieldType::Link => "link",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::MultiSelect => "multiselect",
            FieldType::Map => "map",
            FieldType::File => "file",
            FieldType::Date => "date",
            FieldType::Time => "time",
            FieldType::Year => "year",
            FieldType::DateTime => "datetime",
            FieldType::Duration => "duration",
        }
    }

    /// Types whose column schema carries an `options` list.
    pub const fn has_options(self) -> bool {
        matches!(
            self,
            FieldType::Select | FieldType::Radio | FieldType::MultiSelect
        )
    }

    /// Types whose canonical value is numeric.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            FieldType::Number
                | FieldType::Decimal
                | FieldType::Currency
                | FieldType::Percentage
                | FieldType::Rating
                | FieldType::Year
        )
    }
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Text
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Total: unknown tags degrade to text instead of failing the whole
        // schema payload.
        let tag = String::deserialize(deserializer)?;
        Ok(FieldType::parse(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_canonical_tags() {
        for ty in FieldType::ALL {
            assert_eq!(FieldType::parse(ty.as_tag()), ty);
        }
    }

    #[test]
    fn unknown_and_empty_tags_fall_back_to_text() {
        assert_eq!(FieldType::parse("barcode"), FieldType::Text);
        assert_eq!(FieldType::parse(""), FieldType::Text);
    }

    #[test]
    fn float_is_an_alias_of_decimal() {
        assert_eq!(FieldType::parse("float"), FieldType::Decimal);
    }

    #[test]
    fn classification_helpers() {
        assert!(FieldType::Select.has_options());
        assert!(FieldType::MultiSelect.has_options());
        assert!(!FieldType::Text.has_options());
        assert!(FieldType::Currency.is_numeric());
        assert!(!FieldType::Checkbox.is_numeric());
    }

    #[test]
    fn serde_uses_the_schema_tag() {
        let json = serde_json::to_string(&FieldType::MultiSelect).unwrap();
        assert_eq!(json, "\"multiselect\"");
        let back: FieldType = serde_json::from_str("\"phonenumber\"").unwrap();
        assert_eq!(back, FieldType::PhoneNumber);
        let unknown: FieldType = serde_json::from_str("\"hologram\"").unwrap();
        assert_eq!(unknown, FieldType::Text);
    }
}
