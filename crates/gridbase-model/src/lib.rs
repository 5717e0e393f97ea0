//! `gridbase-model` defines the core in-memory data structures of the table
//! grid: field types, cell values, column schemas, and rows.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the cell editor (`gridbase-editor`)
//! - the display/formatting layer (`gridbase-format`)
//! - IPC and WASM boundaries via `serde` (JSON-safe schema)
//!
//! Values use the same JSON wire shapes the backend emits: the concrete shape
//! of a value (string, number, array, `{lat, lng}` object, …), not a type tag,
//! discriminates the variant at the serde boundary.

mod column;
mod field_type;
mod row;
mod validate;
mod value;

pub use column::Column;
pub use field_type::FieldType;
pub use row::{Row, RESERVED_ROW_KEYS};
pub use validate::{
    check_column_value, validate_field_value, validate_row_payload, RowViolation, SchemaViolation,
    TEXTAREA_MAX_LEN, TEXT_MAX_LEN, URL_MAX_LEN,
};
pub use value::{FieldValue, FileRef, GeoPoint};
