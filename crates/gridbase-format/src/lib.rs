//! Display coercion and read-only cell rendering.
//!
//! This crate owns two layers:
//! - Coercion helpers turning a stored [`gridbase_model::FieldValue`] into
//!   the display string / input seed the grid needs. The rules are exact
//!   interop contracts with the backend's web client and must not drift.
//! - The higher-level [`render_display`] presentation model: a pure function
//!   from (column, value) to a [`DisplayFragment`] the hosting view draws.
//!   Fragments carry text plus rendering hints (color buckets, icon kinds),
//!   never widgets.

mod coerce;
mod display;

pub use coerce::{format_field_value, to_input_value, InputSeed};
pub use display::{render_display, DisplayFragment, FormatOptions, Pill, COLOR_BUCKETS};
