//! Cell editing behavior for the table grid.
//!
//! The crate is the editable counterpart of `gridbase-format`: where that
//! crate says how a cell *looks*, this one says how a cell *edits*.
//!
//! - [`control_for`] picks the native control a field type renders and seeds
//!   it from the stored value.
//! - [`translate_event`] turns a native control event into the canonical
//!   [`gridbase_model::FieldValue`], deferring unparsable input to validation
//!   instead of rejecting it.
//! - [`RowSession`] owns the ephemeral editing state of one row: which cell
//!   is open, the buffered draft per column, and the commit/cancel protocol
//!   (Enter saves, Escape cancels, blur saves).
//!
//! All of it is single-threaded UI-event plumbing: every transition happens
//! synchronously inside an event handler, and persistence is a caller-supplied
//! sink invoked once per explicit commit.

mod input;
mod session;

pub use input::{
    control_for, key_action, translate_event, CoordAxis, EditControl, EventOutcome, InputEvent,
    KeyAction, KeyPress, TextMode,
};
pub use session::{RowSession, SaveError, SaveSink};
