use std::collections::BTreeMap;

use gridbase_model::FieldValue;
use thiserror::Error;

/// A cell-level save rejected by the persistence layer.
///
/// The session's responsibility ends at surfacing this to the caller (toast);
/// it neither retries nor rolls the buffered value back.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct SaveError {
    pub message: String,
}

impl SaveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Persistence sink supplied by the hosting table view.
///
/// Called exactly once per explicit commit. The sink is assumed idempotent
/// enough for that; the session does not retry, and a response landing after
/// the session moved on is last-write-wins.
pub trait SaveSink {
    fn save(&mut self, row_id: &str, column_id: &str, value: &FieldValue) -> Result<(), SaveError>;
}

impl<F> SaveSink for F
where
    F: FnMut(&str, &str, &FieldValue) -> Result<(), SaveError>,
{
    fn save(&mut self, row_id: &str, column_id: &str, value: &FieldValue) -> Result<(), SaveError> {
        self(row_id, column_id, value)
    }
}

/// Ephemeral editing state for one row.
///
/// At most one cell is open at a time; opening another cell moves the focus
/// but keeps the previous cell's unsaved draft, so moving between columns of
/// the same row loses nothing. Only abandoning the row (dropping the session)
/// abandons drafts.
///
/// Commit always pushes the draft the session itself buffered — save never
/// reads caller-held mutable state, so no out-of-order change/save event pair
/// can commit a stale value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSession {
    row_id: String,
    active: Option<String>,
    drafts: BTreeMap<String, FieldValue>,
}

impl RowSession {
    pub fn new(row_id: impl Into<String>) -> Self {
        Self {
            row_id: row_id.into(),
            active: None,
            drafts: BTreeMap::new(),
        }
    }

    pub fn row_id(&self) -> &str {
        &self.row_id
    }

    /// The column currently open for editing, if any.
    pub fn active_column(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The unsaved draft buffered for a column, if any.
    pub fn draft(&self, column_id: &str) -> Option<&FieldValue> {
        self.drafts.get(column_id)
    }

    /// True when no cell is open and no unsaved draft remains.
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.drafts.is_empty()
    }

    /// Open a cell for editing and return the value to seed its control:
    /// an in-flight unsaved draft for that column if one exists, else the
    /// row's current value.
    ///
    /// If another cell was open, it is implicitly closed; its draft stays
    /// buffered, unsaved.
    pub fn open(&mut self, column_id: &str, row_value: &FieldValue) -> FieldValue {
        let seed = self
            .drafts
            .get(column_id)
            .cloned()
            .unwrap_or_else(|| row_value.clone());
        self.drafts.insert(column_id.to_string(), seed.clone());
        self.active = Some(column_id.to_string());
        seed
    }

    /// Replace the open cell's buffered value. Called on every keystroke or
    /// selection change; ignored when no cell is open.
    pub fn change(&mut self, value: FieldValue) {
        if let Some(column_id) = &self.active {
            self.drafts.insert(column_id.clone(), value);
        }
    }

    /// Discard the open cell's draft without persisting.
    pub fn cancel(&mut self) {
        if let Some(column_id) = self.active.take() {
            self.drafts.remove(&column_id);
        }
    }

    /// Commit the open cell's buffered value to the sink.
    ///
    /// On success the draft is cleared and the committed value returned. On
    /// failure the cell closes but the draft stays buffered (the grid keeps
    /// showing the unsaved value) and the error is surfaced to the caller.
    /// With no open cell this is a no-op.
    pub fn commit(&mut self, sink: &mut dyn SaveSink) -> Result<Option<FieldValue>, SaveError> {
        let Some(column_id) = self.active.take() else {
            return Ok(None);
        };
        let Some(value) = self.drafts.get(&column_id).cloned() else {
            return Ok(None);
        };
        match sink.save(&self.row_id, &column_id, &value) {
            Ok(()) => {
                self.drafts.remove(&column_id);
                Ok(Some(value))
            }
            Err(err) => {
                log::warn!(
                    "saving column '{column_id}' on row '{}' failed: {err}",
                    self.row_id
                );
                Err(err)
            }
        }
    }

    /// Blur is the implicit commit point: losing focus saves.
    pub fn blur(&mut self, sink: &mut dyn SaveSink) -> Result<Option<FieldValue>, SaveError> {
        self.commit(sink)
    }
}
