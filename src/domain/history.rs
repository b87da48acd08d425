//! Linear move history with an undo/redo cursor

use tracing::instrument;

use crate::domain::entities::MoveRecord;

/// Ordered log of applied moves plus a cursor marking the most recently
/// applied, not-yet-undone record.
///
/// `cursor == None` is the "before first record" position. Recording a new
/// move while the cursor is not at the end discards the redo tail first.
/// Stepping back or forward only moves the cursor; the log itself stays
/// intact so undone moves remain available for redo.
#[derive(Debug, Default)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
    cursor: Option<usize>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, discarding any entries past the cursor, and advance
    /// the cursor onto it.
    #[instrument(level = "trace", skip(self))]
    pub fn record(&mut self, record: MoveRecord) {
        let applied = self.cursor.map_or(0, |c| c + 1);
        self.records.truncate(applied);
        self.records.push(record);
        self.cursor = Some(self.records.len() - 1);
    }

    /// Step the cursor back one record, returning the record to invert.
    ///
    /// Returns None when nothing has been applied; the cursor is untouched
    /// in that case.
    pub fn step_back(&mut self) -> Option<MoveRecord> {
        let current = self.cursor?;
        let record = *self.records.get(current)?;
        self.cursor = current.checked_sub(1);
        Some(record)
    }

    /// Step the cursor forward one record, returning the record to reapply.
    ///
    /// Returns None when the cursor already points at the last record.
    pub fn step_forward(&mut self) -> Option<MoveRecord> {
        let next = self.cursor.map_or(0, |c| c + 1);
        let record = *self.records.get(next)?;
        self.cursor = Some(next);
        Some(record)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
