//! Hand-off log operations. Append-only, newest first.

use super::DeskStore;
use crate::telesales::HandoffRecord;

impl DeskStore {
    /// Prepend a freshly created hand-off. Records are immutable once in.
    pub fn push_handoff(&mut self, record: HandoffRecord) {
        self.handoffs.insert(0, record);
    }

    /// Hand-offs in display order (newest first).
    pub fn handoffs(&self) -> &[HandoffRecord] {
        &self.handoffs
    }

    pub fn handoff_count(&self) -> usize {
        self.handoffs.len()
    }
}
