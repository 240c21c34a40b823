//! Undo/Redo snapshot history.
//!
//! Every edit pushes a full deep copy of the item list *after* the edit, so
//! the top of the undo stack always mirrors the live document. Undo moves
//! the top snapshot to the redo stack and restores whatever is beneath it.
//! When nothing is beneath it, the document falls back to the baseline:
//! the state before the oldest retained edit (empty for a new document,
//! the loaded list after a restore).
//!
//! History is linear: a new snapshot clears the redo stack.

use tc_core::TextItem;

/// A full, independent copy of the item list at one point in time.
pub type Snapshot = Vec<TextItem>;

#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// Restored when the undo stack runs dry.
    baseline: Snapshot,
    /// Maximum undo depth; `None` is unbounded.
    max_depth: Option<usize>,
}

impl History {
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            baseline: Vec::new(),
            max_depth: max_depth.map(|depth| depth.max(1)),
        }
    }

    /// Record `items` as the newest state. Clears redo.
    ///
    /// With a depth limit, the oldest snapshot past it is evicted and
    /// becomes the baseline, so undoing all the way still lands on a real
    /// past state.
    pub fn save_state(&mut self, items: &[TextItem]) {
        self.undo_stack.push(items.to_vec());
        if self
            .max_depth
            .is_some_and(|depth| self.undo_stack.len() > depth)
        {
            self.baseline = self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        log::debug!(
            "history: saved snapshot of {} items (undo depth {})",
            items.len(),
            self.undo_stack.len()
        );
    }

    /// Step back one edit. Returns the state to display, or `None` when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> Option<Snapshot> {
        let top = self.undo_stack.pop()?;
        self.redo_stack.push(top);
        let current = self
            .undo_stack
            .last()
            .cloned()
            .unwrap_or_else(|| self.baseline.clone());
        log::debug!(
            "history: undo (undo depth {}, redo depth {})",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Some(current)
    }

    /// Re-apply the most recently undone edit. Returns the state to
    /// display, or `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(snapshot.clone());
        log::debug!(
            "history: redo (undo depth {}, redo depth {})",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Some(snapshot)
    }

    /// Drop all history and start over from `baseline`.
    pub fn reset(&mut self, baseline: &[TextItem]) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.baseline = baseline.to_vec();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
