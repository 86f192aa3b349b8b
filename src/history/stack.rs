//! Undo/redo stacks over grid snapshots
//!
//! Both stacks hold the most recent entry last. Recording a new edit always
//! empties the redo stack, so history never branches.

use std::collections::VecDeque;
use std::mem;

use log::debug;

use crate::history::Snapshot;
use crate::io::error::{Result, invalid_parameter};
use crate::raster::Grid;

/// Undo and redo stacks for one editing session
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: VecDeque<Snapshot>,
    redo_stack: Vec<Snapshot>,
    limit: Option<usize>,
}

impl History {
    /// Unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `limit` undo entries, oldest dropped first
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is zero
    pub fn with_limit(limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(invalid_parameter(
                "history_limit",
                &limit,
                &"must keep at least one entry",
            ));
        }
        Ok(Self {
            limit: Some(limit),
            ..Self::default()
        })
    }

    /// Maximum number of undo entries, if bounded
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
            }
        }
    }

    /// Record the grid as it is just before an edit is applied
    ///
    /// Call once per logical edit; a whole drag stroke is one edit.
    pub fn before_edit(&mut self, current: &Grid) {
        self.push_undo(Snapshot::capture(current));
        self.redo_stack.clear();
        debug!(
            "history: recorded {}x{} snapshot ({} undo entries)",
            current.width(),
            current.height(),
            self.undo_stack.len()
        );
    }

    /// Step back one edit
    ///
    /// Returns the grid that should become live. With nothing to undo the
    /// current grid comes back unchanged.
    pub fn undo(&mut self, mut current: Grid) -> Grid {
        self.undo_in_place(&mut current);
        current
    }

    /// Step forward one undone edit
    ///
    /// Returns the grid that should become live. With nothing to redo the
    /// current grid comes back unchanged.
    pub fn redo(&mut self, mut current: Grid) -> Grid {
        self.redo_in_place(&mut current);
        current
    }

    /// Swap `live` with the most recent undo entry; the displaced grid moves
    /// to the redo stack. Returns whether anything changed.
    pub fn undo_in_place(&mut self, live: &mut Grid) -> bool {
        let Some(previous) = self.undo_stack.pop_back() else {
            return false;
        };
        let displaced = mem::replace(live, previous.into_grid());
        self.redo_stack.push(Snapshot::from_grid(displaced));
        debug!(
            "history: undo ({} undo / {} redo entries left)",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Swap `live` with the most recent redo entry; the displaced grid moves
    /// back to the undo stack. Returns whether anything changed.
    pub fn redo_in_place(&mut self, live: &mut Grid) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let displaced = mem::replace(live, next.into_grid());
        self.push_undo(Snapshot::from_grid(displaced));
        debug!(
            "history: redo ({} undo / {} redo entries left)",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        true
    }

    /// Check if an undo would change anything
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if a redo would change anything
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of recorded undo entries
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of recorded redo entries
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most recent undo entry
    pub fn last_undo(&self) -> Option<&Snapshot> {
        self.undo_stack.back()
    }

    /// Most recent redo entry
    pub fn last_redo(&self) -> Option<&Snapshot> {
        self.redo_stack.last()
    }

    /// Forget all entries
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
