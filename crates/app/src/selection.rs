//! Bulk-selection state machine
//!
//! Tracks which tasks are checked for a bulk action. The machine has three
//! states: `Idle` (empty), `Selecting` (one or more ids) and `Busy` (a bulk
//! operation in flight; the selection is frozen until it settles). The
//! selection is cleared only by a fully successful bulk action or an
//! explicit `clear`; after a partial failure exactly the failed ids stay
//! selected.

use std::collections::BTreeSet;

use taskflow_core::task::{BulkOutcome, TaskId};

use crate::error::WorkflowError;
use crate::Result;

/// Observable state of the selection machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    Selecting,
    Busy,
}

/// Ephemeral, per-session set of selected task identifiers
#[derive(Debug, Default)]
pub struct Selection {
    ids: BTreeSet<TaskId>,
    busy: bool,
}

impl Selection {
    /// Empty selection in `Idle`
    pub fn new() -> Self {
        Self::default()
    }

    /// Current machine state
    pub fn state(&self) -> SelectionState {
        if self.busy {
            SelectionState::Busy
        } else if self.ids.is_empty() {
            SelectionState::Idle
        } else {
            SelectionState::Selecting
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.ids.contains(&id)
    }

    /// Selected identifiers in ascending order
    pub fn ids(&self) -> Vec<TaskId> {
        self.ids.iter().copied().collect()
    }

    fn ensure_not_busy(&self) -> Result<()> {
        if self.busy {
            return Err(WorkflowError::SelectionBusy);
        }
        Ok(())
    }

    /// Add an id to the selection
    pub fn select(&mut self, id: TaskId) -> Result<()> {
        self.ensure_not_busy()?;
        self.ids.insert(id);
        Ok(())
    }

    /// Remove an id from the selection
    pub fn deselect(&mut self, id: TaskId) -> Result<()> {
        self.ensure_not_busy()?;
        self.ids.remove(&id);
        Ok(())
    }

    /// Toggle an id's membership
    pub fn toggle(&mut self, id: TaskId) -> Result<()> {
        self.ensure_not_busy()?;
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
        Ok(())
    }

    /// Replace the selection with the full given id set
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = TaskId>) -> Result<()> {
        self.ensure_not_busy()?;
        self.ids = ids.into_iter().collect();
        Ok(())
    }

    /// Dismiss the selection entirely
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_not_busy()?;
        self.ids.clear();
        Ok(())
    }

    /// Freeze the selection for a bulk operation and return its snapshot.
    ///
    /// Fails when nothing is selected or another operation is in flight.
    pub(crate) fn begin(&mut self) -> Result<Vec<TaskId>> {
        self.ensure_not_busy()?;
        if self.ids.is_empty() {
            return Err(WorkflowError::EmptySelection);
        }
        self.busy = true;
        Ok(self.ids())
    }

    /// Unfreeze after the operation call itself failed; the whole selection
    /// is retained for a retry.
    pub(crate) fn release(&mut self) {
        self.busy = false;
    }

    /// Drop an id whose task no longer exists; reconciliation, not a user
    /// mutation, so it applies in any state.
    pub(crate) fn settle_removed(&mut self, id: TaskId) {
        self.ids.remove(&id);
    }

    /// Unfreeze with per-record outcomes: cleared on full success, otherwise
    /// exactly the failed ids stay selected.
    pub(crate) fn settle(&mut self, outcome: &BulkOutcome) {
        self.busy = false;
        if outcome.is_full_success() {
            self.ids.clear();
        } else {
            self.ids = outcome.failed_ids().collect();
        }
    }
}

/// Proof that the user confirmed a destructive bulk action.
///
/// The yes/no dialog itself belongs to the host; this token only makes
/// "forgot to ask" unrepresentable in the workflow API.
#[derive(Debug, Clone, Copy)]
pub struct Confirmation(());

impl Confirmation {
    /// Mint a confirmation after the user answered yes
    pub fn confirmed() -> Self {
        Self(())
    }
}

/// Counts surfaced to the host after a bulk action settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkReport {
    pub requested: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl From<&BulkOutcome> for BulkReport {
    fn from(outcome: &BulkOutcome) -> Self {
        Self {
            requested: outcome.succeeded.len() + outcome.failed.len(),
            succeeded: outcome.succeeded.len(),
            failed: outcome.failed.len(),
        }
    }
}
