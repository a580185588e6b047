//! Error types for the view-state layer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkflowError {
    /// A bulk action was requested with nothing selected
    #[error("selection is empty")]
    EmptySelection,

    /// The selection is frozen while a bulk operation is in flight
    #[error("a bulk operation is already in flight")]
    SelectionBusy,

    #[error(transparent)]
    Core(#[from] taskflow_core::Error),
}
