//! Remote backend plumbing
//!
//! The remote service is an opaque collaborator; this module owns the HTTP
//! client and the wire-format record types the stores exchange with it.

mod client;
mod record;

pub use client::{RemoteClient, RemoteConfig};
pub use record::{CategoryRecord, RecordOutcome, RecordsPage, TaskRecord};

pub(crate) use record::{category_draft_body, category_patch_body, task_draft_body, task_patch_body};
