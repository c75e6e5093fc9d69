//! # slashsync-sync
//!
//! Brings a remote command registry in line with a local command set.
//!
//! Sync is two sequential phases: [`clean_sync`] deletes every command the
//! registry reports, then [`apply_sync`] creates each local command in order.
//! [`pipeline::run`] validates first and runs both phases back to back.

pub mod error;
pub mod pipeline;
pub mod registry;
pub mod synchronizer;

pub use error::SyncError;
pub use pipeline::SyncOutcome;
pub use registry::{CommandRegistry, RemoteError};
pub use synchronizer::{apply_sync, clean_sync};
