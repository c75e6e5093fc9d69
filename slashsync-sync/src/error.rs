//! Error types for slashsync-sync.

use thiserror::Error;

use slashsync_core::{CommandId, Scope, ValidationError};

use crate::registry::RemoteError;

/// All errors that can arise from sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The local command set failed validation; nothing was sent.
    #[error("command set rejected: {0}")]
    Validation(#[from] ValidationError),

    /// Listing remote commands failed; no deletions were attempted.
    #[error("failed to list commands for {scope}: {source}")]
    List {
        scope: Scope,
        #[source]
        source: RemoteError,
    },

    /// The last deletion that failed during a clean pass.
    #[error("failed to delete command {id} from {scope}: {source}")]
    Delete {
        scope: Scope,
        id: CommandId,
        #[source]
        source: RemoteError,
    },

    /// The last creation that failed during an apply pass.
    #[error("failed to create command '{name}' in {scope}: {source}")]
    Create {
        scope: Scope,
        name: String,
        #[source]
        source: RemoteError,
    },
}
