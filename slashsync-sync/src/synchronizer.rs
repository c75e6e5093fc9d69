//! Clean and apply phases.
//!
//! Both phases are best-effort over their items: a failed delete or create is
//! logged and remembered, the loop carries on, and the last failure is
//! returned once every item has been attempted. Only a failed listing stops
//! the clean phase outright.
//!
//! Callers must run [`clean_sync`] to completion before [`apply_sync`], never
//! interleaved, or the registry may end up with colliding names.

use slashsync_core::{Command, CommandId, CommandSet, RemoteCommand, Scope};

use crate::error::SyncError;
use crate::registry::RemoteError;

/// Delete every command `list` reports for `scope`.
pub fn clean_sync<L, D>(mut list: L, mut delete: D, scope: &Scope) -> Result<(), SyncError>
where
    L: FnMut(&Scope) -> Result<Vec<RemoteCommand>, RemoteError>,
    D: FnMut(&Scope, &CommandId) -> Result<(), RemoteError>,
{
    let remote = list(scope).map_err(|source| SyncError::List {
        scope: scope.clone(),
        source,
    })?;
    tracing::info!("cleaning {} command(s) from {scope}", remote.len());

    let mut last_error = None;
    for command in &remote {
        match delete(scope, &command.id) {
            Ok(()) => tracing::debug!("deleted '{}' ({})", command.name, command.id),
            Err(source) => {
                tracing::warn!("could not delete '{}' ({}): {source}", command.name, command.id);
                last_error = Some(SyncError::Delete {
                    scope: scope.clone(),
                    id: command.id.clone(),
                    source,
                });
            }
        }
    }

    match last_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Create each command of `set` in order.
pub fn apply_sync<C>(mut create: C, scope: &Scope, set: &CommandSet) -> Result<(), SyncError>
where
    C: FnMut(&Scope, &Command) -> Result<RemoteCommand, RemoteError>,
{
    tracing::info!("creating {} command(s) in {scope}", set.len());

    let mut last_error = None;
    for command in set {
        match create(scope, command) {
            Ok(remote) => tracing::debug!("created '{}' ({})", remote.name, remote.id),
            Err(source) => {
                tracing::warn!("could not create '{}': {source}", command.name);
                last_error = Some(SyncError::Create {
                    scope: scope.clone(),
                    name: command.name.clone(),
                    source,
                });
            }
        }
    }

    match last_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
