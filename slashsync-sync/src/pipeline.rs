//! Shared sync pipeline entrypoint: validate, clean, apply.

use slashsync_core::{validate, CommandSet, RemoteCommand, Scope};

use crate::registry::CommandRegistry;
use crate::synchronizer::{apply_sync, clean_sync};
use crate::SyncError;

/// What a pipeline run did, or would have done in dry-run mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub scope: Scope,
    /// Remote commands removed during the clean phase.
    pub removed: Vec<RemoteCommand>,
    /// Registry responses for each created command, in set order.
    pub created: Vec<RemoteCommand>,
    /// Names of local commands the apply phase targets.
    pub planned: Vec<String>,
    pub dry_run: bool,
}

/// Validate `set`, then clean and re-create every command in `scope`.
///
/// A validation failure returns before any registry call. A failed clean
/// phase returns before the apply phase starts. In dry-run mode the registry
/// is only listed.
pub fn run<R>(
    registry: &R,
    scope: &Scope,
    set: &CommandSet,
    dry_run: bool,
) -> Result<SyncOutcome, SyncError>
where
    R: CommandRegistry + ?Sized,
{
    validate(set)?;
    let planned: Vec<String> = set.iter().map(|c| c.name.clone()).collect();

    if dry_run {
        let removed = registry.list(scope).map_err(|source| SyncError::List {
            scope: scope.clone(),
            source,
        })?;
        tracing::info!(
            "[dry-run] would delete {} and create {} command(s) in {scope}",
            removed.len(),
            planned.len()
        );
        return Ok(SyncOutcome {
            scope: scope.clone(),
            removed,
            created: vec![],
            planned,
            dry_run: true,
        });
    }

    let (removed, cleaned) = clean_recording(registry, scope);
    cleaned?;

    let mut created = Vec::new();
    apply_sync(
        |s, command| {
            let remote = registry.create(s, command)?;
            created.push(remote.clone());
            Ok(remote)
        },
        scope,
        set,
    )?;

    tracing::info!(
        "synced {scope}: {} removed, {} created",
        removed.len(),
        created.len()
    );
    Ok(SyncOutcome {
        scope: scope.clone(),
        removed,
        created,
        planned,
        dry_run: false,
    })
}

/// Run the clean phase, returning the remote commands actually deleted
/// alongside the phase result.
fn clean_recording<R>(registry: &R, scope: &Scope) -> (Vec<RemoteCommand>, Result<(), SyncError>)
where
    R: CommandRegistry + ?Sized,
{
    let mut listed = Vec::new();
    let mut deleted = Vec::new();
    let result = clean_sync(
        |s| {
            let remote = registry.list(s)?;
            listed = remote.clone();
            Ok(remote)
        },
        |s, id| {
            registry.delete(s, id)?;
            deleted.push(id.clone());
            Ok(())
        },
        scope,
    );
    let removed = listed
        .into_iter()
        .filter(|c| deleted.contains(&c.id))
        .collect();
    (removed, result)
}
