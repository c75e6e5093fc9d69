//! The remote command registry as seen by the synchronizer.

use slashsync_core::{Command, CommandId, RemoteCommand, Scope};

/// Failure reported by a registry implementation.
pub type RemoteError = Box<dyn std::error::Error + Send + Sync>;

/// Remote store of registered commands.
///
/// Calls are blocking; timeouts and retries belong to the implementation.
pub trait CommandRegistry {
    /// Every command currently registered for `scope`.
    fn list(&self, scope: &Scope) -> Result<Vec<RemoteCommand>, RemoteError>;

    /// Register `command`, returning it with the identifier the registry assigned.
    fn create(&self, scope: &Scope, command: &Command) -> Result<RemoteCommand, RemoteError>;

    /// Remove the command with `id`.
    fn delete(&self, scope: &Scope, id: &CommandId) -> Result<(), RemoteError>;
}

impl<T: CommandRegistry + ?Sized> CommandRegistry for &T {
    fn list(&self, scope: &Scope) -> Result<Vec<RemoteCommand>, RemoteError> {
        (**self).list(scope)
    }

    fn create(&self, scope: &Scope, command: &Command) -> Result<RemoteCommand, RemoteError> {
        (**self).create(scope, command)
    }

    fn delete(&self, scope: &Scope, id: &CommandId) -> Result<(), RemoteError> {
        (**self).delete(scope, id)
    }
}
