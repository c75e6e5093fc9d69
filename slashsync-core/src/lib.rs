//! slashsync core library — command definitions, YAML loading, validation.
//!
//! - [`types`] — newtypes and the command tree
//! - [`error`] — [`ValidationError`], [`LoadError`]
//! - [`loader`] — read / write command files
//! - [`validate`] — structural checks run before any registry call

pub mod error;
pub mod loader;
pub mod types;
pub mod validate;

pub use error::{LoadError, ValidationError};
pub use types::{
    ApplicationId, ChoiceValue, Command, CommandCategory, CommandId, CommandOption, CommandSet,
    GuildId, LeafType, OptionBound, OptionChoice, OptionKind, RemoteCommand, Scope,
};
pub use validate::validate;
