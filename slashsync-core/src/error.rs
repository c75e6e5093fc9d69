//! Error types for slashsync-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::CommandCategory;

/// A structural violation in a command set.
///
/// Validation is fail-fast: the first violation found is the one reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("command set contains no commands")]
    EmptySet,

    /// Unnamed commands are identified by their position in the set.
    #[error("command #{index} has no name")]
    MissingName { index: usize },

    #[error("chat input command '{command}' has no description")]
    MissingDescription { command: String },

    #[error("{category} command '{command}' must not have a description")]
    UnexpectedDescription {
        command: String,
        category: CommandCategory,
    },

    #[error("duplicate {category} command name '{command}'")]
    DuplicateName {
        command: String,
        category: CommandCategory,
    },

    #[error("command '{command}' has unrecognized type {value}")]
    InvalidCategory { command: String, value: u64 },

    #[error("an option under '{parent}' has no name")]
    MissingOptionName { parent: String },

    #[error("option '{option}' under '{parent}' has no description")]
    MissingOptionDescription { parent: String, option: String },

    #[error("required option '{option}' under '{parent}' follows an optional one")]
    RequiredAfterOptional { parent: String, option: String },

    #[error("option '{option}' under '{parent}' has unrecognized type {value}")]
    InvalidOptionType {
        parent: String,
        option: String,
        value: u64,
    },

    #[error("subcommand group '{group}' contains '{option}', which is not a subcommand")]
    InvalidGroupChild { group: String, option: String },

    #[error("subcommand '{subcommand}' may only contain plain options, found '{option}'")]
    IllegalNesting { subcommand: String, option: String },

    #[error("{count} chat input commands exceed the limit of {limit}")]
    TooManyChatInput { count: usize, limit: usize },

    #[error("{count} user commands exceed the limit of {limit}")]
    TooManyUser { count: usize, limit: usize },

    #[error("{count} message commands exceed the limit of {limit}")]
    TooManyMessage { count: usize, limit: usize },
}

/// Errors from reading or writing a command file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load, with file path and serde_yaml's line context.
    #[error("failed to parse command file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("command file not found at {path}")]
    NotFound { path: PathBuf },
}
