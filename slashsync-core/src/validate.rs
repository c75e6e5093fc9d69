//! Structural validation of a command set.
//!
//! Checks run in a fixed order and stop at the first violation:
//!
//! 1. The set is non-empty.
//! 2. Per command, in file order: name, per-category uniqueness, description
//!    presence, then the option tree.
//! 3. Per-category ceilings, only after every command has been walked.
//!
//! Option trees may nest at most `SubCommandGroup -> SubCommand -> leaf`.
//! Within one option list, a required option may not follow an optional leaf.

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::{Command, CommandCategory, CommandOption, CommandSet, LeafType, OptionKind};

/// Maximum number of chat input commands per scope.
pub const MAX_CHAT_INPUT_COMMANDS: usize = 100;

/// Maximum number of user context-menu commands per scope.
pub const MAX_USER_COMMANDS: usize = 5;

/// Maximum number of message context-menu commands per scope.
pub const MAX_MESSAGE_COMMANDS: usize = 5;

/// Validate `set`, reporting the first structural violation found.
///
/// Pure: performs no I/O and never mutates the input.
pub fn validate(set: &CommandSet) -> Result<(), ValidationError> {
    if set.is_empty() {
        return Err(ValidationError::EmptySet);
    }

    // Duplicates abort, so each set's size doubles as the category count.
    let mut chat_input: HashSet<&str> = HashSet::new();
    let mut user: HashSet<&str> = HashSet::new();
    let mut message: HashSet<&str> = HashSet::new();

    for (index, command) in set.iter().enumerate() {
        if command.name.is_empty() {
            return Err(ValidationError::MissingName { index });
        }

        match command.category {
            CommandCategory::ChatInput => {
                record_name(&mut chat_input, command)?;
                if command.description.is_empty() {
                    return Err(ValidationError::MissingDescription {
                        command: command.name.clone(),
                    });
                }
            }
            CommandCategory::User => check_context_command(&mut user, command)?,
            CommandCategory::Message => check_context_command(&mut message, command)?,
            CommandCategory::Other(value) => {
                return Err(ValidationError::InvalidCategory {
                    command: command.name.clone(),
                    value,
                });
            }
        }

        validate_options(&command.name, &command.options, Position::Command)?;
    }

    if chat_input.len() > MAX_CHAT_INPUT_COMMANDS {
        return Err(ValidationError::TooManyChatInput {
            count: chat_input.len(),
            limit: MAX_CHAT_INPUT_COMMANDS,
        });
    }
    if user.len() > MAX_USER_COMMANDS {
        return Err(ValidationError::TooManyUser {
            count: user.len(),
            limit: MAX_USER_COMMANDS,
        });
    }
    if message.len() > MAX_MESSAGE_COMMANDS {
        return Err(ValidationError::TooManyMessage {
            count: message.len(),
            limit: MAX_MESSAGE_COMMANDS,
        });
    }

    Ok(())
}

fn record_name<'a>(seen: &mut HashSet<&'a str>, command: &'a Command) -> Result<(), ValidationError> {
    if !seen.insert(command.name.as_str()) {
        return Err(ValidationError::DuplicateName {
            command: command.name.clone(),
            category: command.category,
        });
    }
    Ok(())
}

/// User and message commands: unique name, no description.
fn check_context_command<'a>(
    seen: &mut HashSet<&'a str>,
    command: &'a Command,
) -> Result<(), ValidationError> {
    record_name(seen, command)?;
    if !command.description.is_empty() {
        return Err(ValidationError::UnexpectedDescription {
            command: command.name.clone(),
            category: command.category,
        });
    }
    Ok(())
}

/// Where an option list hangs in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Command,
    SubCommand,
}

fn validate_options(
    parent: &str,
    options: &[CommandOption],
    position: Position,
) -> Result<(), ValidationError> {
    let mut optional_seen = false;

    for option in options {
        check_labels(parent, option)?;

        // Applies to every kind, groups and subcommands included.
        if option.required && optional_seen {
            return Err(ValidationError::RequiredAfterOptional {
                parent: parent.to_owned(),
                option: option.name.clone(),
            });
        }

        match option.kind {
            OptionKind::SubCommandGroup | OptionKind::SubCommand
                if position == Position::SubCommand =>
            {
                return Err(ValidationError::IllegalNesting {
                    subcommand: parent.to_owned(),
                    option: option.name.clone(),
                });
            }
            OptionKind::SubCommandGroup => validate_group(option)?,
            OptionKind::SubCommand => validate_subcommand(option)?,
            OptionKind::Leaf(LeafType::Unknown(value)) => {
                return Err(ValidationError::InvalidOptionType {
                    parent: parent.to_owned(),
                    option: option.name.clone(),
                    value,
                });
            }
            OptionKind::Leaf(_) => {
                if !option.required {
                    optional_seen = true;
                }
            }
        }
    }

    Ok(())
}

fn validate_group(group: &CommandOption) -> Result<(), ValidationError> {
    for child in &group.options {
        if child.kind != OptionKind::SubCommand {
            return Err(ValidationError::InvalidGroupChild {
                group: group.name.clone(),
                option: child.name.clone(),
            });
        }
        check_labels(&group.name, child)?;
        validate_subcommand(child)?;
    }
    Ok(())
}

fn validate_subcommand(subcommand: &CommandOption) -> Result<(), ValidationError> {
    validate_options(&subcommand.name, &subcommand.options, Position::SubCommand)
}

fn check_labels(parent: &str, option: &CommandOption) -> Result<(), ValidationError> {
    if option.name.is_empty() {
        return Err(ValidationError::MissingOptionName {
            parent: parent.to_owned(),
        });
    }
    if option.description.is_empty() {
        return Err(ValidationError::MissingOptionDescription {
            parent: parent.to_owned(),
            option: option.name.clone(),
        });
    }
    Ok(())
}
