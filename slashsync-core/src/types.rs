//! Domain types for application command definitions.
//!
//! Numeric `type` fields follow the chat platform's wire encoding so that a
//! command file and a registry payload share one representation. Unknown
//! numbers are preserved rather than rejected at decode time; the validator
//! decides whether they are acceptable.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

id_newtype!(
    /// Identifier of the application that owns the commands.
    ApplicationId
);
id_newtype!(
    /// Identifier of a guild; commands registered here are guild-local.
    GuildId
);
id_newtype!(
    /// Identifier assigned to a command by the remote registry.
    CommandId
);

/// Where commands are registered: an application, optionally narrowed to one guild.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    pub application: ApplicationId,
    pub guild: Option<GuildId>,
}

impl Scope {
    /// Global scope for `application`.
    pub fn global(application: impl Into<ApplicationId>) -> Self {
        Self {
            application: application.into(),
            guild: None,
        }
    }

    /// Guild scope. An empty guild id collapses to global scope.
    pub fn guild(application: impl Into<ApplicationId>, guild: impl Into<GuildId>) -> Self {
        let guild = guild.into();
        Self {
            application: application.into(),
            guild: (!guild.0.is_empty()).then_some(guild),
        }
    }

    pub fn is_global(&self) -> bool {
        self.guild.is_none()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.guild {
            Some(guild) => write!(f, "application {} / guild {}", self.application, guild),
            None => write!(f, "application {} (global)", self.application),
        }
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Top-level command kind. Each category has its own namespace and ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "u64", into = "u64")]
pub enum CommandCategory {
    /// Slash command typed into the chat input.
    #[default]
    ChatInput,
    /// Context-menu action on a user.
    User,
    /// Context-menu action on a message.
    Message,
    /// A wire value this crate does not recognise.
    Other(u64),
}

impl From<u64> for CommandCategory {
    fn from(value: u64) -> Self {
        match value {
            1 => CommandCategory::ChatInput,
            2 => CommandCategory::User,
            3 => CommandCategory::Message,
            other => CommandCategory::Other(other),
        }
    }
}

impl From<CommandCategory> for u64 {
    fn from(category: CommandCategory) -> Self {
        match category {
            CommandCategory::ChatInput => 1,
            CommandCategory::User => 2,
            CommandCategory::Message => 3,
            CommandCategory::Other(n) => n,
        }
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandCategory::ChatInput => write!(f, "chat_input"),
            CommandCategory::User => write!(f, "user"),
            CommandCategory::Message => write!(f, "message"),
            CommandCategory::Other(n) => write!(f, "unknown({n})"),
        }
    }
}

/// Value type of a leaf option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafType {
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Number,
    Attachment,
    /// Zero or an unrecognised wire value.
    Unknown(u64),
}

/// Structural kind of an option.
///
/// Nesting is restricted to `SubCommandGroup -> SubCommand -> Leaf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub enum OptionKind {
    SubCommand,
    SubCommandGroup,
    Leaf(LeafType),
}

impl Default for OptionKind {
    fn default() -> Self {
        OptionKind::Leaf(LeafType::Unknown(0))
    }
}

impl From<u64> for OptionKind {
    fn from(value: u64) -> Self {
        match value {
            1 => OptionKind::SubCommand,
            2 => OptionKind::SubCommandGroup,
            3 => OptionKind::Leaf(LeafType::String),
            4 => OptionKind::Leaf(LeafType::Integer),
            5 => OptionKind::Leaf(LeafType::Boolean),
            6 => OptionKind::Leaf(LeafType::User),
            7 => OptionKind::Leaf(LeafType::Channel),
            8 => OptionKind::Leaf(LeafType::Role),
            9 => OptionKind::Leaf(LeafType::Mentionable),
            10 => OptionKind::Leaf(LeafType::Number),
            11 => OptionKind::Leaf(LeafType::Attachment),
            other => OptionKind::Leaf(LeafType::Unknown(other)),
        }
    }
}

impl From<OptionKind> for u64 {
    fn from(kind: OptionKind) -> Self {
        match kind {
            OptionKind::SubCommand => 1,
            OptionKind::SubCommandGroup => 2,
            OptionKind::Leaf(leaf) => match leaf {
                LeafType::String => 3,
                LeafType::Integer => 4,
                LeafType::Boolean => 5,
                LeafType::User => 6,
                LeafType::Channel => 7,
                LeafType::Role => 8,
                LeafType::Mentionable => 9,
                LeafType::Number => 10,
                LeafType::Attachment => 11,
                LeafType::Unknown(n) => n,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// Value of a predefined choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    Integer(i64),
    Number(f64),
    String(String),
}

/// Lower or upper bound of an integer or number option, kept in its written form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionBound {
    Integer(i64),
    Number(f64),
}

/// A predefined value offered for a leaf option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChoice {
    pub name: String,
    pub value: ChoiceValue,
}

/// A parameter or nested grouping attached to a command or subcommand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: OptionKind,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<OptionBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<OptionBound>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<OptionChoice>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

impl CommandOption {
    /// A bare option of `kind` with no children, choices or bounds.
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: OptionKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            required: false,
            min_value: None,
            max_value: None,
            choices: vec![],
            options: vec![],
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_options(mut self, options: Vec<CommandOption>) -> Self {
        self.options = options;
        self
    }
}

/// A top-level invocable command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Assigned by the registry; absent in local definitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CommandId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub category: CommandCategory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

impl Command {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: CommandCategory,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            category,
            options: vec![],
        }
    }

    pub fn with_options(mut self, options: Vec<CommandOption>) -> Self {
        self.options = options;
        self
    }
}

/// Root container of a command file: every command the application exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CommandSet {
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl CommandSet {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a CommandSet {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// A command as reported back by the remote registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCommand {
    pub id: CommandId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub category: CommandCategory,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(ApplicationId::from("1234").to_string(), "1234");
        assert_eq!(CommandId::from(String::from("42")).to_string(), "42");
    }

    #[test]
    fn empty_guild_is_global_scope() {
        assert!(Scope::guild("1234", "").is_global());
        assert!(!Scope::guild("1234", "99").is_global());
        assert_eq!(Scope::global("1234").to_string(), "application 1234 (global)");
    }

    #[test]
    fn category_wire_values() {
        assert_eq!(CommandCategory::from(2), CommandCategory::User);
        assert_eq!(CommandCategory::from(9), CommandCategory::Other(9));
        assert_eq!(u64::from(CommandCategory::Message), 3);
    }

    #[test]
    fn option_kind_wire_values() {
        assert_eq!(OptionKind::from(2), OptionKind::SubCommandGroup);
        assert_eq!(OptionKind::from(4), OptionKind::Leaf(LeafType::Integer));
        assert_eq!(OptionKind::from(0), OptionKind::default());
        assert_eq!(u64::from(OptionKind::Leaf(LeafType::Attachment)), 11);
    }

    #[test]
    fn command_defaults_to_chat_input() {
        let cmd: Command = serde_yaml::from_str("name: ping\ndescription: Replies pong\n")
            .expect("deserialize");
        assert_eq!(cmd.category, CommandCategory::ChatInput);
        assert!(cmd.options.is_empty());
        assert!(cmd.id.is_none());
    }

    #[test]
    fn option_without_type_is_unknown_leaf() {
        let opt: CommandOption =
            serde_yaml::from_str("name: target\ndescription: who\n").expect("deserialize");
        assert_eq!(opt.kind, OptionKind::Leaf(LeafType::Unknown(0)));
        assert!(!opt.required);
    }

    #[test]
    fn choices_accept_mixed_values() {
        let opt: CommandOption = serde_yaml::from_str(
            "name: size\ndescription: pick\ntype: 3\nchoices:\n  - { name: small, value: s }\n  - { name: ten, value: 10 }\n",
        )
        .expect("deserialize");
        assert_eq!(opt.choices[0].value, ChoiceValue::String("s".into()));
        assert_eq!(opt.choices[1].value, ChoiceValue::Integer(10));
    }

    #[test]
    fn bounds_keep_integer_form() {
        let opt: CommandOption = serde_yaml::from_str(
            "name: minutes\ndescription: how long\ntype: 4\nmin_value: 1\nmax_value: 2.5\n",
        )
        .expect("deserialize");
        assert_eq!(opt.min_value, Some(OptionBound::Integer(1)));
        assert_eq!(opt.max_value, Some(OptionBound::Number(2.5)));

        let yaml = serde_yaml::to_string(&opt).expect("serialize");
        assert!(yaml.contains("min_value: 1\n"), "got: {yaml}");
        assert!(yaml.contains("max_value: 2.5\n"), "got: {yaml}");
    }

    #[test]
    fn remote_command_ignores_extra_fields() {
        let payload = r#"{"id": "42", "name": "ping", "type": 1, "application_id": "1234", "version": "7"}"#;
        let remote: RemoteCommand = serde_yaml::from_str(payload).expect("deserialize");
        assert_eq!(remote.id, CommandId::from("42"));
        assert_eq!(remote.category, CommandCategory::ChatInput);
    }
}
