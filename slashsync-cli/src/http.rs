//! Command registry backed by the platform's REST API.

use std::time::Duration;

use thiserror::Error;

use slashsync_core::{Command, CommandId, RemoteCommand, Scope};
use slashsync_sync::{CommandRegistry, RemoteError};

pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failures talking to the REST API.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(#[from] std::io::Error),
}

impl From<ureq::Error> for HttpError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, response) => HttpError::Status {
                code,
                body: response.into_string().unwrap_or_default(),
            },
            ureq::Error::Transport(transport) => HttpError::Transport(transport.to_string()),
        }
    }
}

/// Blocking REST client authenticated with a bot token.
pub struct HttpRegistry {
    agent: ureq::Agent,
    api_base: String,
    token: String,
}

impl HttpRegistry {
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build(),
            api_base: api_base.into().trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    /// Collection URL for commands registered in `scope`.
    pub fn commands_url(&self, scope: &Scope) -> String {
        match &scope.guild {
            Some(guild) => format!(
                "{}/applications/{}/guilds/{}/commands",
                self.api_base, scope.application, guild
            ),
            None => format!("{}/applications/{}/commands", self.api_base, scope.application),
        }
    }

    fn authorization(&self) -> String {
        format!("Bot {}", self.token)
    }
}

impl CommandRegistry for HttpRegistry {
    fn list(&self, scope: &Scope) -> Result<Vec<RemoteCommand>, RemoteError> {
        let url = self.commands_url(scope);
        tracing::debug!("GET {url}");
        let response = self
            .agent
            .get(&url)
            .set("Authorization", &self.authorization())
            .call()
            .map_err(HttpError::from)?;
        let commands: Vec<RemoteCommand> = response.into_json().map_err(HttpError::from)?;
        Ok(commands)
    }

    fn create(&self, scope: &Scope, command: &Command) -> Result<RemoteCommand, RemoteError> {
        let url = self.commands_url(scope);
        tracing::debug!("POST {url} ({})", command.name);
        let response = self
            .agent
            .post(&url)
            .set("Authorization", &self.authorization())
            .send_json(command)
            .map_err(HttpError::from)?;
        let created: RemoteCommand = response.into_json().map_err(HttpError::from)?;
        Ok(created)
    }

    fn delete(&self, scope: &Scope, id: &CommandId) -> Result<(), RemoteError> {
        let url = format!("{}/{}", self.commands_url(scope), id);
        tracing::debug!("DELETE {url}");
        self.agent
            .delete(&url)
            .set("Authorization", &self.authorization())
            .call()
            .map_err(HttpError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_and_guild_urls() {
        let registry = HttpRegistry::new("https://example.test/api/", "t");
        assert_eq!(
            registry.commands_url(&Scope::global("1234")),
            "https://example.test/api/applications/1234/commands"
        );
        assert_eq!(
            registry.commands_url(&Scope::guild("1234", "99")),
            "https://example.test/api/applications/1234/guilds/99/commands"
        );
    }

    #[test]
    fn status_errors_keep_code() {
        let err = HttpError::Status { code: 429, body: "slow down".into() };
        assert_eq!(err.to_string(), "HTTP 429: slow down");
    }

    #[test]
    fn request_body_keeps_integer_bounds() {
        let set = slashsync_core::loader::parse_command_set(
            "commands:\n  - name: poll\n    description: Run a poll\n    options:\n      - { name: minutes, description: How long, type: 4, min_value: 1, max_value: 2.5 }\n",
        )
        .expect("parse");
        let body = serde_json::to_string(&set.commands[0]).expect("json");
        assert!(body.contains(r#""min_value":1,"#), "got: {body}");
        assert!(body.contains(r#""max_value":2.5"#), "got: {body}");
    }
}
