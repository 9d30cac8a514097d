//! Configuration for the protected-branches CLI.
//!
//! All process-wide inputs are read here, once, into an [`AppConfig`]. The
//! discovery code receives plain values and never looks at the environment.
//!
//! Values come from three environment variables, each of which can be
//! overridden by a command-line flag (except the token, which is only read
//! from the environment):
//!
//! | Variable            | Flag           | Meaning                        |
//! |---------------------|----------------|--------------------------------|
//! | `GITLAB_SERVER`     | `--server`     | Base URL of the server         |
//! | `GITLAB_PROJECT_ID` | `--project-id` | Numeric ID or namespaced path  |
//! | `GITLAB_TOKEN`      |                | Access token                   |

use std::time::Duration;

use gitlab_client::ProjectId;
use secrecy::SecretString;
use tracing::debug;

use crate::errors::Error;

/// Environment variable holding the server base URL.
pub const ENV_SERVER: &str = "GITLAB_SERVER";

/// Environment variable holding the project identifier.
pub const ENV_PROJECT_ID: &str = "GITLAB_PROJECT_ID";

/// Environment variable holding the access token.
pub const ENV_TOKEN: &str = "GITLAB_TOKEN";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "PROTECTED_BRANCHES_LOG";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Values supplied on the command line that take precedence over the
/// environment.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub server: Option<String>,
    pub project_id: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved configuration for one invocation.
#[derive(Debug)]
pub struct AppConfig {
    /// Base URL of the GitLab-compatible server
    pub server: String,
    /// The project whose branches are listed
    pub project_id: ProjectId,
    /// Access token sent with each request
    pub token: SecretString,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl AppConfig {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if any required value is missing or empty, if
    /// the project identifier is invalid, or if the timeout is zero.
    pub fn from_env(overrides: &ConfigOverrides) -> Result<Self, Error> {
        Self::from_lookup(overrides, |name| std::env::var(name).ok())
    }

    /// Builds the configuration using `lookup` in place of the environment.
    ///
    /// Values are trimmed; a value that is empty after trimming counts as
    /// missing. All missing names are reported together.
    pub fn from_lookup<F>(overrides: &ConfigOverrides, lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |flag: &Option<String>, name: &str| -> Option<String> {
            flag.clone()
                .or_else(|| lookup(name))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let server = resolve(&overrides.server, ENV_SERVER);
        let project_id = resolve(&overrides.project_id, ENV_PROJECT_ID);
        let token = resolve(&None, ENV_TOKEN);

        let missing: Vec<&str> = [
            (ENV_SERVER, server.is_none()),
            (ENV_PROJECT_ID, project_id.is_none()),
            (ENV_TOKEN, token.is_none()),
        ]
        .iter()
        .filter(|(_, is_missing)| *is_missing)
        .map(|(name, _)| *name)
        .collect();

        let (Some(server), Some(project_id), Some(token)) = (server, project_id, token) else {
            return Err(Error::Config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        };

        let project_id = project_id
            .parse::<ProjectId>()
            .map_err(|e| Error::Config(e.to_string()))?;

        let timeout = match overrides.timeout_secs {
            Some(0) => {
                return Err(Error::Config(
                    "timeout must be greater than zero seconds".to_string(),
                ))
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        debug!(
            server = server,
            project_id = %project_id,
            timeout_secs = overrides.timeout_secs,
            "Resolved configuration"
        );

        Ok(Self {
            server,
            project_id,
            token: SecretString::from(token),
            timeout,
        })
    }
}
