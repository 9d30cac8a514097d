//! Error taxonomy for branch discovery.

use gitlab_client::ProjectId;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors returned by the discovery operations.
///
/// None of these are recovered from inside this crate; they are handed to the
/// caller as soon as they occur.
#[derive(Error, Debug)]
pub enum Error {
    /// The provider rejected the access token (HTTP 401 or 403).
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The client was given values it cannot use, such as an unparseable
    /// server URL or an empty project identifier.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider answered with a success status but the body was not the
    /// expected shape.
    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),

    /// The project identifier does not resolve to a visible project (HTTP 404).
    #[error("Project '{project}' not found")]
    NotFound { project: String },

    /// Network failure or an unexpected HTTP status.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Classifies a client error, attaching the project it concerned.
    pub fn from_client(error: gitlab_client::Error, project_id: &ProjectId) -> Self {
        use gitlab_client::Error as ClientError;

        match error {
            ClientError::AuthError(msg) => Error::Authentication(msg),
            ClientError::NotFound => Error::NotFound {
                project: project_id.to_string(),
            },
            ClientError::Deserialization(e) => Error::InvalidResponse(e.to_string()),
            ClientError::InvalidProjectId(msg) | ClientError::InvalidServerUrl(msg) => {
                Error::Configuration(msg)
            }
            ClientError::Transport(msg) => Error::Transport(msg),
            ClientError::UnexpectedStatus(code) => {
                Error::Transport(format!("unexpected HTTP status {}", code))
            }
        }
    }
}
