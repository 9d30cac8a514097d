//! Error types for GitLab client operations.
//!
//! This module defines the error types that can occur when talking to a
//! GitLab-compatible REST API through the gitlab_client crate.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitLab client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use gitlab_client::Error;
///
/// match client.list_branches(&project_id).await {
///     Ok(branches) => println!("Found {} branches", branches.len()),
///     Err(Error::AuthError(msg)) => eprintln!("Authentication failed: {}", msg),
///     Err(Error::NotFound) => eprintln!("No such project"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server rejected the access token.
    ///
    /// Returned for HTTP 401 and 403 responses. The contained string holds the
    /// status line and, when available, the message sent by the server.
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitLab.
    ///
    /// This error occurs when the server answers with a success status but the
    /// body cannot be parsed into the expected data structure.
    #[error("Failed to deserialize GitLab response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The project identifier was empty.
    #[error("Invalid project identifier: {0}")]
    InvalidProjectId(String),

    /// The configured server URL could not be parsed or cannot carry a path.
    #[error("Invalid server URL: {0}")]
    InvalidServerUrl(String),

    /// The requested resource was not found.
    ///
    /// GitLab answers 404 both for projects that do not exist and for projects
    /// the token is not allowed to see.
    #[error("Resource not found")]
    NotFound,

    /// The request never produced an HTTP response.
    ///
    /// Covers connection failures, TLS errors, timeouts and failures while
    /// reading the response body.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The server returned a status code that is neither a success nor one of
    /// the statuses mapped to a more specific variant.
    #[error("Unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Transport(value.to_string())
    }
}
