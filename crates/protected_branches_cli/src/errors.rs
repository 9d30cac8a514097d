use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the protected-branches CLI.
///
/// Every variant ends the process with a non-zero exit code; none of them are
/// recovered from.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error, raised before any request is sent.
    ///
    /// Returned when a required environment variable is missing or empty, or
    /// when a supplied value (server URL, project identifier, timeout) cannot
    /// be used.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Branch discovery failed.
    #[error(transparent)]
    Discovery(#[from] branch_discovery::Error),

    /// The result could not be rendered or written to standard output.
    #[error("Failed to write output: {0}")]
    Output(String),
}
