//! # Models
//!
//! This module contains the data models returned by, or sent to, the GitLab
//! REST API. Only the fields this client uses are modelled; anything else in a
//! response is ignored during deserialization.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::Error;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a branch in a GitLab project.
///
/// # Examples
///
/// ```
/// use gitlab_client::models::Branch;
///
/// let branch: Branch = serde_json::from_str(r#"{"name": "main", "protected": true}"#).unwrap();
/// assert!(branch.protected);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Branch {
    /// The branch name, unique within the project
    pub name: String,
    /// Whether the branch is protected against force-push and deletion
    pub protected: bool,
}

impl Branch {
    pub fn new(name: &str, protected: bool) -> Self {
        Self {
            name: name.to_string(),
            protected,
        }
    }
}

/// Metadata for a GitLab project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Project {
    /// The numeric project ID
    pub id: u64,
    /// The display name of the project
    pub name: String,
    /// The full path, e.g. `group/subgroup/project`
    pub path_with_namespace: String,
    /// The default branch; absent for projects without a repository
    #[serde(default)]
    pub default_branch: Option<String>,
    /// Browser URL of the project
    pub web_url: String,
}

/// Identifies a project on the server.
///
/// GitLab accepts either the numeric ID or the full namespaced path wherever an
/// `:id` appears in a route.
///
/// # Examples
///
/// ```
/// use gitlab_client::models::ProjectId;
///
/// let numeric: ProjectId = "42".parse().unwrap();
/// assert_eq!(numeric, ProjectId::Numeric(42));
///
/// let path: ProjectId = "group/project".parse().unwrap();
/// assert_eq!(path, ProjectId::Path("group/project".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectId {
    Numeric(u64),
    Path(String),
}

impl ProjectId {
    /// Returns the identifier as a single, unencoded URL path segment.
    pub fn as_segment(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Numeric(id) => write!(f, "{}", id),
            ProjectId::Path(path) => f.write_str(path),
        }
    }
}

impl FromStr for ProjectId {
    type Err = Error;

    /// Parses a numeric ID or a namespaced path.
    ///
    /// A path copied in its URL-encoded form (`group%2Fproject`) is accepted
    /// and stored unencoded. Leading and trailing `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = s.trim().replace("%2F", "/").replace("%2f", "/");
        let trimmed = decoded.trim_matches('/');
        if trimmed.is_empty() {
            return Err(Error::InvalidProjectId(
                "project identifier must not be empty".to_string(),
            ));
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = trimmed.parse::<u64>() {
                return Ok(ProjectId::Numeric(id));
            }
        }

        Ok(ProjectId::Path(trimmed.to_string()))
    }
}

impl From<u64> for ProjectId {
    fn from(value: u64) -> Self {
        ProjectId::Numeric(value)
    }
}
