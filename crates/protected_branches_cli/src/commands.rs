//! The list command: discover protected branches and print them.

use std::io::Write;

use branch_discovery::{describe_project, list_protected_branches};
use clap::ValueEnum;
use gitlab_client::{GitLabClient, Project, ProjectClient, ProjectId};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{config::AppConfig, errors::Error};

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;

/// How the branch names are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One branch name per line
    #[default]
    Text,
    /// A JSON array of branch names
    Json,
}

/// Presentation options for the list command.
#[derive(Clone, Debug, Default)]
pub struct ListOptions {
    pub format: OutputFormat,
    /// Print project metadata ahead of the branch list
    pub show_project: bool,
}

/// JSON document printed when project metadata is requested.
#[derive(Debug, Serialize)]
struct ProjectReport<'a> {
    project: &'a str,
    default_branch: Option<&'a str>,
    web_url: &'a str,
    protected_branches: &'a [String],
}

/// Runs the list command against the configured server and writes the result
/// to standard output.
///
/// The HTTP client lives for the duration of this call only.
///
/// # Errors
///
/// Returns `Error::Config` if the server URL is unusable, `Error::Discovery`
/// if the provider request fails, or `Error::Output` if stdout cannot be
/// written.
#[instrument(skip(config), fields(project_id = %config.project_id))]
pub async fn execute(config: AppConfig, options: &ListOptions) -> Result<(), Error> {
    let AppConfig {
        server,
        project_id,
        token,
        timeout,
    } = config;

    let client =
        GitLabClient::new(&server, token, timeout).map_err(|e| Error::Config(e.to_string()))?;

    let mut buffer = Vec::new();
    list_protected(&client, &project_id, options, &mut buffer).await?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(&buffer)
        .and_then(|_| handle.flush())
        .map_err(|e| Error::Output(e.to_string()))
}

/// Discovers the protected branches of `project_id` and writes them to `out`.
///
/// Output is only written once every request has succeeded, so a failure
/// leaves `out` untouched.
pub async fn list_protected<C, W>(
    client: &C,
    project_id: &ProjectId,
    options: &ListOptions,
    out: &mut W,
) -> Result<(), Error>
where
    C: ProjectClient + ?Sized,
    W: Write,
{
    let project = if options.show_project {
        Some(describe_project(client, project_id).await?)
    } else {
        None
    };

    let names = list_protected_branches(client, project_id).await?;
    info!(count = names.len(), "Printing protected branches");

    let rendered = render(project.as_ref(), &names, options.format)?;
    out.write_all(rendered.as_bytes())
        .map_err(|e| Error::Output(e.to_string()))
}

/// Renders the branch names (and optional project header) in `format`.
pub fn render(
    project: Option<&Project>,
    names: &[String],
    format: OutputFormat,
) -> Result<String, Error> {
    match format {
        OutputFormat::Text => {
            let mut text = String::new();
            if let Some(project) = project {
                text.push_str(&format!(
                    "{} (default branch: {})\n",
                    project.path_with_namespace,
                    project.default_branch.as_deref().unwrap_or("none")
                ));
            }
            for name in names {
                text.push_str(name);
                text.push('\n');
            }
            Ok(text)
        }
        OutputFormat::Json => {
            let json = match project {
                Some(project) => serde_json::to_string_pretty(&ProjectReport {
                    project: &project.path_with_namespace,
                    default_branch: project.default_branch.as_deref(),
                    web_url: &project.web_url,
                    protected_branches: names,
                }),
                None => serde_json::to_string_pretty(names),
            }
            .map_err(|e| Error::Output(e.to_string()))?;
            Ok(json + "\n")
        }
    }
}
