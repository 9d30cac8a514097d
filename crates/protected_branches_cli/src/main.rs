use clap::Parser;
use protected_branches_cli::{
    commands::{self, ListOptions, OutputFormat},
    config::{AppConfig, ConfigOverrides, LOG_ENV_VAR},
    errors::Error,
};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// protected-branches: list the protected branches of a GitLab project, except `main`
///
/// Reads GITLAB_SERVER, GITLAB_PROJECT_ID and GITLAB_TOKEN from the environment.
#[derive(Parser)]
#[command(name = "protected-branches")]
#[command(version)]
struct Cli {
    /// Base URL of the GitLab server [overrides GITLAB_SERVER]
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Numeric project ID or namespaced path [overrides GITLAB_PROJECT_ID]
    #[arg(long, value_name = "ID")]
    project_id: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the project path and default branch before the list
    #[arg(long)]
    show_project: bool,

    /// Abort the request after this many seconds (default: no timeout)
    #[arg(long, value_name = "SECONDS")]
    timeout_secs: Option<u64>,
}

async fn run(cli: Cli) -> Result<(), Error> {
    let overrides = ConfigOverrides {
        server: cli.server,
        project_id: cli.project_id,
        timeout_secs: cli.timeout_secs,
    };
    let options = ListOptions {
        format: cli.format,
        show_project: cli.show_project,
    };

    let config = AppConfig::from_env(&overrides)?;
    commands::execute(config, &options).await
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout only carries branch names.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::from_env(LOG_ENV_VAR))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        debug!(error = ?e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
