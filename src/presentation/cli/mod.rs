pub mod commands;

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;

use crate::domain::value_objects::namespace::Namespace;
use crate::infrastructure::gitlab::DEFAULT_GRAPHQL_URL;
use commands::sync::SyncCommand;

/// glsync - clone or pull every repository of a GitLab namespace
#[derive(Parser, Debug)]
#[command(name = "glsync")]
#[command(about = "Clone or pull every repository of a GitLab namespace into a local tree")]
#[command(version)]
pub struct Cli {
    /// Workdir where all projects are located or cloned (defaults to $HOME)
    #[arg(long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// GitLab token with read_api and read_repository permissions
    /// (https://gitlab.com/-/user_settings/personal_access_tokens)
    #[arg(long, env = "GITLAB_TOKEN", hide_env_values = true, value_name = "TOKEN")]
    pub gitlab_token: String,

    /// Full path of the group or user namespace to mirror
    #[arg(long, env = "GITLAB_NAMESPACE", value_name = "PATH")]
    pub namespace: Namespace,

    /// GitLab GraphQL endpoint (for self-hosted instances)
    #[arg(long, env = "GITLAB_GRAPHQL_URL", default_value = DEFAULT_GRAPHQL_URL, value_name = "URL")]
    pub gitlab_url: String,

    /// Show what would be cloned or pulled without running git
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn cli(&self) -> &Cli {
        &self.cli
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        match SyncCommand::from_cli(&self.cli).execute().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }
}
