use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, warn};

use crate::application::use_cases::sync_namespace::{
    SyncNamespaceConfig, SyncNamespaceUseCase, SyncResult,
};
use crate::domain::entities::workdir::Workdir;
use crate::domain::value_objects::namespace::Namespace;
use crate::infrastructure::gitlab::{GitLabClient, ProjectSource};
use crate::infrastructure::scm::{GitScm, ScmOperations};
use crate::presentation::cli::Cli;

/// Handler for the namespace sync
pub struct SyncCommand {
    pub workdir: Option<PathBuf>,
    pub namespace: Namespace,
    pub gitlab_token: String,
    pub gitlab_url: String,
    pub dry_run: bool,
    pub verbose: bool,
}

impl SyncCommand {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            workdir: cli.workdir.clone(),
            namespace: cli.namespace.clone(),
            gitlab_token: cli.gitlab_token.clone(),
            gitlab_url: cli.gitlab_url.clone(),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        }
    }

    /// Sync against the configured GitLab endpoint using the git CLI
    pub async fn execute(&self) -> Result<SyncResult> {
        let client = GitLabClient::new(&self.gitlab_url, self.gitlab_token.as_str())?;

        let git = GitScm::new();
        if !self.dry_run {
            if let Err(e) = git.check_availability().await {
                warn!("{}; every clone and pull will fail", e);
            }
        }

        self.execute_with(Arc::new(client), Arc::new(git)).await
    }

    /// Sync with explicit project source and SCM backends
    pub async fn execute_with(
        &self,
        source: Arc<dyn ProjectSource>,
        scm: Arc<dyn ScmOperations>,
    ) -> Result<SyncResult> {
        let workdir = Workdir::resolve(self.workdir.clone())?;

        let config = SyncNamespaceConfig::new(self.namespace.clone(), workdir.clone())
            .with_dry_run(self.dry_run)
            .with_verbose(self.verbose);

        let use_case = SyncNamespaceUseCase::new(config, source, scm);

        println!(
            "{} Synchronizing {} into {}...",
            "::".blue().bold(),
            self.namespace,
            workdir.root().display()
        );

        match use_case.execute().await {
            Ok(result) => {
                self.print_summary(&result);
                Ok(result)
            }
            Err(e) => {
                error!("{}", e);
                Err(anyhow::anyhow!(
                    "Failed to list projects of {}: {}",
                    self.namespace,
                    e
                ))
            }
        }
    }

    fn print_summary(&self, result: &SyncResult) {
        if self.dry_run {
            println!("{} Dry run, nothing was changed", "✓".green().bold());
            println!("  Repositories to clone: {}", result.cloned_count);
            println!("  Repositories to pull: {}", result.pulled_count);
        } else {
            println!("{} Synchronization completed!", "✓".green().bold());
            println!("  New repositories cloned: {}", result.cloned_count);
            println!("  Repositories pulled: {}", result.pulled_count);
        }
        println!("  Repositories processed: {}", result.total_count());

        if !result.is_success() {
            println!(
                "{} {} repositories failed:",
                "⚠".yellow().bold(),
                result.failed_count
            );
            for error in &result.errors {
                println!("  {}", error.red());
            }
        }
    }
}
