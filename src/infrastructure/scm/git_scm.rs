use super::scm_interface::{ScmError, ScmOperations};
use crate::domain::value_objects::git_url::GitUrl;
use async_trait::async_trait;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Git implementation of SCM operations, backed by the `git` executable
pub struct GitScm {
    git_executable: String,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Git SCM instance with custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
        }
    }

    /// Check if git executable is available
    pub async fn check_availability(&self) -> Result<(), ScmError> {
        let output = self
            .execute_git_command(&[OsStr::new("--version")], None)
            .await?;

        if !output.status.success() {
            return Err(ScmError::executable_not_found(&self.git_executable));
        }

        Ok(())
    }

    /// Execute a git command in the given directory
    async fn execute_git_command(
        &self,
        args: &[&OsStr],
        working_dir: Option<&Path>,
    ) -> Result<std::process::Output, ScmError> {
        let mut cmd = Command::new(&self.git_executable);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // never block on a credential prompt
            .env("GIT_TERMINAL_PROMPT", "0");

        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        debug!("Running {} {}", self.git_executable, display_args(args));

        cmd.output().await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ScmError::executable_not_found(&self.git_executable),
            _ => ScmError::from(e),
        })
    }

    /// Execute a git command and check for success
    async fn execute_git_command_checked(
        &self,
        args: &[&OsStr],
        working_dir: Option<&Path>,
    ) -> Result<String, ScmError> {
        let output = self.execute_git_command(args, working_dir).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let command = format!("{} {}", self.git_executable, display_args(args));
            return Err(ScmError::command_failed(
                command,
                output.status.code().unwrap_or(-1),
                stderr.trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn display_args(args: &[&OsStr]) -> String {
    args.iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl ScmOperations for GitScm {
    async fn clone_repository(&self, url: &GitUrl, dest_path: &Path) -> Result<(), ScmError> {
        // `--` keeps the URL and destination from being read as options
        let args = [
            OsStr::new("clone"),
            OsStr::new("--"),
            OsStr::new(url.as_str()),
            dest_path.as_os_str(),
        ];

        self.execute_git_command_checked(&args, None)
            .await
            .map_err(|e| match e {
                ScmError::CommandFailed { stderr, .. } => ScmError::clone_failed(stderr),
                other => other,
            })?;

        Ok(())
    }

    async fn pull_repository(&self, repo_path: &Path) -> Result<(), ScmError> {
        if !repo_path.is_dir() {
            return Err(ScmError::pull_failed(format!(
                "{} is not a directory",
                repo_path.display()
            )));
        }

        self.execute_git_command_checked(&[OsStr::new("pull")], Some(repo_path))
            .await
            .map_err(|e| match e {
                ScmError::CommandFailed { stderr, .. } => ScmError::pull_failed(stderr),
                other => other,
            })?;

        Ok(())
    }

    fn is_repository(&self, path: &Path) -> bool {
        path.join(".git").exists()
    }
}
