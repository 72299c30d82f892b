use crate::domain::value_objects::git_url::GitUrl;
use async_trait::async_trait;
use std::path::Path;

/// Version-control operations needed to mirror a namespace
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScmOperations: Send + Sync {
    /// Clone a repository from the given URL to the specified path
    async fn clone_repository(&self, url: &GitUrl, dest_path: &Path) -> Result<(), ScmError>;

    /// Pull the current branch of an existing repository
    async fn pull_repository(&self, repo_path: &Path) -> Result<(), ScmError>;

    /// Check if a directory is a repository this implementation can pull
    fn is_repository(&self, path: &Path) -> bool;
}

/// Errors that can occur during SCM operations
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("Clone operation failed: {message}")]
    CloneFailed { message: String },

    #[error("Pull operation failed: {message}")]
    PullFailed { message: String },

    #[error("SCM executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Command execution failed: {command}, exit code: {exit_code}, stderr: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },
}

impl ScmError {
    /// Create a clone failed error
    pub fn clone_failed(message: impl Into<String>) -> Self {
        Self::CloneFailed {
            message: message.into(),
        }
    }

    /// Create a pull failed error
    pub fn pull_failed(message: impl Into<String>) -> Self {
        Self::PullFailed {
            message: message.into(),
        }
    }

    /// Create an executable not found error
    pub fn executable_not_found(executable: impl Into<String>) -> Self {
        Self::ExecutableNotFound {
            executable: executable.into(),
        }
    }

    /// Create a command failed error
    pub fn command_failed(
        command: impl Into<String>,
        exit_code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }
}
