use crate::domain::value_objects::{
    git_url::GitUrlError, namespace::NamespaceError, project_path::ProjectPathError,
};
use crate::infrastructure::gitlab::GitLabError;
use crate::infrastructure::scm::ScmError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlsyncError {
    #[error("GitLab API request failed: {message}")]
    GitLabError {
        message: String,
        #[source]
        source: Option<GitLabError>,
    },

    #[error("Repository operation failed: {message}")]
    ScmError {
        message: String,
        repository: Option<String>,
        #[source]
        source: Option<ScmError>,
    },

    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {field} - {message}")]
    ValidationError {
        field: String,
        message: String,
        value: Option<String>,
    },
}

impl GlsyncError {
    pub fn gitlab_error_with_source(message: impl Into<String>, source: GitLabError) -> Self {
        Self::GitLabError {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn scm_error_with_source(
        message: impl Into<String>,
        repository: Option<String>,
        source: ScmError,
    ) -> Self {
        Self::ScmError {
            message: message.into(),
            repository,
            source: Some(source),
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn validation_error(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
            value,
        }
    }
}

impl From<GitLabError> for GlsyncError {
    fn from(error: GitLabError) -> Self {
        Self::gitlab_error_with_source(error.to_string(), error)
    }
}

impl From<NamespaceError> for GlsyncError {
    fn from(error: NamespaceError) -> Self {
        Self::config_error_with_source(format!("Invalid namespace: {}", error), error)
    }
}

impl From<ProjectPathError> for GlsyncError {
    fn from(error: ProjectPathError) -> Self {
        let value = error.value().map(str::to_string);
        Self::validation_error("fullPath", error.to_string(), value)
    }
}

impl From<GitUrlError> for GlsyncError {
    fn from(error: GitUrlError) -> Self {
        let value = error.value().map(str::to_string);
        Self::validation_error("sshUrlToRepo", error.to_string(), value)
    }
}
