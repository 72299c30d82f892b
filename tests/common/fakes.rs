//! Recording fakes for the project source and SCM seams

use async_trait::async_trait;
use glsync::domain::value_objects::{git_url::GitUrl, namespace::Namespace};
use glsync::infrastructure::gitlab::{GitLabError, ProjectNode, ProjectSource};
use glsync::infrastructure::scm::{ScmError, ScmOperations};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Project source returning a fixed listing, or a fixed failure
pub struct FakeProjectSource {
    projects: Vec<ProjectNode>,
    failure: Mutex<Option<GitLabError>>,
    calls: Mutex<Vec<String>>,
}

impl FakeProjectSource {
    pub fn with_projects(full_paths: &[&str]) -> Self {
        Self::with_nodes(
            full_paths
                .iter()
                .map(|p| ProjectNode::new(ssh_url(p), *p))
                .collect(),
        )
    }

    pub fn with_nodes(projects: Vec<ProjectNode>) -> Self {
        Self {
            projects,
            failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: GitLabError) -> Self {
        Self {
            projects: Vec::new(),
            failure: Mutex::new(Some(error)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Namespaces that were requested, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

/// SSH URL the fakes hand out for a project path
pub fn ssh_url(full_path: &str) -> String {
    format!("git@gitlab.example.com:{}.git", full_path)
}

#[async_trait]
impl ProjectSource for FakeProjectSource {
    async fn list_projects(&self, namespace: &Namespace) -> Result<Vec<ProjectNode>, GitLabError> {
        self.calls.lock().unwrap().push(namespace.to_string());

        match self.failure.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(self.projects.clone()),
        }
    }
}

/// One recorded SCM invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScmCall {
    Clone { url: String, dest: PathBuf },
    Pull { path: PathBuf },
}

/// SCM fake that records every call and emulates a clone by creating the directory
#[derive(Default)]
pub struct RecordingScm {
    calls: Mutex<Vec<ScmCall>>,
    failing_urls: HashSet<String>,
    failing_pulls: HashSet<PathBuf>,
}

impl RecordingScm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the clone of this URL fail
    pub fn failing_clone_of(mut self, url: impl Into<String>) -> Self {
        self.failing_urls.insert(url.into());
        self
    }

    /// Make the pull in this directory fail
    pub fn failing_pull_in(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_pulls.insert(path.into());
        self
    }

    pub fn calls(&self) -> Vec<ScmCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clone_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ScmCall::Clone { .. }))
            .count()
    }

    pub fn pull_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ScmCall::Pull { .. }))
            .count()
    }
}

#[async_trait]
impl ScmOperations for RecordingScm {
    async fn clone_repository(&self, url: &GitUrl, dest_path: &Path) -> Result<(), ScmError> {
        self.calls.lock().unwrap().push(ScmCall::Clone {
            url: url.to_string(),
            dest: dest_path.to_path_buf(),
        });

        if self.failing_urls.contains(url.as_str()) {
            return Err(ScmError::clone_failed(format!(
                "fatal: Could not read from remote repository {}",
                url
            )));
        }

        std::fs::create_dir_all(dest_path.join(".git"))?;
        Ok(())
    }

    async fn pull_repository(&self, repo_path: &Path) -> Result<(), ScmError> {
        self.calls.lock().unwrap().push(ScmCall::Pull {
            path: repo_path.to_path_buf(),
        });

        if self.failing_pulls.contains(repo_path) {
            return Err(ScmError::pull_failed("fatal: not a git repository"));
        }

        Ok(())
    }

    fn is_repository(&self, path: &Path) -> bool {
        path.join(".git").exists()
    }
}
