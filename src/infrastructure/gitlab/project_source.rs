use super::error::GitLabError;
use super::types::ProjectNode;
use crate::domain::value_objects::namespace::Namespace;
use async_trait::async_trait;

/// Source of the project listing for a namespace
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// List every project under the namespace, subgroups included, in API order
    async fn list_projects(&self, namespace: &Namespace) -> Result<Vec<ProjectNode>, GitLabError>;
}
