/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - GitLab GraphQL API access (project listing)
/// - SCM operations (clone and pull through the git CLI)
pub mod gitlab;
pub mod scm;

// Re-export commonly used types
pub use gitlab::{GitLabClient, GitLabError, ProjectSource};
pub use scm::{GitScm, ScmError, ScmOperations};
