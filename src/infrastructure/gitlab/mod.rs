//! GitLab GraphQL API access
//!
//! Lists every project of a namespace (subgroups included) through the
//! `namespace.projects` connection, following cursors until the last page.

pub mod client;
pub mod error;
pub mod project_source;
pub mod types;

pub use client::{GitLabClient, DEFAULT_GRAPHQL_URL};
pub use error::GitLabError;
pub use project_source::ProjectSource;
pub use types::ProjectNode;
