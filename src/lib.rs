//! # glsync - GitLab namespace mirror
//!
//! `glsync` keeps a local directory tree in step with every repository of a
//! GitLab group or user namespace. It lists the projects of the namespace
//! (subgroups included) through the GitLab GraphQL API, then clones each
//! project that is missing locally and pulls each one that already exists.
//!
//! ## Quick Start
//!
//! ```bash
//! export GITLAB_TOKEN=glpat-...
//! glsync --namespace my-group --workdir ~/src
//! ```
//!
//! Projects land in `<workdir>/<fullPath>`, so `my-group/tools/cli` is
//! cloned into `~/src/my-group/tools/cli`.
//!
//! ## Architecture
//!
//! - [`domain`]: project records, workdir resolution and validated value objects
//! - [`application`]: the sync use case (fetch, decide clone or pull, act)
//! - [`infrastructure`]: GitLab GraphQL client and the `git` CLI wrapper
//! - [`presentation`]: CLI interface
//! - [`common`]: shared error handling
//!
//! ## Error Handling
//!
//! Failing to list the namespace aborts the run. A failed clone or pull is
//! logged and the run moves on to the next repository.
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use glsync::application::use_cases::sync_namespace::{
//!     SyncNamespaceConfig, SyncNamespaceUseCase,
//! };
//! use glsync::domain::entities::workdir::Workdir;
//! use glsync::domain::value_objects::namespace::Namespace;
//! use glsync::infrastructure::{GitLabClient, GitScm};
//!
//! # async fn example() -> glsync::Result<()> {
//! let config = SyncNamespaceConfig::new(Namespace::new("my-group")?, Workdir::resolve(None)?);
//! let client = GitLabClient::gitlab_com("glpat-...")?;
//!
//! let use_case = SyncNamespaceUseCase::new(config, Arc::new(client), Arc::new(GitScm::new()));
//! let result = use_case.execute().await?;
//!
//! println!("cloned {}, pulled {}", result.cloned_count, result.pulled_count);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::GlsyncError;
pub use crate::common::result::GlsyncResult as Result;
