/// SCM (Source Control Management) operations infrastructure
///
/// Clone and pull are delegated to the `git` command line client.
pub mod git_scm;
pub mod scm_interface;

pub use git_scm::GitScm;
pub use scm_interface::{ScmError, ScmOperations};
