pub mod git_url;
pub mod namespace;
pub mod project_path;
