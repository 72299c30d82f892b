pub mod project;
pub mod workdir;
