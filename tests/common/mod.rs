//! Common test utilities and helpers
//!
//! Recording fakes for the project source and SCM seams, plus a local
//! HTTP endpoint that serves canned GraphQL responses.

#![allow(dead_code)]

pub mod fakes;
pub mod graphql_stub;

use std::path::Path;

/// Names of the entries directly under `dir`, sorted
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
