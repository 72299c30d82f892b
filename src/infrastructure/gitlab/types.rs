//! Wire types for the GitLab GraphQL projects query

use serde::{Deserialize, Deserializer, Serialize};

/// Lists the projects of a namespace one page at a time.
pub const PROJECTS_QUERY: &str = r#"
query($fullPath: ID!, $after: String) {
  namespace(fullPath: $fullPath) {
    projects(includeSubgroups: true, after: $after) {
      nodes {
        sshUrlToRepo
        fullPath
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
}
"#;

/// GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// Variables of [`PROJECTS_QUERY`]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsVariables<'a> {
    pub full_path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<&'a str>,
}

/// GraphQL response envelope
///
/// `errors` is `Some` whenever the key is present, even as `null` or `[]`.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default, deserialize_with = "present_errors")]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

fn present_errors<'de, D>(deserializer: D) -> Result<Option<Vec<GraphQlError>>, D::Error>
where
    D: Deserializer<'de>,
{
    let errors = Option::<Vec<GraphQlError>>::deserialize(deserializer)?;
    Ok(Some(errors.unwrap_or_default()))
}

#[derive(Debug, Deserialize)]
pub struct NamespaceData {
    pub namespace: Option<NamespaceNode>,
}

#[derive(Debug, Deserialize)]
pub struct NamespaceNode {
    pub projects: ProjectConnection,
}

/// One page of the `projects` connection
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConnection {
    #[serde(default)]
    pub nodes: Vec<Option<ProjectNode>>,
    pub page_info: Option<PageInfo>,
}

impl ProjectConnection {
    /// Cursor of the next page, if the API reports one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.page_info
            .as_ref()
            .filter(|info| info.has_next_page)
            .and_then(|info| info.end_cursor.as_deref())
    }

    pub fn has_next_page(&self) -> bool {
        self.page_info.as_ref().is_some_and(|info| info.has_next_page)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// A project as listed by the API, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNode {
    /// `null` when the repository feature is disabled for the project
    pub ssh_url_to_repo: Option<String>,
    pub full_path: String,
}

impl ProjectNode {
    pub fn new(ssh_url_to_repo: impl Into<String>, full_path: impl Into<String>) -> Self {
        Self {
            ssh_url_to_repo: Some(ssh_url_to_repo.into()),
            full_path: full_path.into(),
        }
    }
}
