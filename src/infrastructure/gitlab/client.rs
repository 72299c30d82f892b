use super::error::GitLabError;
use super::project_source::ProjectSource;
use super::types::{
    GraphQlRequest, GraphQlResponse, NamespaceData, ProjectConnection, ProjectNode,
    ProjectsVariables, PROJECTS_QUERY,
};
use crate::domain::value_objects::namespace::Namespace;
use async_trait::async_trait;
use std::fmt;
use tracing::debug;
use url::Url;

/// GraphQL endpoint of gitlab.com
pub const DEFAULT_GRAPHQL_URL: &str = "https://gitlab.com/api/graphql";

/// GitLab GraphQL API client
///
/// Authenticates with a personal access token sent as a bearer token. The
/// token needs the `read_api` scope for listing; cloning over SSH uses the
/// local SSH setup, not this token.
#[derive(Clone)]
pub struct GitLabClient {
    http: reqwest::Client,
    endpoint: Url,
    token: String,
}

impl fmt::Debug for GitLabClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitLabClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

impl GitLabClient {
    /// Create a client for the given GraphQL endpoint
    pub fn new(endpoint: &str, token: impl Into<String>) -> Result<Self, GitLabError> {
        let parsed = Url::parse(endpoint).map_err(|e| GitLabError::InvalidEndpoint {
            url: endpoint.to_string(),
            message: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "https" | "http") {
            return Err(GitLabError::InvalidEndpoint {
                url: endpoint.to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("glsync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| GitLabError::Transport {
                url: endpoint.to_string(),
                source,
            })?;

        Ok(Self {
            http,
            endpoint: parsed,
            token: token.into(),
        })
    }

    /// Client for gitlab.com
    pub fn gitlab_com(token: impl Into<String>) -> Result<Self, GitLabError> {
        Self::new(DEFAULT_GRAPHQL_URL, token)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch_page(
        &self,
        namespace: &Namespace,
        after: Option<&str>,
    ) -> Result<ProjectConnection, GitLabError> {
        let request = GraphQlRequest {
            query: PROJECTS_QUERY,
            variables: ProjectsVariables {
                full_path: namespace.as_str(),
                after,
            },
        };

        debug!(namespace = %namespace, after = ?after, "Querying {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(|source| self.transport_error(source))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|source| self.transport_error(source))?;

        parse_projects_page(status, &body, namespace)
    }

    fn transport_error(&self, source: reqwest::Error) -> GitLabError {
        GitLabError::Transport {
            url: self.endpoint.to_string(),
            source,
        }
    }
}

#[async_trait]
impl ProjectSource for GitLabClient {
    async fn list_projects(&self, namespace: &Namespace) -> Result<Vec<ProjectNode>, GitLabError> {
        let mut projects = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(namespace, cursor.as_deref()).await?;
            pages += 1;

            let next = if page.has_next_page() {
                let next_cursor = page.next_cursor().ok_or_else(|| {
                    GitLabError::invalid_response("hasNextPage is true but endCursor is missing")
                })?;
                Some(next_cursor.to_string())
            } else {
                None
            };

            projects.extend(page.nodes.into_iter().flatten());

            match next {
                Some(next) if cursor.as_deref() == Some(next.as_str()) => {
                    return Err(GitLabError::invalid_response(format!(
                        "pagination cursor '{}' did not advance",
                        next
                    )));
                }
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!(
            namespace = %namespace,
            pages,
            projects = projects.len(),
            "Fetched project listing"
        );

        Ok(projects)
    }
}

/// Interpret one HTTP exchange with the GraphQL endpoint.
///
/// Anything but status 200, or any body carrying an `errors` key, is an error.
pub fn parse_projects_page(
    status: u16,
    body: &str,
    namespace: &Namespace,
) -> Result<ProjectConnection, GitLabError> {
    if status != 200 {
        return Err(GitLabError::HttpStatus {
            status,
            body: body.to_string(),
        });
    }

    let response: GraphQlResponse<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| {
            GitLabError::invalid_response(format!("body is not a GraphQL response: {}", e))
        })?;

    if let Some(errors) = response.errors {
        return Err(GitLabError::GraphQl {
            status,
            messages: errors
                .into_iter()
                .map(|e| e.message)
                .filter(|m| !m.is_empty())
                .collect(),
            body: body.to_string(),
        });
    }

    let data = response
        .data
        .ok_or_else(|| GitLabError::invalid_response("response has no data"))?;

    let data: NamespaceData = serde_json::from_value(data)
        .map_err(|e| GitLabError::invalid_response(format!("unexpected shape: {}", e)))?;

    data.namespace
        .map(|namespace| namespace.projects)
        .ok_or_else(|| GitLabError::NamespaceNotFound {
            namespace: namespace.to_string(),
        })
}
