use thiserror::Error;

/// Errors returned while listing projects from the GitLab GraphQL API.
///
/// Every variant is fatal for a run: no repository is touched once one occurs.
#[derive(Debug, Error)]
pub enum GitLabError {
    #[error("GitLab GraphQL API returned an error: Status code {status} Message: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("GitLab GraphQL API returned an error: Status code {status} Message: {body}")]
    GraphQl {
        status: u16,
        messages: Vec<String>,
        body: String,
    },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response from GitLab GraphQL API: {message}")]
    InvalidResponse { message: String },

    #[error("Namespace '{namespace}' not found or not visible with this token")]
    NamespaceNotFound { namespace: String },

    #[error("Invalid GitLab GraphQL endpoint '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },
}

impl GitLabError {
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}
