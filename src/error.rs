use thiserror::Error;

/// A failed GitHub call.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("GitHub API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GitHub request failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// GitHub signals primary and secondary rate limits in the message text,
    /// so that is what we look at rather than the status code.
    pub fn is_rate_limited(&self) -> bool {
        let text = self.to_string().to_lowercase();
        text.contains("rate limit") || text.contains("abuse detection")
    }
}

impl From<octocrab::Error> for ApiError {
    fn from(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => ApiError::Status {
                status: source.status_code.as_u16(),
                body: error_body(&source),
            },
            other => ApiError::Transport(other.to_string()),
        }
    }
}

/// Rebuild the JSON error document GitHub sent, keeping only the fields
/// it actually had.
fn error_body(err: &octocrab::GitHubError) -> String {
    let mut body = serde_json::Map::new();
    body.insert("message".into(), err.message.clone().into());
    if let Some(url) = &err.documentation_url {
        body.insert("documentation_url".into(), url.clone().into());
    }
    if let Some(errors) = &err.errors {
        body.insert("errors".into(), errors.clone().into());
    }
    serde_json::Value::Object(body).to_string()
}

/// Errors that abort the whole search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("still rate limited on page {page} after {retries} retries")]
    RetriesExhausted { page: u32, retries: u32 },
}
