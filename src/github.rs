use anyhow::Result;
use async_trait::async_trait;
use http::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use http::{HeaderName, HeaderValue, Uri};
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use octocrab::service::middleware::base_uri::BaseUriLayer;
use octocrab::service::middleware::extra_headers::ExtraHeadersLayer;
use octocrab::{AuthState, Octocrab, OctocrabBuilder};
use std::sync::Arc;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{RepoStars, SearchPage};

const AGENT: &str = "code-search-census";

/// The GitHub calls the pipeline needs.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Fetch one page of code search results, newest index first.
    async fn search_code(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<SearchPage, ApiError>;

    /// Star count of `full_name` ("owner/repo"); `None` when GitHub omits it.
    async fn repository_stars(&self, full_name: &str) -> Result<Option<u64>, ApiError>;
}

#[derive(Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    per_page: u32,
    page: u32,
    sort: &'static str,
    order: &'static str,
}

/// Headers sent with every request. The stock octocrab builder always adds
/// its own `User-Agent`, so the client is assembled from octocrab's layers
/// instead and these are the only headers it sets.
fn request_headers(token: Option<&str>) -> Result<Vec<(HeaderName, HeaderValue)>> {
    let mut headers = vec![
        (ACCEPT, HeaderValue::from_static("application/vnd.github+json")),
        (USER_AGENT, HeaderValue::from_static(AGENT)),
    ];
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        value.set_sensitive(true);
        headers.push((AUTHORIZATION, value));
    }
    Ok(headers)
}

pub fn build_client(config: &Config) -> Result<Octocrab> {
    let connector = HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .build();
    let client = Client::builder(TokioExecutor::new()).build(connector);
    let base_uri: Uri = config.api_url.parse()?;
    let headers = request_headers(config.token.as_deref())?;

    let octocrab = OctocrabBuilder::new_empty()
        .with_service(client)
        .with_layer(&BaseUriLayer::new(base_uri))
        .with_layer(&ExtraHeadersLayer::new(Arc::new(headers)))
        .with_auth(AuthState::None)
        .build()?;
    Ok(octocrab)
}

#[async_trait]
impl GitHubApi for Octocrab {
    async fn search_code(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<SearchPage, ApiError> {
        let params = SearchParams {
            q: query,
            per_page,
            page,
            sort: "indexed",
            order: "desc",
        };
        Ok(self.get("/search/code", Some(&params)).await?)
    }

    async fn repository_stars(&self, full_name: &str) -> Result<Option<u64>, ApiError> {
        let repo: RepoStars = self
            .get(format!("/repos/{}", full_name), None::<&()>)
            .await?;
        Ok(repo.stargazers_count)
    }
}
