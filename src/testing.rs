use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::error::ApiError;
use crate::github::GitHubApi;
use crate::models::{CodeItem, CodeRepository, Owner, SearchPage};

/// Scripted stand-in for GitHub. Search pages are served in order (an empty
/// page once the script runs out); repositories missing from the star table
/// fail like an unreachable host.
#[derive(Default)]
pub struct FakeGitHub {
    pages: Mutex<VecDeque<Result<SearchPage, ApiError>>>,
    stars: HashMap<String, u64>,
    search_calls: Mutex<Vec<u32>>,
    star_calls: Mutex<Vec<String>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, total_count: Option<u64>, items: Vec<CodeItem>) -> Self {
        self.pages
            .lock()
            .unwrap()
            .push_back(Ok(SearchPage { total_count, items }));
        self
    }

    pub fn error(self, err: ApiError) -> Self {
        self.pages.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn stars(mut self, full_name: &str, stars: u64) -> Self {
        self.stars.insert(full_name.to_string(), stars);
        self
    }

    /// Page numbers requested, in order.
    pub fn search_calls(&self) -> Vec<u32> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn star_calls(&self) -> Vec<String> {
        self.star_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn search_code(
        &self,
        _query: &str,
        _per_page: u32,
        page: u32,
    ) -> Result<SearchPage, ApiError> {
        self.search_calls.lock().unwrap().push(page);
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SearchPage::default()))
    }

    async fn repository_stars(&self, full_name: &str) -> Result<Option<u64>, ApiError> {
        self.star_calls.lock().unwrap().push(full_name.to_string());
        match self.stars.get(full_name) {
            Some(stars) => Ok(Some(*stars)),
            None => Err(ApiError::Transport("connection refused".into())),
        }
    }
}

pub fn item(full_name: &str, name: &str) -> CodeItem {
    let owner = full_name.split('/').next().unwrap_or_default();
    CodeItem {
        name: Some(name.to_string()),
        path: Some(format!("Packages/{}", name)),
        html_url: Some(format!("https://github.com/{}/blob/main/Packages/{}", full_name, name)),
        score: Some(1.0),
        repository: Some(CodeRepository {
            full_name: Some(full_name.to_string()),
            html_url: Some(format!("https://github.com/{}", full_name)),
            default_branch: Some("main".to_string()),
            owner: Some(Owner {
                login: Some(owner.to_string()),
                html_url: Some(format!("https://github.com/{}", owner)),
            }),
        }),
    }
}

pub fn rate_limited() -> ApiError {
    ApiError::Status {
        status: 403,
        body: "You have exceeded a secondary rate limit. Please wait a few minutes before you try again.".into(),
    }
}
