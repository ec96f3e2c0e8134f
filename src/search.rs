use indicatif::ProgressBar;
use log::{info, warn};
use std::time::Duration;

use crate::config::Config;
use crate::error::SearchError;
use crate::github::GitHubApi;
use crate::models::CodeItem;

pub struct SearchOptions {
    pub per_page: u32,
    pub max_pages: u32,
    pub rate_limit_pause: Duration,
    pub max_rate_limit_retries: u32,
}

impl From<&Config> for SearchOptions {
    fn from(config: &Config) -> Self {
        SearchOptions {
            per_page: config.per_page,
            max_pages: config.max_pages,
            rate_limit_pause: config.rate_limit_pause(),
            max_rate_limit_retries: config.max_rate_limit_retries,
        }
    }
}

#[derive(Debug, Default)]
pub struct SearchResults {
    pub items: Vec<CodeItem>,
    /// What GitHub reported on the first page; may exceed `items.len()`.
    pub total_count: Option<u64>,
}

impl SearchResults {
    pub fn unfiltered_count(&self) -> u64 {
        self.total_count.unwrap_or(self.items.len() as u64)
    }
}

/// Walk the result pages of `query` until a short page or `max_pages`.
///
/// A rate limited page is retried after a fixed pause, at most
/// `max_rate_limit_retries` times in a row. Any other error aborts the search.
pub async fn search_code<A: GitHubApi + ?Sized>(
    api: &A,
    query: &str,
    options: &SearchOptions,
) -> Result<SearchResults, SearchError> {
    let mut results = SearchResults::default();
    let mut page = 1u32;
    let mut retries = 0u32;
    let pb = ProgressBar::new(options.max_pages as u64);

    while page <= options.max_pages {
        let batch = match api.search_code(query, options.per_page, page).await {
            Ok(batch) => batch,
            Err(err) if err.is_rate_limited() => {
                if retries >= options.max_rate_limit_retries {
                    pb.abandon();
                    return Err(SearchError::RetriesExhausted { page, retries });
                }
                retries += 1;
                warn!(
                    "Rate limited on page {} ({}); retry {} in {:?}",
                    page, err, retries, options.rate_limit_pause
                );
                tokio::time::sleep(options.rate_limit_pause).await;
                continue;
            }
            Err(err) => {
                pb.abandon();
                return Err(err.into());
            }
        };
        retries = 0;

        if page == 1 {
            results.total_count = batch.total_count;
        }
        let fetched = batch.items.len();
        info!("Page {}: {} items", page, fetched);
        results.items.extend(batch.items);
        pb.inc(1);

        if fetched < options.per_page as usize {
            break;
        }
        page += 1;
    }
    pb.finish_and_clear();
    Ok(results)
}
