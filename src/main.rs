#[macro_use]
extern crate serde_derive;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use std::io::Write;

pub mod config;
pub mod error;
pub mod filter;
pub mod github;
pub mod models;
pub mod query;
pub mod report;
pub mod search;
pub mod stars;
#[cfg(test)]
mod testing;

use config::Config;
use github::GitHubApi;
use search::SearchOptions;
use stars::StarLookup;

#[derive(Debug)]
struct Summary {
    unfiltered: u64,
    filtered: usize,
}

/// Search, filter by stars, print the two counts and save the kept results.
///
/// Only a failed search (or a failed write to `out`) is an error. The output
/// file is best effort.
async fn run<A: GitHubApi + ?Sized, W: Write>(
    api: &A,
    config: &Config,
    out: &mut W,
) -> Result<Summary> {
    let query = query::build_search_query(
        &config.term,
        config.language.as_deref(),
        config.path_prefix.as_deref(),
        config.org.as_deref(),
        config.user.as_deref(),
        config.repo.as_deref(),
    );
    info!("Query: {}", query);

    let results = search::search_code(api, &query, &SearchOptions::from(config)).await?;
    let unfiltered = results.unfiltered_count();

    let mut lookup = StarLookup::new(api);
    let kept = filter::filter_by_stars(results.items, &mut lookup, config.min_stars).await;

    report::print_counts(out, unfiltered, kept.len())?;

    let records = filter::normalize(&kept);
    if let Err(err) = report::save_records(&config.output, &records).await {
        warn!("Could not save results to {}: {:#}", config.output.display(), err);
    }

    Ok(Summary {
        unfiltered,
        filtered: kept.len(),
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    let octocrab = github::build_client(&config)?;

    let stdout = std::io::stdout();
    let summary = run(&octocrab, &config, &mut stdout.lock()).await?;
    info!(
        "{} results, {} from repositories with more than {} stars",
        summary.unfiltered, summary.filtered, config.min_stars
    );
    Ok(())
}
