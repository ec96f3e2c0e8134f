use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Count GitHub code search hits for a literal string, and how many of them
/// live in repositories with more than a given number of stars.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// Literal string to search for (matched exactly)
    #[arg(long, default_value = "com.unity.xr.interaction.toolkit")]
    pub term: String,

    /// Restrict to files under this path prefix
    #[arg(long, default_value = "Packages/")]
    pub path_prefix: Option<String>,

    /// Restrict to this language
    #[arg(long, default_value = "JSON")]
    pub language: Option<String>,

    #[arg(long)]
    pub org: Option<String>,

    #[arg(long)]
    pub user: Option<String>,

    /// Restrict to one repository, as owner/name
    #[arg(long)]
    pub repo: Option<String>,

    #[arg(long, default_value_t = 100)]
    pub per_page: u32,

    #[arg(long, default_value_t = 10)]
    pub max_pages: u32,

    /// Keep results from repositories with strictly more stars than this
    #[arg(long, default_value_t = 5)]
    pub min_stars: u64,

    /// Where the filtered results are written
    #[arg(long, default_value = "results_filtered.json")]
    pub output: PathBuf,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, default_value = "https://api.github.com")]
    pub api_url: String,

    /// Seconds to wait before retrying a rate limited page
    #[arg(long, default_value_t = 60)]
    pub rate_limit_pause_secs: u64,

    /// Give up after this many consecutive rate limit errors on one page
    #[arg(long, default_value_t = 10)]
    pub max_rate_limit_retries: u32,
}

impl Config {
    pub fn rate_limit_pause(&self) -> Duration {
        Duration::from_secs(self.rate_limit_pause_secs)
    }
}
