/// One page of `/search/code`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    pub total_count: Option<u64>,
    #[serde(default)]
    pub items: Vec<CodeItem>,
}

/// A single file matching the query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeItem {
    pub name: Option<String>,
    pub path: Option<String>,
    pub html_url: Option<String>,
    pub score: Option<f64>,
    pub repository: Option<CodeRepository>,
}

impl CodeItem {
    /// "owner/repo" of the repository holding the file, if GitHub sent one.
    pub fn full_name(&self) -> Option<&str> {
        self.repository
            .as_ref()
            .and_then(|repo| repo.full_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeRepository {
    pub full_name: Option<String>,
    pub html_url: Option<String>,
    pub default_branch: Option<String>,
    pub owner: Option<Owner>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Owner {
    pub login: Option<String>,
    pub html_url: Option<String>,
}

/// Only the field we need out of `/repos/{owner}/{repo}`.
#[derive(Debug, Deserialize)]
pub struct RepoStars {
    pub stargazers_count: Option<u64>,
}

/// Flat record written to the output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredRecord {
    pub name: Option<String>,
    pub path: Option<String>,
    pub html_url: Option<String>,
    pub score: Option<f64>,
    pub repository_full_name: Option<String>,
    pub repository_html_url: Option<String>,
    pub owner_login: Option<String>,
    pub owner_html_url: Option<String>,
    pub repository_default_branch: Option<String>,
}

impl From<&CodeItem> for FilteredRecord {
    fn from(item: &CodeItem) -> Self {
        let repository = item.repository.as_ref();
        let owner = repository.and_then(|repo| repo.owner.as_ref());
        FilteredRecord {
            name: item.name.clone(),
            path: item.path.clone(),
            html_url: item.html_url.clone(),
            score: item.score,
            repository_full_name: repository.and_then(|repo| repo.full_name.clone()),
            repository_html_url: repository.and_then(|repo| repo.html_url.clone()),
            owner_login: owner.and_then(|owner| owner.login.clone()),
            owner_html_url: owner.and_then(|owner| owner.html_url.clone()),
            repository_default_branch: repository.and_then(|repo| repo.default_branch.clone()),
        }
    }
}
