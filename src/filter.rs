use crate::github::GitHubApi;
use crate::models::{CodeItem, FilteredRecord};
use crate::stars::StarLookup;

/// Keep the items whose repository has strictly more than `min_stars` stars,
/// in the order they were found. Unknown star counts never pass.
pub async fn filter_by_stars<A: GitHubApi + ?Sized>(
    items: Vec<CodeItem>,
    lookup: &mut StarLookup<'_, A>,
    min_stars: u64,
) -> Vec<CodeItem> {
    let mut kept = Vec::new();
    for item in items {
        let stars = match item.full_name() {
            Some(full_name) => lookup.stars(full_name).await,
            None => None,
        };
        if passes(stars, min_stars) {
            kept.push(item);
        }
    }
    kept
}

fn passes(stars: Option<u64>, min_stars: u64) -> bool {
    matches!(stars, Some(stars) if stars > min_stars)
}

pub fn normalize(items: &[CodeItem]) -> Vec<FilteredRecord> {
    items.iter().map(FilteredRecord::from).collect()
}
