use log::debug;
use std::collections::HashMap;

use crate::github::GitHubApi;

/// Star counts looked up at most once per repository for the whole run.
/// A failed lookup is remembered as unknown (`None`) as well.
pub struct StarLookup<'a, A: ?Sized> {
    api: &'a A,
    known: HashMap<String, Option<u64>>,
}

impl<'a, A: GitHubApi + ?Sized> StarLookup<'a, A> {
    pub fn new(api: &'a A) -> Self {
        StarLookup {
            api,
            known: HashMap::new(),
        }
    }

    pub async fn stars(&mut self, full_name: &str) -> Option<u64> {
        if let Some(stars) = self.known.get(full_name) {
            return *stars;
        }
        let stars = match self.api.repository_stars(full_name).await {
            Ok(stars) => stars,
            Err(err) => {
                debug!("Star lookup for {} failed: {}", full_name, err);
                None
            }
        };
        self.known.insert(full_name.to_string(), stars);
        stars
    }
}
