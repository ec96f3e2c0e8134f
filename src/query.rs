/// Builds a code search query: the quoted term first, then each non-empty
/// qualifier in the order language, path, org, user, repo.
///
/// Quotes inside `term` are passed through untouched.
pub fn build_search_query(
    term: &str,
    language: Option<&str>,
    path_prefix: Option<&str>,
    org: Option<&str>,
    user: Option<&str>,
    repo: Option<&str>,
) -> String {
    let mut terms = vec![format!("\"{}\"", term)];
    let qualifiers = [
        ("language", language),
        ("path", path_prefix),
        ("org", org),
        ("user", user),
        ("repo", repo),
    ];
    for (qualifier, value) in qualifiers {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            terms.push(format!("{}:{}", qualifier, value));
        }
    }
    terms.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query() {
        let query = build_search_query(
            "com.unity.xr.interaction.toolkit",
            Some("JSON"),
            Some("Packages/"),
            None,
            None,
            None,
        );
        assert_eq!(
            query,
            "\"com.unity.xr.interaction.toolkit\" language:JSON path:Packages/"
        );
    }

    #[test]
    fn empty_qualifiers_are_omitted() {
        let query = build_search_query("needle", Some(""), None, Some(""), None, Some(""));
        assert_eq!(query, "\"needle\"");
    }

    #[test]
    fn qualifiers_keep_declared_order() {
        let query = build_search_query(
            "needle",
            Some("Rust"),
            Some("src/"),
            Some("rust-lang"),
            Some("octocat"),
            Some("rust-lang/rust"),
        );
        assert_eq!(
            query,
            "\"needle\" language:Rust path:src/ org:rust-lang user:octocat repo:rust-lang/rust"
        );
    }

    #[test]
    fn embedded_quotes_are_not_escaped() {
        let query = build_search_query("say \"hi\"", None, None, None, None, None);
        assert!(query.starts_with("\"say \"hi\"\""));
    }
}
