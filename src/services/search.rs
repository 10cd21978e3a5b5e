//! Web search shortcut

/// Build the results URL for `query` from a `{query}` template
///
/// Returns `None` for a blank query.
pub fn build_search_url(query: &str, template: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(template.replace("{query}", &urlencoding::encode(query)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOGLE: &str = "https://www.google.com/search?q={query}";

    #[test]
    fn test_encodes_query() {
        assert_eq!(
            build_search_url("  rust async & await ", GOOGLE).as_deref(),
            Some("https://www.google.com/search?q=rust%20async%20%26%20await")
        );
    }

    #[test]
    fn test_blank_query() {
        assert!(build_search_url("", GOOGLE).is_none());
        assert!(build_search_url("   \t", GOOGLE).is_none());
    }

    #[test]
    fn test_custom_engine() {
        assert_eq!(
            build_search_url("café", "https://duckduckgo.com/?q={query}").as_deref(),
            Some("https://duckduckgo.com/?q=caf%C3%A9")
        );
    }
}
