/// Keywords a JSON-LD 1.1 context definition may use as keys.
pub const CONTEXT_KEYWORDS: &[&str] = &[
    "@base",
    "@direction",
    "@import",
    "@language",
    "@propagate",
    "@protected",
    "@type",
    "@version",
    "@vocab",
];

pub fn is_context_keyword(key: &str) -> bool {
    CONTEXT_KEYWORDS.contains(&key)
}

/// Keys of the form `@` followed by ASCII letters are reserved for keywords.
pub fn looks_like_keyword(key: &str) -> bool {
    match key.strip_prefix('@') {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keywords() {
        assert!(is_context_keyword("@vocab"));
        assert!(is_context_keyword("@protected"));
        assert!(!is_context_keyword("@id"));
        assert!(!is_context_keyword("vocab"));
    }

    #[test]
    fn keyword_shape() {
        assert!(looks_like_keyword("@foo"));
        assert!(!looks_like_keyword("@"));
        assert!(!looks_like_keyword("@foo:bar"));
        assert!(!looks_like_keyword("name"));
    }
}
