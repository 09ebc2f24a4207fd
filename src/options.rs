/// How keys that look like keywords are treated inside a context definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeywordPolicy {
    /// Any key is accepted.
    #[default]
    Open,
    /// `@`-keys outside the JSON-LD keyword set are rejected.
    Closed,
}

/// Validator knobs.
#[derive(Debug, Clone, Default)]
pub struct ValidatorOptions {
    pub keyword_policy: KeywordPolicy,
    /// Treat the input as a JSON-LD document and check its top-level `@context`.
    pub unwrap_document: bool,
}

impl ValidatorOptions {
    pub fn with_keyword_policy(mut self, policy: KeywordPolicy) -> Self {
        self.keyword_policy = policy;
        self
    }

    pub fn with_unwrap_document(mut self, unwrap: bool) -> Self {
        self.unwrap_document = unwrap;
        self
    }
}
