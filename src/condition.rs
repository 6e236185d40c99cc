use crate::options::{SearchOptions, DATE_FORMAT};

/// Filter values that feed the Slack query. Empty strings mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCondition {
    pub search_word: String,
    pub reaction: String,
    pub username: String,
    pub from: String,
    pub to: String,
}

impl SearchCondition {
    /// Builds the Slack query string.
    ///
    /// Clauses are emitted in a fixed order (word, `has:`, `from:`, `after:`, `before:`),
    /// joined by single spaces, skipping unset fields. Values are passed through
    /// verbatim; Slack's own query parser deals with anything unusual.
    pub fn query(&self) -> String {
        let clauses = [
            (self.search_word.as_str(), ""),
            (self.reaction.as_str(), "has:"),
            (self.username.as_str(), "from:"),
            (self.from.as_str(), "after:"),
            (self.to.as_str(), "before:"),
        ];

        clauses
            .iter()
            .filter(|(value, _)| !value.is_empty())
            .map(|(value, prefix)| format!("{}{}", prefix, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn has_search_word(&self) -> bool {
        !self.search_word.is_empty()
    }

    pub fn has_reaction(&self) -> bool {
        !self.reaction.is_empty()
    }

    pub fn with_search_word(mut self, word: impl Into<String>) -> Self {
        self.search_word = word.into();
        self
    }

    pub fn with_reaction(mut self, reaction: impl Into<String>) -> Self {
        self.reaction = reaction.into();
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }
}

impl From<&SearchOptions> for SearchCondition {
    fn from(opts: &SearchOptions) -> Self {
        SearchCondition {
            search_word: opts.search_word.clone().unwrap_or_default(),
            reaction: opts.reaction.clone().unwrap_or_default(),
            username: opts.username.clone().unwrap_or_default(),
            from: opts
                .from
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            to: opts
                .to
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}
