use thiserror::Error;

/// Failures talking to the search provider. Any of these aborts the whole search.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to send HTTP request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Slack API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Slack API error: {0}")]
    Api(String),

    #[error("Slack API response did not contain a messages block")]
    MissingMessages,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Invalid message timestamp {timestamp:?}: {reason}")]
    TimestampParse { timestamp: String, reason: String },

    #[error("Invalid --{flag} date {value:?} (expected YYYY-MM-DD): {source}")]
    OptionParse {
        flag: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T, E = SearchError> = std::result::Result<T, E>;
