use async_trait::async_trait;

use crate::error::ProviderError;

pub mod client;
pub mod models;

pub use client::SlackClient;
pub use models::{MessageChannel, Paging, SearchMessage, SearchMessages};

/// One page of `search.messages` results.
pub type SearchPage = SearchMessages;

/// Message search backend. `SlackClient` talks to the real API.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Fetches one page (1-based) of matches for `query`, `count` matches per page.
    async fn search_messages(
        &self,
        query: &str,
        page: u32,
        count: u32,
    ) -> Result<SearchPage, ProviderError>;
}
