use async_trait::async_trait;
use tracing::debug;

use super::models::SearchMessagesResponse;
use super::{SearchPage, SearchProvider};
use crate::config::Config;
use crate::error::ProviderError;

pub struct SlackClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl SlackClient {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_url: config.api_url.clone(),
            token: config.slack_token.clone(),
        })
    }
}

#[async_trait]
impl SearchProvider for SlackClient {
    async fn search_messages(
        &self,
        query: &str,
        page: u32,
        count: u32,
    ) -> Result<SearchPage, ProviderError> {
        let url = format!("{}/search.messages", self.api_url);
        let params = [
            ("query", query.to_string()),
            ("count", count.to_string()),
            ("page", page.to_string()),
        ];

        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .query(&params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: SearchMessagesResponse = resp.json().await?;
        if !data.ok {
            return Err(ProviderError::Api(
                data.error.unwrap_or_else(|| "unknown".to_string()),
            ));
        }

        let messages = data.messages.ok_or(ProviderError::MissingMessages)?;
        debug!(
            "Slack: page {}/{} returned {} matches",
            messages.paging.page,
            messages.paging.pages,
            messages.matches.len()
        );
        Ok(messages)
    }
}
