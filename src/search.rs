use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use tracing::{debug, info};

use crate::condition::SearchCondition;
use crate::error::{Result, SearchError};
use crate::slack::{SearchMessage, SearchProvider};

/// Matches requested per `search.messages` call.
pub const SEARCH_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub channel: String,
    pub username: String,
    pub text: String,
    pub datetime: DateTime<FixedOffset>,
    pub permalink: String,
}

/// Runs the full search: build the query, fetch every page, normalize the matches.
pub async fn search<P>(
    provider: &P,
    condition: &SearchCondition,
    tz: &FixedOffset,
) -> Result<Vec<SearchResult>>
where
    P: SearchProvider + ?Sized,
{
    let query = condition.query();
    debug!("query: {}", query);

    let pages = fetch_all_pages(provider, &query, SEARCH_PAGE_SIZE).await?;
    let results = normalize(pages, tz)?;
    info!("Search for {:?} returned {} results", query, results.len());
    Ok(results)
}

/// Fetches page 1, then pages 2..=N one at a time in order.
///
/// The first failing call aborts the whole fetch; pages already received are dropped.
pub async fn fetch_all_pages<P>(
    provider: &P,
    query: &str,
    page_size: u32,
) -> Result<Vec<Vec<SearchMessage>>>
where
    P: SearchProvider + ?Sized,
{
    let first = provider.search_messages(query, 1, page_size).await?;
    let total_pages = first.paging.pages;
    debug!("Fetched page 1/{} ({} matches)", total_pages, first.matches.len());

    let mut pages = vec![first.matches];
    for page in 2..=total_pages {
        let next = provider.search_messages(query, page, page_size).await?;
        debug!("Fetched page {}/{} ({} matches)", page, total_pages, next.matches.len());
        pages.push(next.matches);
    }

    Ok(pages)
}

/// Flattens pages into results, keeping page order and in-page order.
pub fn normalize(pages: Vec<Vec<SearchMessage>>, tz: &FixedOffset) -> Result<Vec<SearchResult>> {
    let mut results = Vec::with_capacity(pages.iter().map(Vec::len).sum());

    for message in pages.into_iter().flatten() {
        let datetime = parse_slack_timestamp(&message.ts)?.with_timezone(tz);
        results.push(SearchResult {
            channel: message.channel.name,
            username: message.username,
            text: message.text,
            datetime,
            permalink: message.permalink,
        });
    }

    Ok(results)
}

/// Parses a Slack `ts` value (`"1625000000"` or `"1625000000.123456"`).
/// Only the whole seconds before the first `.` are kept.
pub fn parse_slack_timestamp(ts: &str) -> Result<DateTime<Utc>> {
    let seconds = ts.split('.').next().unwrap_or_default();
    let secs: i64 = seconds
        .parse()
        .map_err(|e: std::num::ParseIntError| SearchError::TimestampParse {
            timestamp: ts.to_string(),
            reason: e.to_string(),
        })?;

    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| SearchError::TimestampParse {
            timestamp: ts.to_string(),
            reason: "seconds out of range".to_string(),
        })
}
