use chrono::{FixedOffset, Offset, Utc};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "https://slack.com/api";
/// Asia/Tokyo, which has no DST.
pub const DEFAULT_TZ_OFFSET_HOURS: i32 = 9;

#[derive(Clone)]
pub struct Config {
    pub slack_token: String,
    pub api_url: String,
    pub tz_offset_hours: i32,
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::build()
    }

    fn build() -> anyhow::Result<Self> {
        let slack_token = env::var("SLACK_TOKEN").unwrap_or_else(|_| {
            warn!("SLACK_TOKEN is not set; requests will be sent without a usable token");
            String::new()
        });

        let tz_offset_hours = match env::var("SEARCH_TZ_OFFSET_HOURS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("SEARCH_TZ_OFFSET_HOURS must be an integer"))?,
            Err(_) => DEFAULT_TZ_OFFSET_HOURS,
        };
        anyhow::ensure!(
            (-23..=23).contains(&tz_offset_hours),
            "SEARCH_TZ_OFFSET_HOURS must be between -23 and 23, got {}",
            tz_offset_hours
        );

        Ok(Config {
            slack_token,
            api_url: env::var("SLACK_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            tz_offset_hours,
            request_timeout_secs: timeout_from_env(),
        })
    }

    /// Zone used both for rendering result times and for reading `--from`/`--to`.
    pub fn timezone(&self) -> FixedOffset {
        FixedOffset::east_opt(self.tz_offset_hours * 3600).unwrap_or_else(|| Utc.fix())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// `SLACK_TIMEOUT_SECS`; unset, `0` or malformed means no timeout.
fn timeout_from_env() -> Option<u64> {
    let raw = env::var("SLACK_TIMEOUT_SECS").ok()?;
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(secs) => Some(secs),
        Err(_) => {
            warn!(
                "SLACK_TIMEOUT_SECS must be a whole number of seconds, got {:?}; requests will not time out",
                raw
            );
            None
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("slack_token", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("tz_offset_hours", &self.tz_offset_hours)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
