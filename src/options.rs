use crate::error::{Result, SearchError};
use chrono::NaiveDate;
use clap::Parser;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser, Debug, Default)]
#[command(
    name = "slack-search",
    about = "Count and list Slack messages by word, reaction, author and date range",
    version
)]
pub struct Cli {
    /// Search word
    #[arg(long)]
    pub search_word: Option<String>,

    /// Emoji reaction, e.g. :ok_woman:
    #[arg(long)]
    pub reaction: Option<String>,

    /// Slack username of the author
    #[arg(long)]
    pub username: Option<String>,

    /// Only messages after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Only messages before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Print the query and search condition to stderr
    #[arg(long)]
    pub debug: bool,
}

/// Validated command-line options. Built once in `main` and passed down by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub search_word: Option<String>,
    pub reaction: Option<String>,
    pub username: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub debug: bool,
}

impl TryFrom<Cli> for SearchOptions {
    type Error = SearchError;

    fn try_from(cli: Cli) -> Result<Self> {
        Ok(SearchOptions {
            from: parse_date_flag("from", cli.from.as_deref())?,
            to: parse_date_flag("to", cli.to.as_deref())?,
            search_word: non_empty(cli.search_word),
            reaction: non_empty(cli.reaction),
            username: non_empty(cli.username),
            debug: cli.debug,
        })
    }
}

// Calendar dates carry no zone, so reading them in the configured zone and
// rendering them back is the identity.
fn parse_date_flag(flag: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Some)
            .map_err(|source| SearchError::OptionParse {
                flag,
                value: raw.to_string(),
                source,
            }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "slack-search",
            "--search-word",
            "tired",
            "--reaction",
            ":ok_woman:",
            "--username",
            "alice",
            "--from",
            "2021-06-01",
            "--to",
            "2021-06-30",
            "--debug",
        ])
        .unwrap();

        let opts = SearchOptions::try_from(cli).unwrap();
        assert_eq!(opts.search_word.as_deref(), Some("tired"));
        assert_eq!(opts.reaction.as_deref(), Some(":ok_woman:"));
        assert_eq!(opts.username.as_deref(), Some("alice"));
        assert_eq!(opts.from, NaiveDate::from_ymd_opt(2021, 6, 1));
        assert_eq!(opts.to, NaiveDate::from_ymd_opt(2021, 6, 30));
        assert!(opts.debug);
    }

    #[test]
    fn test_all_flags_optional() {
        let cli = Cli::try_parse_from(["slack-search"]).unwrap();
        let opts = SearchOptions::try_from(cli).unwrap();
        assert_eq!(opts, SearchOptions::default());
    }

    #[test]
    fn test_empty_values_are_unset() {
        let cli = Cli {
            search_word: Some(String::new()),
            from: Some(String::new()),
            ..Default::default()
        };
        let opts = SearchOptions::try_from(cli).unwrap();
        assert!(opts.search_word.is_none());
        assert!(opts.from.is_none());
    }

    #[test]
    fn test_bad_date_is_option_parse_error() {
        let cli = Cli {
            to: Some("2021/06/30".to_string()),
            ..Default::default()
        };
        match SearchOptions::try_from(cli) {
            Err(SearchError::OptionParse { flag, value, .. }) => {
                assert_eq!(flag, "to");
                assert_eq!(value, "2021/06/30");
            }
            other => panic!("expected OptionParse, got {:?}", other),
        }
    }
}
