pub mod condition;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod options;
pub mod search;
pub mod slack;

use std::io::Write;

use tracing::debug;

use crate::condition::SearchCondition;
use crate::config::Config;
use crate::options::{Cli, SearchOptions};
use crate::slack::SearchProvider;

/// Validates the flags, then hands them to `load_config`.
///
/// A bad `--from`/`--to` fails here before the environment is read.
pub fn startup<F>(cli: Cli, load_config: F) -> anyhow::Result<(SearchOptions, Config)>
where
    F: FnOnce(&SearchOptions) -> anyhow::Result<Config>,
{
    let options = SearchOptions::try_from(cli)?;
    let config = load_config(&options)?;
    Ok((options, config))
}

/// Searches with `provider` and writes the report to `out`.
///
/// Nothing is written unless the whole search succeeds.
pub async fn run<P, W>(
    provider: &P,
    config: &Config,
    options: &SearchOptions,
    out: &mut W,
) -> anyhow::Result<()>
where
    P: SearchProvider + ?Sized,
    W: Write,
{
    let condition = SearchCondition::from(options);
    debug!("searchCondition: {:?}", condition);

    let results = search::search(provider, &condition, &config.timezone()).await?;
    display::print_report(out, &condition, &results)?;
    out.flush()?;
    Ok(())
}
