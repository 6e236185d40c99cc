use clap::Parser;
use slack_search::config::Config;
use slack_search::logging;
use slack_search::options::Cli;
use slack_search::slack::SlackClient;
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (options, config) = slack_search::startup(cli, |options| {
        logging::init(options.debug);
        Config::from_env()
    })?;
    debug!("{:?}", config);

    let client = SlackClient::new(&config)?;

    let stdout = std::io::stdout();
    slack_search::run(&client, &config, &options, &mut stdout.lock()).await
}
