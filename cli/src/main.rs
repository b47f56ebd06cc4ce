use clap::Parser;
use finder::{FinderError, find_top_videos, render_table};
use std::process::ExitCode;
use tracing::debug;
use youtube_api::HttpYouTubeApi;

mod cli;
mod config;

use cli::Cli;
use config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so the table on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (output, code) = report(run(&cli).await);
    println!("{}", output);
    ExitCode::from(code)
}

/// Text for stdout and the process exit status. Errors print their label and exit 1.
fn report(result: Result<String, FinderError>) -> (String, u8) {
    match result {
        Ok(table) => (table, 0),
        Err(err) => {
            debug!(error = ?err, "run failed");
            (err.to_string(), 1)
        }
    }
}

async fn run(cli: &Cli) -> Result<String, FinderError> {
    let config = Config::from_env()?;
    debug!(?config, "configuration loaded");

    let api = HttpYouTubeApi::new(config.api_key, config.base_url)?;
    let ranked = find_top_videos(&api, &cli.topic, &cli.search_options(), cli.min_duration).await?;

    Ok(render_table(&ranked, cli.top))
}
