use anyhow::{Context, Result};
use clap::Parser;

use sensu_ilert_handler::config::{
    HandlerConfig, DEFAULT_DEDUP_KEY_TEMPLATE, DEFAULT_SUMMARY_TEMPLATE,
};
use sensu_ilert_handler::event::Event;
use sensu_ilert_handler::ilert::{IlertClient, RetryPolicy};
use sensu_ilert_handler::submit::SubmissionOutcome;

#[derive(Parser)]
#[command(
    name = "sensu-ilert-handler",
    about = "The Sensu Go handler for iLert incident management",
    version,
    long_about = None
)]
struct Cli {
    /// iLert API authentication token
    #[arg(
        short = 't',
        long,
        env = "ILERT_SENSU_TOKEN",
        default_value = "",
        hide_env_values = true
    )]
    token: String,

    /// iLert deduplication key template
    #[arg(
        short = 'k',
        long,
        env = "ILERT_DEDUP_KEY_TEMPLATE",
        default_value = DEFAULT_DEDUP_KEY_TEMPLATE
    )]
    dedup_key_template: String,

    /// Template for the alert summary
    #[arg(
        short = 'S',
        long,
        env = "ILERT_SUMMARY_TEMPLATE",
        default_value = DEFAULT_SUMMARY_TEMPLATE
    )]
    summary_template: String,

    /// Template for the alert details (default: fixed incident description)
    #[arg(short = 'd', long, env = "ILERT_DETAILS_TEMPLATE", default_value = "")]
    details_template: String,

    /// Severity map JSON, e.g. {"critical": [2], "warning": [1]}
    #[arg(long, env = "ILERT_STATUS_MAP", default_value = "")]
    status_map: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Sensu pipes the event into the handler's stdin as JSON.
    let event =
        Event::from_reader(std::io::stdin().lock()).context("failed to parse event from stdin")?;

    let config = HandlerConfig {
        auth_token: cli.token,
        dedup_key_template: cli.dedup_key_template,
        summary_template: cli.summary_template,
        details_template: cli.details_template,
        status_map_json: cli.status_map,
    };

    let client = IlertClient::new(RetryPolicy::default())
        .context("failed to build iLert API client")?;

    let outcome = sensu_ilert_handler::process_event(&config, event, &client).await?;

    match outcome {
        SubmissionOutcome::Success { .. } => Ok(()),
        SubmissionOutcome::Warning(message) => {
            tracing::warn!(%message, "event resolved nothing");
            Ok(())
        }
        SubmissionOutcome::Fatal(message) => anyhow::bail!(message),
    }
}
