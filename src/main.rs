mod args;
mod config;
mod directory;
mod error;
mod models;
mod redirect;
mod utils;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::anyhow;
use args::Args;
use clap::Parser;
use config::Config;
use directory::HttpDirectoryClient;
use redirect::{BrowserNavigator, NavigationOutcome, Navigator, RedirectView, StdoutNavigator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let config = Config::load(&args)?;

    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| anyhow!("failed to build HTTP client: {}", e))?;
    let directory = Arc::new(HttpDirectoryClient::new(http_client, &config.api_base_url));
    let navigator: Arc<dyn Navigator> = if config.open_browser {
        Arc::new(BrowserNavigator)
    } else {
        Arc::new(StdoutNavigator)
    };

    info!(
        endpoint = directory.endpoint(),
        open_browser = config.open_browser,
        "looking up an available group"
    );

    let mut view = RedirectView::new(directory, navigator);
    println!("{}\n", view.state());

    let state = view.mount().await;
    println!("{}\n", state);
    if state.is_error() {
        return Ok(ExitCode::FAILURE);
    }

    if let Some(NavigationOutcome::Failed(reason)) =
        view.wait_or_interrupt(tokio::signal::ctrl_c()).await
    {
        warn!(reason = %reason, "automatic navigation failed, use the link above");
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
