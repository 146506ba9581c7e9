use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use clap::Parser;
use log::{debug, info, warn};

use category_fetcher::{
    CategoryFetcher, DEFAULT_CATEGORIES_ENDPOINT, FetchOutcome, FetcherConfig,
    HttpCategoryService, PrintingListener, StdResult,
};

/// Command line arguments for the category fetcher
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Category listing endpoint
    #[arg(short, long, env = "CATEGORY_ENDPOINT", default_value = DEFAULT_CATEGORIES_ENDPOINT)]
    endpoint: String,

    /// Transport timeout in seconds (no timeout when omitted)
    #[arg(short, long, env = "CATEGORY_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Deliver an empty category list instead of suppressing it
    #[arg(short, long, env = "CATEGORY_DELIVER_EMPTY_RESULTS")]
    deliver_empty_results: bool,
}

impl From<&Args> for FetcherConfig {
    fn from(args: &Args) -> Self {
        Self {
            endpoint: args.endpoint.to_owned(),
            timeout: args.timeout_secs.map(Duration::from_secs),
            deliver_empty_results: args.deliver_empty_results,
        }
    }
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    let config = FetcherConfig::from(&args);
    debug!("Configuration: {config:?}");
    info!("Fetching root categories from {}", config.endpoint);

    let fetcher = CategoryFetcher::new(Arc::new(HttpCategoryService::try_new(&config)?), &config);
    let outcome = fetcher
        .fetch_root_categories(Arc::new(PrintingListener::stdout()))
        .outcome()
        .await?;

    match outcome {
        FetchOutcome::Success(categories) => {
            info!("Fetched {} root categories", categories.len());
            Ok(())
        }
        FetchOutcome::Empty => {
            warn!("No category available");
            Ok(())
        }
        FetchOutcome::Failure(e) => Err(anyhow!(e)),
    }
}
