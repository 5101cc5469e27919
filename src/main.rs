//! Pokedex - Browse PokeAPI location areas from the terminal
//!
//! Every response is memoized in a time-bounded cache so paging back and
//! forth does not hit the network twice within the cache interval.

use anyhow::Context;
use tokio::io::{stdin, stdout, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokecache::pokeapi::PokeApiClient;
use pokecache::repl::{self, Session};
use pokecache::Config;

/// Main entry point for the Pokedex.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (to stderr)
/// 2. Load configuration from environment variables
/// 3. Build the PokeAPI client
/// 4. Create the session and its caches, starting their reapers
/// 5. Run the REPL on stdin/stdout until `exit` or end of input
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokecache=info,pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}s, api_base_url={}, http_timeout={}s",
        config.cache_interval, config.api_base_url, config.http_timeout
    );

    let client = PokeApiClient::from_config(&config).context("failed to build HTTP client")?;
    let mut session =
        Session::new(client, config.cache_interval()).context("failed to create cache")?;

    repl::run(&mut session, BufReader::new(stdin()), stdout()).await?;

    info!("Pokedex shutdown complete");
    Ok(())
}
