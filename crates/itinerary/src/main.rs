//! itinerary CLI entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itinerary::cache::MemoryCache;
use itinerary::cli::{execute, Cli};
use itinerary::config::Config;
use itinerary::storage::HolidayStore;
use itinerary_core::cache::Cache;
use itinerary_core::storage::RemoteConnector;

#[cfg(feature = "dynamodb")]
fn connector(config: &Config) -> itinerary::storage::DynamoDbConnector {
    itinerary::storage::DynamoDbConnector::from_config(config)
}

#[cfg(not(feature = "dynamodb"))]
fn connector(_config: &Config) -> itinerary::storage::InMemoryConnector {
    tracing::debug!("Built without a remote backend");
    itinerary::storage::InMemoryConnector::unconfigured()
}

async fn run<C, K>(cli: Cli, store: HolidayStore<C, K>) -> anyhow::Result<()>
where
    C: RemoteConnector,
    K: Cache + 'static,
{
    let today = chrono::Local::now().date_naive();
    let mut stdout = std::io::stdout().lock();
    execute(cli.command, &store, cli.format, cli.quiet, today, &mut stdout).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itinerary=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    cli.apply_to(&mut config);

    let connector = connector(&config);
    let policy = config.write_fallback;

    if cli.ephemeral {
        tracing::info!("Using in-memory cache");
        let store = HolidayStore::new(connector, Arc::new(MemoryCache::new()), policy);
        return run(cli, store).await;
    }

    #[cfg(feature = "sqlite")]
    {
        let cache = itinerary::cache::SqliteCache::new(&config.cache_path).await?;
        tracing::debug!(path = %config.cache_path, "Opened SQLite cache");
        let store = HolidayStore::new(connector, Arc::new(cache), policy);
        run(cli, store).await
    }

    #[cfg(not(feature = "sqlite"))]
    {
        tracing::warn!("Built without SQLite, cache will not persist");
        let store = HolidayStore::new(connector, Arc::new(MemoryCache::new()), policy);
        run(cli, store).await
    }
}
