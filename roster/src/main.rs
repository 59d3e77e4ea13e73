use std::sync::Arc;

use anyhow::Context;
use roster::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config)?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let server = Server::new(config.clone());

    match config.database.as_ref() {
        #[cfg(feature = "database")]
        Some(database) => {
            let store = PgUserStore::connect(database).await?;
            if database.ensure_schema {
                store
                    .ensure_schema()
                    .await
                    .context("failed to create users table")?;
            }
            let service = UserService::new(store, clock).with_limits(config.pagination.clone());
            server.serve(roster::http::router(Arc::new(service))).await?;
        }
        #[cfg(not(feature = "database"))]
        Some(_) => {
            tracing::warn!("database configured but the `database` feature is disabled; using in-memory store");
            serve_in_memory(server, clock, &config).await?;
        }
        None => {
            tracing::info!("no database configured; using in-memory store");
            serve_in_memory(server, clock, &config).await?;
        }
    }

    Ok(())
}

async fn serve_in_memory(server: Server, clock: Arc<dyn Clock>, config: &Config) -> Result<()> {
    let service =
        UserService::new(InMemoryUserStore::new(), clock).with_limits(config.pagination.clone());
    server.serve(roster::http::router(Arc::new(service))).await
}
