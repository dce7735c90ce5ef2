use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

/// Opens the pool backing the profile store and checks that the `users` table is reachable.
/// The table is owned by the profile service; this service never migrates it.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to profile store...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("connecting to the profile database")?;

    let (users_table,): (Option<String>,) =
        sqlx::query_as("SELECT to_regclass('public.users')::text")
            .fetch_one(&pool)
            .await
            .context("probing the users table")?;
    if users_table.is_none() {
        warn!("Profile store has no `users` table; every request will return 404");
    }

    info!("Profile store connection pool established");
    Ok(pool)
}
