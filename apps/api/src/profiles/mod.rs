//! Profile Loader: read-only access to stored user profiles.
//!
//! Handlers reach the store through `Arc<dyn ProfileStore>` in `AppState`.
//! `PgProfileStore` is the production backend; tests use `InMemoryProfileStore`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{UserProfile, UserRow};

#[cfg(test)]
pub mod memory;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, AppError>;

    /// Every user other than `profile` itself and the users it is already connected to.
    async fn find_connection_candidates(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<UserProfile>, AppError>;
}

/// Loads the caller's profile, mapping absence to `ProfileNotFound`.
pub async fn load_profile(store: &dyn ProfileStore, id: Uuid) -> Result<UserProfile, AppError> {
    store.find_by_id(id).await?.ok_or(AppError::ProfileNotFound)
}

const USER_COLUMNS: &str =
    "id, name, bio, skills, interests, experience, education, connections";

pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, AppError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(UserProfile::from))
    }

    async fn find_connection_candidates(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<UserProfile>, AppError> {
        let rows: Vec<UserRow> = sqlx::query_as(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id <> $1 AND NOT (id = ANY($2)) ORDER BY name"
        ))
        .bind(profile.id)
        .bind(profile.connections.as_slice())
        .fetch_all(&self.pool)
        .await?;

        debug!(
            "Found {} connection candidates for user {}",
            rows.len(),
            profile.id
        );
        Ok(rows.into_iter().map(UserProfile::from).collect())
    }
}
