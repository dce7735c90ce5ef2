use async_trait::async_trait;
use uuid::Uuid;

use super::ProfileStore;
use crate::errors::AppError;
use crate::models::profile::UserProfile;

/// Fixed set of profiles held in memory.
pub struct InMemoryProfileStore {
    profiles: Vec<UserProfile>,
}

impl InMemoryProfileStore {
    pub fn new(profiles: Vec<UserProfile>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, AppError> {
        Ok(self.profiles.iter().find(|p| p.id == id).cloned())
    }

    async fn find_connection_candidates(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<UserProfile>, AppError> {
        Ok(self
            .profiles
            .iter()
            .filter(|p| p.id != profile.id && !profile.connections.contains(&p.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::load_profile;
    use crate::test_support::profile_named;

    #[tokio::test]
    async fn test_load_profile_missing_is_not_found() {
        let store = InMemoryProfileStore::new(vec![profile_named("Alice")]);
        let err = load_profile(&store, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::ProfileNotFound));
    }

    #[tokio::test]
    async fn test_candidates_exclude_self_and_connections() {
        let mut alice = profile_named("Alice");
        let bob = profile_named("Bob");
        let carol = profile_named("Carol");
        alice.connections.push(bob.id);
        let store = InMemoryProfileStore::new(vec![alice.clone(), bob, carol.clone()]);

        let candidates = store.find_connection_candidates(&alice).await.unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, carol.id);
    }
}
