//! In-process store.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{ChirpRecord, Store, StoreError, UserRecord};

#[derive(Default)]
struct Tables {
    users: Vec<UserRecord>,
    chirps: Vec<ChirpRecord>,
}

/// Users and chirps held in memory, lost on restart.
///
/// The lock is never held across an `.await`.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, email: &str) -> Result<UserRecord, StoreError> {
        let mut t = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        if t.users.iter().any(|u| u.email == email) {
            return Err(StoreError::Duplicate(email.to_owned()));
        }
        let now = Utc::now();
        let user = UserRecord {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            email: email.to_owned(),
        };
        t.users.push(user.clone());
        Ok(user)
    }

    async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<ChirpRecord, StoreError> {
        let mut t = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        if !t.users.iter().any(|u| u.id == user_id) {
            return Err(StoreError::ForeignKey(user_id));
        }
        let now = Utc::now();
        let chirp = ChirpRecord {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            body: body.to_owned(),
            user_id,
        };
        t.chirps.push(chirp.clone());
        Ok(chirp)
    }

    async fn get_chirp(&self, id: Uuid) -> Result<ChirpRecord, StoreError> {
        let t = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        t.chirps.iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list_chirps(&self) -> Result<Vec<ChirpRecord>, StoreError> {
        let t = self.tables.read().unwrap_or_else(PoisonError::into_inner);
        Ok(t.chirps.clone())
    }

    async fn delete_users(&self) -> Result<(), StoreError> {
        let mut t = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        t.users.clear();
        // Mirrors ON DELETE CASCADE on chirps.user_id.
        t.chirps.clear();
        Ok(())
    }

    async fn delete_chirps(&self) -> Result<(), StoreError> {
        let mut t = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        t.chirps.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_and_fetches_chirps_in_order() {
        let store = MemoryStore::new();
        let user = store.create_user("walt@breakingbad.com").await.unwrap();
        let first = store.create_chirp("first", user.id).await.unwrap();
        let second = store.create_chirp("second", user.id).await.unwrap();

        assert_eq!(store.get_chirp(second.id).await.unwrap(), second);
        let all = store.list_chirps().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn chirp_needs_existing_user() {
        let store = MemoryStore::new();
        let ghost = Uuid::now_v7();
        let err = store.create_chirp("boo", ghost).await.unwrap_err();
        assert!(matches!(err, StoreError::ForeignKey(id) if id == ghost));
    }

    #[tokio::test]
    async fn missing_chirp_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get_chirp(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryStore::new();
        store.create_user("a@b.c").await.unwrap();
        assert!(matches!(
            store.create_user("a@b.c").await,
            Err(StoreError::Duplicate(_))
        ));
    }

    #[tokio::test]
    async fn deletes_empty_tables() {
        let store = MemoryStore::new();
        let user = store.create_user("a@b.c").await.unwrap();
        store.create_chirp("hi", user.id).await.unwrap();

        store.delete_chirps().await.unwrap();
        assert!(store.list_chirps().await.unwrap().is_empty());
        store.delete_users().await.unwrap();
        assert!(store.create_chirp("hi", user.id).await.is_err());
    }
}
