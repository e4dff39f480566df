//! Persistence gateway for users and chirps.
//!
//! Handlers only see the [`Store`] trait. [`PgStore`] is the production
//! implementation; [`MemoryStore`] keeps everything in process and is used
//! when no database is configured and by the tests. Both enforce that a
//! chirp references an existing user.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// A stored user row.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

/// A stored chirp row.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct ChirpRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("user {0} does not exist")]
    ForeignKey(Uuid),

    #[error("email {0} is already registered")]
    Duplicate(String),

    #[error(transparent)]
    Database(sqlx::Error),
}

/// Typed CRUD over users and chirps.
///
/// Implementations do their own concurrency control; callers make one call
/// per logical step and never hold anything across calls.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_user(&self, email: &str) -> Result<UserRecord, StoreError>;

    async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<ChirpRecord, StoreError>;

    /// Fails with [`StoreError::NotFound`] when no chirp has this id.
    async fn get_chirp(&self, id: Uuid) -> Result<ChirpRecord, StoreError>;

    /// All chirps, oldest first.
    async fn list_chirps(&self) -> Result<Vec<ChirpRecord>, StoreError>;

    async fn delete_users(&self) -> Result<(), StoreError>;

    async fn delete_chirps(&self) -> Result<(), StoreError>;
}
