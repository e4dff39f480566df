//! Postgres-backed store.
//!
//! ## Error mapping
//!
//! | SQLx error | Postgres code | StoreError |
//! |---|---|---|
//! | RowNotFound | — | `NotFound` |
//! | Database (foreign key violation) | `23503` | `ForeignKey` |
//! | Database (unique violation) | `23505` | `Duplicate` |
//! | anything else | — | `Database` |
//!
//! The schema (`users`, `chirps` with `chirps.user_id REFERENCES users(id)
//! ON DELETE CASCADE`) is managed outside this crate.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use super::{ChirpRecord, Store, StoreError, UserRecord};

const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";

/// Store over a shared `sqlx` connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`. Fails if the first connection
    /// cannot be established.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        Ok(Self::new(PgPool::connect(database_url).await?))
    }
}

#[async_trait]
impl Store for PgStore {
    #[instrument(skip(self), err)]
    async fn create_user(&self, email: &str) -> Result<UserRecord, StoreError> {
        let now = Utc::now();
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (id, created_at, updated_at, email)
            VALUES ($1, $2, $2, $3)
            RETURNING id, created_at, updated_at, email
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(now)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, Conflict::Email(email)))
    }

    #[instrument(skip(self, body), err)]
    async fn create_chirp(&self, body: &str, user_id: Uuid) -> Result<ChirpRecord, StoreError> {
        let now = Utc::now();
        sqlx::query_as::<_, ChirpRecord>(
            r#"
            INSERT INTO chirps (id, created_at, updated_at, body, user_id)
            VALUES ($1, $2, $2, $3, $4)
            RETURNING id, created_at, updated_at, body, user_id
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(now)
        .bind(body)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, Conflict::User(user_id)))
    }

    #[instrument(skip(self), err)]
    async fn get_chirp(&self, id: Uuid) -> Result<ChirpRecord, StoreError> {
        sqlx::query_as::<_, ChirpRecord>(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, Conflict::None))
    }

    #[instrument(skip(self), err)]
    async fn list_chirps(&self) -> Result<Vec<ChirpRecord>, StoreError> {
        sqlx::query_as::<_, ChirpRecord>(
            r#"
            SELECT id, created_at, updated_at, body, user_id
            FROM chirps
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, Conflict::None))
    }

    #[instrument(skip(self), err)]
    async fn delete_users(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, Conflict::None))?;
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn delete_chirps(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM chirps")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, Conflict::None))?;
        Ok(())
    }
}

/// What a constraint violation in this statement refers to.
enum Conflict<'a> {
    None,
    Email(&'a str),
    User(Uuid),
}

fn map_sqlx_error(err: sqlx::Error, conflict: Conflict<'_>) -> StoreError {
    if let sqlx::Error::RowNotFound = err {
        return StoreError::NotFound;
    }
    let code = match &err {
        sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
        _ => None,
    };
    match (code.as_deref(), conflict) {
        (Some(FOREIGN_KEY_VIOLATION), Conflict::User(id)) => StoreError::ForeignKey(id),
        (Some(UNIQUE_VIOLATION), Conflict::Email(email)) => StoreError::Duplicate(email.to_owned()),
        _ => StoreError::Database(err),
    }
}
