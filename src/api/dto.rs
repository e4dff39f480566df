//! Request bodies and response shapes, plus the record → response mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::{ChirpRecord, UserRecord};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
    pub user_id: Uuid,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        Self { id: r.id, created_at: r.created_at, updated_at: r.updated_at, email: r.email }
    }
}

impl From<ChirpRecord> for Chirp {
    fn from(r: ChirpRecord) -> Self {
        Self {
            id: r.id,
            created_at: r.created_at,
            updated_at: r.updated_at,
            body: r.body,
            user_id: r.user_id,
        }
    }
}
