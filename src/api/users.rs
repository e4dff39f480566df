//! `/api/users` handlers.

use std::sync::Arc;

use tracing::error;

use crate::api::dto::{CreateUserRequest, User};
use crate::api::errors::ApiError;
use crate::api::ApiConfig;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// `POST /api/users`: answers 201 with the new user.
pub async fn create(cfg: Arc<ApiConfig>, req: Request) -> Result<Response, ApiError> {
    let params: CreateUserRequest = req.json().map_err(|e| {
        error!("failed to decode request body: {e}");
        ApiError::Decode
    })?;

    let record = cfg.store
        .create_user(&params.email)
        .await
        .map_err(|e| {
            error!("create_user failed: {e}");
            ApiError::Internal(format!("Couldn't create user: {e}"))
        })?;

    Ok(Response::builder()
        .status(Status::Created)
        .json_value(&User::from(record)))
}
