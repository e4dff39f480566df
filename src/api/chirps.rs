//! `/api/chirps` handlers.

use std::sync::Arc;

use tracing::error;
use uuid::Uuid;

use crate::api::dto::{Chirp, CreateChirpRequest};
use crate::api::errors::ApiError;
use crate::api::ApiConfig;
use crate::moderation::{clean_body, validate_chirp};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;
use crate::store::StoreError;

/// `POST /api/chirps`: validate, mask, store. Answers 201 with the chirp.
pub async fn create(cfg: Arc<ApiConfig>, req: Request) -> Result<Response, ApiError> {
    let params: CreateChirpRequest = req.json().map_err(|e| {
        error!("failed to decode request body: {e}");
        ApiError::Decode
    })?;

    validate_chirp(&params.body)?;
    let cleaned = clean_body(&params.body);

    let record = cfg.store
        .create_chirp(&cleaned, params.user_id)
        .await
        .map_err(|e| {
            error!(user_id = %params.user_id, "create_chirp failed: {e}");
            ApiError::Internal("Couldn't create chirp".to_owned())
        })?;

    Ok(Response::builder()
        .status(Status::Created)
        .json_value(&Chirp::from(record)))
}

/// `GET /api/chirps`: every chirp, oldest first.
///
/// An empty table answers 500, not `[]`. Existing clients rely on it.
pub async fn list(cfg: Arc<ApiConfig>, _req: Request) -> Result<Response, ApiError> {
    let records = cfg.store.list_chirps().await.map_err(|e| {
        error!("list_chirps failed: {e}");
        ApiError::Internal("Couldn't retrieve chirps".to_owned())
    })?;
    if records.is_empty() {
        error!("list_chirps returned no chirps");
        return Err(ApiError::Internal("Couldn't retrieve chirps".to_owned()));
    }

    let chirps: Vec<Chirp> = records.into_iter().map(Chirp::from).collect();
    Ok(Response::builder().json_value(&chirps))
}

/// `GET /api/chirps/{chirpID}`.
pub async fn get(cfg: Arc<ApiConfig>, req: Request) -> Result<Response, ApiError> {
    let id: Uuid = req.param("chirpID")
        .and_then(|raw| Uuid::try_parse(raw).ok())
        .ok_or(ApiError::BadId)?;

    match cfg.store.get_chirp(id).await {
        Ok(record) => Ok(Response::builder().json_value(&Chirp::from(record))),
        Err(StoreError::NotFound) => Err(ApiError::NotFound("Chirp not found")),
        Err(e) => {
            error!(chirp_id = %id, "get_chirp failed: {e}");
            Err(ApiError::Internal("Couldn't get chirp".to_owned()))
        }
    }
}
