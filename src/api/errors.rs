//! Failure classes of the API and their HTTP rendering.
//!
//! Every failure answers `{"error": "<message>"}`.

use tracing::warn;

use crate::api::dto::ErrorBody;
use crate::moderation::ChirpError;
use crate::response::{IntoResponse, Response};
use crate::status::Status;

#[derive(Debug)]
pub enum ApiError {
    /// Body could not be decoded. Answered as 500, not 400.
    Decode,
    /// Chirp failed a content rule.
    Invalid(ChirpError),
    /// Path id is not a UUID.
    BadId,
    NotFound(&'static str),
    Forbidden(&'static str),
    /// A store call failed. The message is what the client sees.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            Self::Decode | Self::Internal(_) => Status::InternalServerError,
            Self::Invalid(_) | Self::BadId => Status::BadRequest,
            Self::NotFound(_) => Status::NotFound,
            Self::Forbidden(_) => Status::Forbidden,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Decode => "Couldn't decode parameters".to_owned(),
            Self::Invalid(e) => e.to_string(),
            Self::BadId => "Invalid chirp ID".to_owned(),
            Self::NotFound(m) | Self::Forbidden(m) => (*m).to_owned(),
            Self::Internal(m) => m.clone(),
        }
    }
}

impl From<ChirpError> for ApiError {
    fn from(e: ChirpError) -> Self {
        Self::Invalid(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        // 500s are logged by the handler, next to the failing call.
        if status == Status::Forbidden {
            warn!(error = %message, "request forbidden");
        }
        json_error(status, &message)
    }
}

pub fn json_error(status: Status, message: &str) -> Response {
    Response::builder()
        .status(status)
        .json_value(&ErrorBody { error: message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_class_to_its_status() {
        assert_eq!(ApiError::Decode.status(), Status::InternalServerError);
        assert_eq!(ApiError::from(ChirpError::TooLong).status(), Status::BadRequest);
        assert_eq!(ApiError::BadId.status(), Status::BadRequest);
        assert_eq!(ApiError::NotFound("x").status(), Status::NotFound);
        assert_eq!(ApiError::Forbidden("x").status(), Status::Forbidden);
        assert_eq!(ApiError::Internal("x".into()).status(), Status::InternalServerError);
    }

    #[test]
    fn renders_error_payload() {
        let res = ApiError::from(ChirpError::TooLong).into_response();
        assert_eq!(res.status_code(), 400);
        assert_eq!(res.body(), br#"{"error":"Chirp is too long"}"#);
    }

    #[test]
    fn internal_error_keeps_handler_message() {
        let res = ApiError::Internal("Couldn't get chirp".into()).into_response();
        assert_eq!(res.status_code(), 500);
        assert_eq!(res.body(), br#"{"error":"Couldn't get chirp"}"#);
    }
}
