//! HTTP status codes as a typed enum.
//!
//! Use [`Status`] anywhere a status code is accepted — `Response::status()`,
//! `Response::builder().status()`, or as a bare handler return value.
//!
//! ```rust
//! use chirpy::{Response, Status};
//!
//! // status-only, no body
//! Response::status(Status::NoContent);
//!
//! Response::builder()
//!     .status(Status::Created)
//!     .json(br#"{"id":"42"}"#.to_vec());
//! ```
//!
//! Only the codes the API can actually produce are listed.

/// The HTTP status codes chirpy answers with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                   // 200
    Created,              // 201
    NoContent,            // 204

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,           // 400
    Forbidden,            // 403
    NotFound,             // 404
    MethodNotAllowed,     // 405

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError,  // 500
}

impl Status {
    /// The numeric code, e.g. `404`.
    pub fn code(self) -> u16 {
        match self {
            Self::Ok                  => 200,
            Self::Created             => 201,
            Self::NoContent           => 204,
            Self::BadRequest          => 400,
            Self::Forbidden           => 403,
            Self::NotFound            => 404,
            Self::MethodNotAllowed    => 405,
            Self::InternalServerError => 500,
        }
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 { s.code() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_to_numeric_codes() {
        assert_eq!(u16::from(Status::Created), 201);
        assert_eq!(Status::Forbidden.code(), 403);
        assert_eq!(Status::MethodNotAllowed.code(), 405);
        assert_eq!(Status::InternalServerError.code(), 500);
    }
}
