//! Unified error type.

use thiserror::Error;

/// The error type returned by chirpy's fallible startup and serving operations.
///
/// Application-level errors (400, 404, etc.) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// serving failures: a malformed listen address, or binding and accepting
/// on the socket. Startup errors from configuration and the store keep
/// their own types ([`ConfigError`](crate::config::ConfigError),
/// [`sqlx::Error`]).
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid socket address `{0}`")]
    InvalidAddr(String),
}
