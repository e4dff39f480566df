//! # chirpy
//!
//! A small HTTP API for posting short texts ("chirps"), built on a thin
//! hyper-based router.
//!
//! ## What it serves
//!
//! | Route | Purpose |
//! |---|---|
//! | `GET /app/`, `GET /app/{*path}` | static files, counted by the hit counter |
//! | `GET /api/healthz` | liveness, always `OK` |
//! | `POST /api/users` | create a user from `{"email"}` |
//! | `POST /api/chirps` | create a chirp from `{"body", "user_id"}` |
//! | `GET /api/chirps`, `GET /api/chirps/{chirpID}` | read chirps |
//! | `GET /admin/metrics`, `POST /admin/reset` | hit count page, reset |
//!
//! Chirp bodies are capped at 140 bytes and banned words are masked with
//! `****` before they reach the store (see [`moderation`]).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chirpy::{api, config::Platform, store::MemoryStore, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), chirpy::Error> {
//!     let cfg = Arc::new(api::ApiConfig::new(Arc::new(MemoryStore::new()), Platform::Dev));
//!     let app = api::router(cfg, "./app");
//!     Server::bind("0.0.0.0:8080")?.serve(app).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod api;
pub mod config;
pub mod health;
pub mod middleware;
pub mod moderation;
pub mod static_files;
pub mod store;

pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::{serve_listener, Server};
pub use status::Status;
