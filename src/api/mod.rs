//! The Chirpy HTTP API: application state and the route table.
//!
//! - `chirps.rs`, `users.rs`, `admin.rs`: handlers, one file per area
//! - `dto.rs`: request/response shapes and record mapping
//! - `errors.rs`: failure classes and the `{"error": ...}` payload

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Platform;
use crate::handler::Handler;
use crate::health;
use crate::middleware::{count_hits, HitCounter};
use crate::request::Request;
use crate::response::IntoResponse;
use crate::router::Router;
use crate::static_files::StaticDir;
use crate::store::Store;

pub mod admin;
pub mod chirps;
pub mod dto;
pub mod errors;
pub mod users;

/// State shared by every handler, built once in `main`.
pub struct ApiConfig {
    pub hits: Arc<HitCounter>,
    pub store: Arc<dyn Store>,
    pub platform: Platform,
}

impl ApiConfig {
    pub fn new(store: Arc<dyn Store>, platform: Platform) -> Self {
        Self { hits: Arc::new(HitCounter::new()), store, platform }
    }
}

/// Builds the full route table. Only the `/app/` routes are hit-counted.
pub fn router(cfg: Arc<ApiConfig>, filepath_root: impl Into<PathBuf>) -> Router {
    let files = Arc::new(StaticDir::new(filepath_root));
    let serve_files = move |req: Request| {
        let files = Arc::clone(&files);
        async move { files.serve(req.param("path").unwrap_or("")).await }
    };

    Router::new()
        .get("/app/", count_hits(Arc::clone(&cfg.hits), serve_files.clone()))
        .get("/app/{*path}", count_hits(Arc::clone(&cfg.hits), serve_files))
        .get("/api/healthz", health::healthz)
        .get("/admin/metrics", with(&cfg, admin::metrics))
        .post("/admin/reset", with(&cfg, admin::reset))
        .post("/api/users", with(&cfg, users::create))
        .post("/api/chirps", with(&cfg, chirps::create))
        .get("/api/chirps", with(&cfg, chirps::list))
        .get("/api/chirps/{chirpID}", with(&cfg, chirps::get))
}

/// Turns a `(state, request)` handler into a route handler that owns its state.
fn with<F, Fut, R>(cfg: &Arc<ApiConfig>, f: F) -> impl Handler
where
    F: Fn(Arc<ApiConfig>, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    let cfg = Arc::clone(cfg);
    move |req: Request| f(Arc::clone(&cfg), req)
}
