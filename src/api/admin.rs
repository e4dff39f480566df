//! `/admin` handlers: hit metrics and reset.

use std::sync::Arc;

use tracing::{error, info};

use crate::api::errors::ApiError;
use crate::api::ApiConfig;
use crate::request::Request;
use crate::response::{ContentType, Response};

/// `GET /admin/metrics`: the static hit count as a small HTML page.
pub async fn metrics(cfg: Arc<ApiConfig>, _req: Request) -> Response {
    Response::builder().bytes(ContentType::Html, metrics_page(cfg.hits.load()).into_bytes())
}

fn metrics_page(hits: u32) -> String {
    format!(
        "<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {hits} times!</p>
  </body>
</html>
"
    )
}

/// `POST /admin/reset`.
///
/// The counter is zeroed before the platform check, so a forbidden reset still
/// clears it. In dev mode all chirps and then all users are deleted; a failure
/// on the second step leaves the first one done.
pub async fn reset(cfg: Arc<ApiConfig>, _req: Request) -> Result<Response, ApiError> {
    cfg.hits.reset();

    if !cfg.platform.is_dev() {
        return Err(ApiError::Forbidden("Reset is only allowed in dev environment."));
    }

    cfg.store.delete_chirps().await.map_err(|e| {
        error!("delete_chirps failed: {e}");
        ApiError::Internal("Couldn't delete chirps".to_owned())
    })?;
    cfg.store.delete_users().await.map_err(|e| {
        error!("delete_users failed: {e}");
        ApiError::Internal("Couldn't delete users".to_owned())
    })?;

    info!("hit counter and store reset");
    Ok(Response::text("Hits reset to 0 and database reset to initial state."))
}
