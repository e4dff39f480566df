//! Health check handler.
//!
//! ```rust,no_run
//! use chirpy::{Router, health};
//!
//! let app = Router::new().get("/api/healthz", health::healthz);
//! ```

use crate::{Request, Response};

/// Always `200 OK` with body `"OK"`. No dependencies: if the process can
/// answer HTTP at all, it is healthy.
pub async fn healthz(_req: Request) -> Response {
    Response::text("OK")
}
