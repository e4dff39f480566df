//! Static file hit counter.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::handler::Handler;
use crate::request::Request;

/// Process-wide request counter for the static file routes.
///
/// Every operation is a single atomic primitive, so concurrent requests never
/// lose an increment. Wraps on overflow. Not persisted.
#[derive(Debug, Default)]
pub struct HitCounter(AtomicU32);

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn load(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Relaxed);
    }
}

/// Wraps `next` so every call bumps `hits` once before `next` runs.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use chirpy::middleware::{count_hits, HitCounter};
/// use chirpy::{Request, Router};
///
/// async fn page(_req: Request) -> &'static str { "<h1>hi</h1>" }
///
/// let hits = Arc::new(HitCounter::new());
/// let app = Router::new().get("/app/", count_hits(Arc::clone(&hits), page));
/// ```
pub fn count_hits(hits: Arc<HitCounter>, next: impl Handler) -> impl Handler {
    let next = next.into_boxed_handler();
    move |req: Request| {
        hits.increment();
        next.call(req)
    }
}
