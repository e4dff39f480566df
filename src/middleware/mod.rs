//! Middleware layer.
//!
//! Middleware here is plain handler composition: a function takes a
//! [`Handler`](crate::Handler), does its own work, and calls the inner one.
//! Nothing is registered globally; a route opts in by being wrapped.
//!
//! - [`hits`]: counts requests to the static file routes
//! - `trace`: per-request log line with method, path, status and latency

pub mod hits;
pub(crate) mod trace;

pub use hits::{count_hits, HitCounter};
