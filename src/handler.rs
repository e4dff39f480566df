//! Handler trait, type erasure and composition.
//!
//! The router stores handlers of many concrete types in one table, so each
//! one is hidden behind `Arc<dyn ErasedHandler>`:
//!
//! ```text
//! move |req| chirps::create(cfg.clone(), req)   ← route closure, owns its state
//!        ↓ router.post("/api/chirps", …)
//! Arc::new(FnHandler(closure))                   ← BoxedHandler
//!        ↓ at request time
//! handler.call(req) → BoxFuture                  ← one vtable dispatch
//! ```
//!
//! Application state never lives in a global: a handler that needs the
//! [`ApiConfig`](crate::api::ApiConfig) captures an `Arc` to it when the
//! route table is built. Middleware works the same way, by wrapping an
//! existing handler in a new one (see [`crate::middleware`]).

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// A heap-allocated, type-erased future that resolves to a [`Response`].
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Handler` trait's `into_boxed_handler` method.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

/// Implemented for every valid route handler.
///
/// Satisfied automatically by any function or closure of the shape
///
/// ```text
/// Fn(Request) -> impl Future<Output = impl IntoResponse>
/// ```
///
/// Sealed: only the blanket impl below can satisfy it.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

/// Bridges a concrete handler `F` into the trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;
    use crate::status::Status;

    async fn teapot(_req: Request) -> Status {
        Status::Forbidden
    }

    #[tokio::test]
    async fn async_fn_becomes_a_handler() {
        let h = teapot.into_boxed_handler();
        let res = h.call(Request::new(Method::Get, "/")).await;
        assert_eq!(res.status_code(), 403);
    }

    #[tokio::test]
    async fn closure_can_capture_state() {
        let greeting = Arc::new(String::from("hello"));
        let h = (move |_req: Request| {
            let greeting = Arc::clone(&greeting);
            async move { greeting.to_string() }
        })
        .into_boxed_handler();
        let res = h.call(Request::new(Method::Get, "/")).await;
        assert_eq!(res.body(), b"hello");
    }
}
