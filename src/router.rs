//! Radix-tree request router.
//!
//! One tree per HTTP method, O(path-length) lookup. A path that is registered
//! under some other method answers `405` with an `allow` header; a path that
//! is not registered at all answers `404`.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::trace;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup and hand it to [`Server::serve`](crate::Server::serve).
/// Every registration returns `self` so calls chain.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax and catch-alls `{*name}`;
    /// `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with an existing
    /// one. Routes are fixed at startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, path, handler)
    }

    /// Routes one request to its handler and returns the response.
    ///
    /// This is what the server calls per request; it is public so the whole
    /// route table can be exercised without a socket.
    pub async fn handle(&self, mut req: Request) -> Response {
        let method = req.method();
        let path = req.path().to_owned();

        let fut = async {
            match self.lookup(method, &path) {
                Some((handler, params)) => {
                    req.params = params;
                    handler.call(req).await
                }
                None => self.miss(&path),
            }
        };
        trace::traced(method, &path, fut).await
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Methods with a route matching `path`, sorted by wire name.
    fn allowed(&self, path: &str) -> Vec<Method> {
        let mut methods: Vec<Method> = self.routes.iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(m, _)| *m)
            .collect();
        methods.sort_by_key(|m| m.as_str());
        methods
    }

    fn miss(&self, path: &str) -> Response {
        let allowed = self.allowed(path);
        if allowed.is_empty() {
            return Response::status(Status::NotFound);
        }
        let allow = allowed.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
        Response::builder()
            .status(Status::MethodNotAllowed)
            .header("allow", &allow)
            .no_body()
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
