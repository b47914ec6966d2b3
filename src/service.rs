//! Serving a [`Router`] with `hyper`.
//!
//! Handlers receive the request, whose path has already been normalized,
//! together with the parameters captured by the matched route. Routes are
//! matched against the percent-decoded path, so parameters hold decoded
//! values and an encoded `%2E%2E` segment is dropped like `..`:
//!
//! ```rust,no_run
//! use http_body_util::Full;
//! use hyper::body::{Bytes, Incoming};
//! use hyper::{Request, Response};
//! use pathmux::{BoxedHandler, Params, Router};
//!
//! async fn repo(_: Request<Incoming>, params: Params) -> Response<Full<Bytes>> {
//!     let user = params.get("user").unwrap_or_default();
//!     let repo = params.get("repo").unwrap_or_default();
//!     Response::new(Full::from(format!("{user}/{repo}")))
//! }
//!
//! let mut router: Router<BoxedHandler<Incoming>> = Router::new();
//! router.handle_func("/:user/:repo", repo).unwrap();
//!
//! let service = router.into_service();
//! // hand `service` to `hyper::server::conn::http1::Builder::serve_connection`
//! # drop(service);
//! ```

use crate::error::{InsertError, MatchError};
use crate::params::Params;
use crate::path::normalize;
use crate::router::Router;

use http::header::{self, HeaderValue};
use http::uri::{PathAndQuery, Uri};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};
use percent_encoding::percent_decode_str;

use std::convert::Infallible;
use std::future::{self, Future};
use std::pin::Pin;
use std::sync::Arc;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// A request handler.
///
/// Implemented for every `Fn(Request<B>, Params) -> impl Future<Output = Response<Full<Bytes>>>`
/// that can be shared between threads.
pub trait Handler<B>: Send + Sync + 'static {
    /// Handles a request that matched the route this handler is registered under.
    fn handle(&self, req: Request<B>, params: Params) -> BoxFuture<Response<Full<Bytes>>>;
}

impl<B, F, Fut> Handler<B> for F
where
    F: Fn(Request<B>, Params) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response<Full<Bytes>>> + Send + 'static,
{
    fn handle(&self, req: Request<B>, params: Params) -> BoxFuture<Response<Full<Bytes>>> {
        Box::pin(self(req, params))
    }
}

/// A type-erased [`Handler`].
pub type BoxedHandler<B> = Box<dyn Handler<B>>;

impl<B: Send + 'static> Router<BoxedHandler<B>> {
    /// Registers a handler function for the given pattern.
    ///
    /// See [`Router::insert`].
    pub fn handle_func<F, Fut>(
        &mut self,
        pattern: impl AsRef<str>,
        handler: F,
    ) -> Result<(), InsertError>
    where
        F: Fn(Request<B>, Params) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response<Full<Bytes>>> + Send + 'static,
    {
        self.insert(pattern, Box::new(handler))
    }

    /// Converts the router into a `hyper` service.
    pub fn into_service(self) -> RouterService<B> {
        RouterService(Arc::new(self))
    }
}

/// A `hyper` service dispatching requests through a [`Router`].
///
/// Requests that match no route, or whose path does not decode to UTF-8,
/// are answered with `404 Not Found`. The service never fails.
pub struct RouterService<B>(Arc<Router<BoxedHandler<B>>>);

impl<B> Clone for RouterService<B> {
    fn clone(&self) -> Self {
        RouterService(self.0.clone())
    }
}

impl<B> hyper::service::Service<Request<B>> for RouterService<B>
where
    B: Send + 'static,
{
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, mut req: Request<B>) -> Self::Future {
        let decoded = match percent_decode_str(req.uri().path()).decode_utf8() {
            Ok(decoded) => normalize(&decoded),
            Err(err) => {
                debug!("undecodable request path {}: {err}", req.uri().path());
                let res = error_response(&MatchError::NotFound);
                return Box::pin(future::ready(Ok::<_, Infallible>(res)));
            }
        };

        // the handler sees the normalized path, still encoded
        let path = normalize(req.uri().path());
        rewrite_path(&mut req, &path);

        match self.0.at(&decoded) {
            Ok(matched) => {
                let res = matched.value.handle(req, matched.params);
                Box::pin(async move { Ok::<_, Infallible>(res.await) })
            }
            Err(err) => {
                if err != MatchError::NotFound {
                    warn!("failed to route {decoded}: {err}");
                }
                Box::pin(future::ready(Ok::<_, Infallible>(error_response(&err))))
            }
        }
    }
}

// Replaces the path of the request URI, keeping its query.
fn rewrite_path<B>(req: &mut Request<B>, path: &str) {
    if req.uri().path() == path {
        return;
    }

    let path_and_query = match req.uri().query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_owned(),
    };

    let mut parts = req.uri().clone().into_parts();
    parts.path_and_query = match PathAndQuery::try_from(path_and_query) {
        Ok(path_and_query) => Some(path_and_query),
        Err(err) => {
            debug!("keeping request path {}: {err}", req.uri().path());
            return;
        }
    };

    match Uri::from_parts(parts) {
        Ok(uri) => *req.uri_mut() = uri,
        Err(err) => debug!("keeping request path {}: {err}", req.uri().path()),
    }
}

// Internal failures are reported without details.
fn error_response(err: &MatchError) -> Response<Full<Bytes>> {
    match err {
        MatchError::NotFound => plain_text(StatusCode::NOT_FOUND, "404 page not found\n"),
        _ => plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error\n"),
    }
}

fn plain_text(status: StatusCode, body: &'static str) -> Response<Full<Bytes>> {
    let mut res = Response::new(Full::from(body));
    *res.status_mut() = status;
    res.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    res.headers_mut().insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    res
}
