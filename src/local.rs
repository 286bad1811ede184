//! Utilities for testing endpoints.
//!
//! The helpers here block the calling thread while forcing a deferred
//! task. They exist so endpoints can be exercised from plain unit
//! tests without standing up a serving layer, and must never be used
//! on a production path.
//!
//! # Example
//!
//! ```
//! use waypoint::endpoint::EndpointExt;
//! use waypoint::endpoints::path::{param, path};
//! use waypoint::local;
//!
//! let endpoint = path("posts").and(param::<u64>());
//!
//! let mut result = local::get("/posts/7").apply(&endpoint);
//! assert_eq!(result.await_value_unsafe(None), Some(7));
//! ```

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use futures::executor::{Notify, Spawn};
use futures::{Async, Future};
use http::header::{HeaderName, HeaderValue};
use http::{HttpTryFrom, Method, Request, Uri};

use crate::endpoint::{apply_input, Endpoint, EndpointResult};
use crate::input::Input;

macro_rules! impl_constructors {
    ($(
        $(#[$doc:meta])*
        $METHOD:ident => $name:ident,
    )*) => {$(
        $(#[$doc])*
        pub fn $name<U>(uri: U) -> LocalRequest
        where
            Uri: HttpTryFrom<U>,
        {
            LocalRequest::new()
                .method(Method::$METHOD)
                .uri(uri)
        }
    )*};
}

impl_constructors! {
    /// Create a dummy `GET` request with the given URI.
    GET => get,

    /// Create a dummy `POST` request with the given URI.
    POST => post,

    /// Create a dummy `PUT` request with the given URI.
    PUT => put,

    /// Create a dummy `HEAD` request with the given URI.
    HEAD => head,

    /// Create a dummy `DELETE` request with the given URI.
    DELETE => delete,

    /// Create a dummy `PATCH` request with the given URI.
    PATCH => patch,
}

/// A builder of dummy requests used to exercise endpoints from tests.
#[derive(Debug)]
pub struct LocalRequest {
    request: Request<()>,
}

impl Default for LocalRequest {
    fn default() -> Self {
        LocalRequest::new()
    }
}

impl LocalRequest {
    /// Create a new `LocalRequest`.
    pub fn new() -> LocalRequest {
        LocalRequest {
            request: Request::new(()),
        }
    }

    /// Overwrite the HTTP method of this dummy request.
    ///
    /// # Panics
    /// This method will panic if the parameter is an invalid HTTP method.
    pub fn method<M>(mut self, method: M) -> Self
    where
        Method: HttpTryFrom<M>,
    {
        *self.request.method_mut() = Method::try_from(method).ok().unwrap();
        self
    }

    /// Overwrite the URI of this dummy request.
    ///
    /// # Panics
    /// This method will panic if the parameter is an invalid URI.
    pub fn uri<U>(mut self, uri: U) -> Self
    where
        Uri: HttpTryFrom<U>,
    {
        *self.request.uri_mut() = Uri::try_from(uri).ok().unwrap();
        self
    }

    /// Append the given header entry to this dummy request.
    ///
    /// # Panics
    /// This method will panic if the given header name or value is invalid.
    pub fn header<K, V>(mut self, name: K, value: V) -> Self
    where
        HeaderName: HttpTryFrom<K>,
        HeaderValue: HttpTryFrom<V>,
    {
        let name = HeaderName::try_from(name).ok().unwrap();
        let value = HeaderValue::try_from(value).ok().unwrap();
        self.request.headers_mut().insert(name, value);
        self
    }

    /// Apply this dummy request to the given endpoint.
    pub fn apply<E: Endpoint>(self, endpoint: &E) -> EndpointResult<E::Future> {
        apply_input(endpoint, Input::new(self.request))
    }
}

/// Drive a spawned task on the calling thread until it resolves or the
/// deadline elapses. Returns `None` on a timeout; the task is left
/// untouched and may be waited on again.
pub(crate) fn block_on<F: Future>(
    spawn: &mut Spawn<F>,
    timeout: Option<Duration>,
) -> Option<Result<F::Item, F::Error>> {
    let notify = Arc::new(ThreadNotify {
        thread: thread::current(),
    });
    let deadline = timeout.map(|timeout| Instant::now() + timeout);
    loop {
        match spawn.poll_future_notify(&notify, 0) {
            Ok(Async::Ready(item)) => return Some(Ok(item)),
            Ok(Async::NotReady) => {}
            Err(err) => return Some(Err(err)),
        }
        match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return None;
                }
                thread::park_timeout(deadline - now);
            }
            None => thread::park(),
        }
    }
}

struct ThreadNotify {
    thread: thread::Thread,
}

impl Notify for ThreadNotify {
    fn notify(&self, _id: usize) {
        self.thread.unpark();
    }
}
