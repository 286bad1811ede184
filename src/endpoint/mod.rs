//! Components for constructing endpoints.
//!
//! An endpoint is a value-level matching function: applied to an
//! [`Input`] it either rejects it or consumes a prefix of the path and
//! yields the remainder together with a deferred task computing the
//! extracted values. Endpoints are built ahead of time, purely from
//! the combinators in this module, and applied once per request.
//!
//! [`Input`]: ../input/struct.Input.html

mod abort_with;
mod and;
mod and_then;
mod apply_fn;
mod ext;
mod just;
mod lazy;
mod map;
mod maybe_done;
mod or;
mod result;
mod union;

// re-exports
pub use self::abort_with::{abort_with, AbortWith};
pub use self::and::And;
pub use self::and_then::AndThen;
pub use self::apply_fn::{apply_fn, ApplyFn};
pub use self::ext::EndpointExt;
pub use self::just::{just, Just};
pub use self::lazy::{lazy, Lazy};
pub use self::map::Map;
pub use self::or::Or;
pub use self::result::{apply_input, EndpointResult, TaskState};
pub use self::union::OrUnion;

use std::rc::Rc;
use std::sync::Arc;

use futures::Future;

use crate::error::Error;
use crate::generic::Tuple;
use crate::input::Input;

/// Trait representing an endpoint.
pub trait Endpoint {
    /// The tuple of values extracted by this endpoint.
    type Output: Tuple;

    /// The type of the deferred task which will be returned from `apply`.
    type Future: Future<Item = Self::Output, Error = Error>;

    /// Check whether this endpoint accepts the given input.
    ///
    /// Returning `None` means the input is not accepted. Returning
    /// `Some` means a prefix of the path was consumed; the first
    /// element is the remaining cursor and the second the deferred
    /// task. The task is never polled here: matching is synchronous
    /// and side-effect free.
    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)>;
}

impl<'a, E: Endpoint> Endpoint for &'a E {
    type Output = E::Output;
    type Future = E::Future;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        (*self).apply(input)
    }
}

impl<E: Endpoint> Endpoint for Box<E> {
    type Output = E::Output;
    type Future = E::Future;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        (**self).apply(input)
    }
}

impl<E: Endpoint> Endpoint for Rc<E> {
    type Output = E::Output;
    type Future = E::Future;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        (**self).apply(input)
    }
}

impl<E: Endpoint> Endpoint for Arc<E> {
    type Output = E::Output;
    type Future = E::Future;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        (**self).apply(input)
    }
}

/// Trait representing the conversion into an `Endpoint`.
pub trait IntoEndpoint {
    /// The tuple of values extracted by the converted endpoint.
    type Output: Tuple;

    /// The type of converted endpoint.
    type Endpoint: Endpoint<Output = Self::Output>;

    /// Consume itself and convert into an `Endpoint`.
    fn into_endpoint(self) -> Self::Endpoint;
}

impl<E: Endpoint> IntoEndpoint for E {
    type Output = E::Output;
    type Endpoint = E;

    #[inline]
    fn into_endpoint(self) -> Self::Endpoint {
        self
    }
}

/// A shortcut of `IntoEndpoint::into_endpoint()`.
#[inline]
pub fn endpoint<E: IntoEndpoint>(endpoint: E) -> E::Endpoint {
    endpoint.into_endpoint()
}
