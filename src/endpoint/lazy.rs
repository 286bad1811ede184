use std::fmt;

use futures::{Async, Future, IntoFuture, Poll};

use super::Endpoint;
use crate::error::Error;
use crate::generic::{one, One};
use crate::input::Input;

/// Create an endpoint which always matches, consumes nothing and
/// yields the deferred computation minted by `f`.
///
/// The closure runs at apply time; the returned task does not start
/// until it is forced.
pub fn lazy<F, R>(f: F) -> Lazy<F>
where
    F: Fn() -> R,
    R: IntoFuture,
    R::Error: Into<Error>,
{
    Lazy { f }
}

#[derive(Clone, Copy)]
pub struct Lazy<F> {
    f: F,
}

impl<F> fmt::Debug for Lazy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("lazy")
    }
}

impl<F, R> Endpoint for Lazy<F>
where
    F: Fn() -> R,
    R: IntoFuture,
    R::Error: Into<Error>,
{
    type Output = One<R::Item>;
    type Future = LazyFuture<R::Future>;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        Some((
            input.clone(),
            LazyFuture {
                future: (self.f)().into_future(),
            },
        ))
    }
}

#[derive(Debug)]
pub struct LazyFuture<F> {
    future: F,
}

impl<F> Future for LazyFuture<F>
where
    F: Future,
    F::Error: Into<Error>,
{
    type Item = One<F::Item>;
    type Error = Error;

    fn poll(&mut self) -> Poll<Self::Item, Self::Error> {
        match self.future.poll() {
            Ok(Async::Ready(item)) => Ok(Async::Ready(one(item))),
            Ok(Async::NotReady) => Ok(Async::NotReady),
            Err(err) => Err(err.into()),
        }
    }
}
