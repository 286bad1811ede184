use std::fmt;

use futures::{Async, Future, IntoFuture, Poll};

use super::Endpoint;
use crate::error::Error;
use crate::generic::Tuple;
use crate::input::Input;

/// Lift a function over `Input` into an endpoint.
///
/// This is the universal constructor: the function receives the raw
/// cursor and decides itself whether (and how much of) the input is
/// consumed. Every other combinator could be expressed in terms of it.
pub fn apply_fn<F, R>(f: F) -> ApplyFn<F>
where
    F: Fn(&Input) -> Option<(Input, R)>,
    R: IntoFuture,
    R::Item: Tuple,
    R::Error: Into<Error>,
{
    ApplyFn { f }
}

#[derive(Clone, Copy)]
pub struct ApplyFn<F> {
    f: F,
}

impl<F> fmt::Debug for ApplyFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("apply_fn")
    }
}

impl<F, R> Endpoint for ApplyFn<F>
where
    F: Fn(&Input) -> Option<(Input, R)>,
    R: IntoFuture,
    R::Item: Tuple,
    R::Error: Into<Error>,
{
    type Output = R::Item;
    type Future = ApplyFnFuture<R::Future>;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        let (remainder, task) = (self.f)(input)?;
        Some((
            remainder,
            ApplyFnFuture {
                future: task.into_future(),
            },
        ))
    }
}

#[derive(Debug)]
pub struct ApplyFnFuture<F> {
    future: F,
}

impl<F> Future for ApplyFnFuture<F>
where
    F: Future,
    F::Item: Tuple,
    F::Error: Into<Error>,
{
    type Item = F::Item;
    type Error = Error;

    fn poll(&mut self) -> Poll<Self::Item, Self::Error> {
        match self.future.poll() {
            Ok(Async::Ready(item)) => Ok(Async::Ready(item)),
            Ok(Async::NotReady) => Ok(Async::NotReady),
            Err(err) => Err(err.into()),
        }
    }
}
