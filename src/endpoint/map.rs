use std::fmt;
use std::sync::Arc;

use futures::{Async, Future, Poll};

use super::Endpoint;
use crate::error::Error;
use crate::generic::{one, Func, One, Tuple};
use crate::input::Input;

pub struct Map<E, F> {
    pub(super) endpoint: E,
    pub(super) f: Arc<F>,
}

impl<E: Clone, F> Clone for Map<E, F> {
    fn clone(&self) -> Self {
        Map {
            endpoint: self.endpoint.clone(),
            f: self.f.clone(),
        }
    }
}

// The mapping does not alter what the endpoint matches, so the
// diagnostic identity is the source endpoint's.
impl<E: fmt::Debug, F> fmt::Debug for Map<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.endpoint, f)
    }
}

impl<E, F> Endpoint for Map<E, F>
where
    E: Endpoint,
    F: Func<E::Output>,
{
    type Output = One<F::Out>;
    type Future = MapFuture<E::Future, F>;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        let (remainder, future) = self.endpoint.apply(input)?;
        Some((
            remainder,
            MapFuture {
                future,
                f: Some(self.f.clone()),
            },
        ))
    }
}

#[derive(Debug)]
pub struct MapFuture<T, F> {
    future: T,
    f: Option<Arc<F>>,
}

impl<T, F> Future for MapFuture<T, F>
where
    T: Future<Error = Error>,
    T::Item: Tuple,
    F: Func<T::Item>,
{
    type Item = One<F::Out>;
    type Error = Error;

    fn poll(&mut self) -> Poll<Self::Item, Self::Error> {
        let item = match self.future.poll()? {
            Async::Ready(item) => item,
            Async::NotReady => return Ok(Async::NotReady),
        };
        let f = self.f.take().expect("cannot resolve twice");
        Ok(Async::Ready(one(f.call(item))))
    }
}
