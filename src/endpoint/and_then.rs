use std::fmt;
use std::sync::Arc;

use futures::{Async, Future, IntoFuture, Poll};

use super::Endpoint;
use crate::error::Error;
use crate::generic::{one, Func, One, Tuple};
use crate::input::Input;

pub struct AndThen<E, F> {
    pub(super) endpoint: E,
    pub(super) f: Arc<F>,
}

impl<E: Clone, F> Clone for AndThen<E, F> {
    fn clone(&self) -> Self {
        AndThen {
            endpoint: self.endpoint.clone(),
            f: self.f.clone(),
        }
    }
}

impl<E: fmt::Debug, F> fmt::Debug for AndThen<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.endpoint, f)
    }
}

impl<E, F, R> Endpoint for AndThen<E, F>
where
    E: Endpoint,
    F: Func<E::Output, Out = R>,
    R: IntoFuture,
    R::Error: Into<Error>,
{
    type Output = One<R::Item>;
    type Future = AndThenFuture<E::Future, F, R>;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        let (remainder, future) = self.endpoint.apply(input)?;
        Some((
            remainder,
            AndThenFuture {
                state: State::First(future, Some(self.f.clone())),
            },
        ))
    }
}

/// The chaining of a second deferred computation onto the first one's
/// value. The continuation runs after, not nested inside, the source
/// task; it never affects whether the endpoint matched.
pub struct AndThenFuture<F1, F, R: IntoFuture> {
    state: State<F1, F, R::Future>,
}

enum State<F1, F, F2> {
    First(F1, Option<Arc<F>>),
    Second(F2),
}

impl<F1, F, R: IntoFuture> fmt::Debug for AndThenFuture<F1, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            State::First(..) => f.write_str("AndThenFuture(First)"),
            State::Second(..) => f.write_str("AndThenFuture(Second)"),
        }
    }
}

impl<F1, F, R> Future for AndThenFuture<F1, F, R>
where
    F1: Future<Error = Error>,
    F1::Item: Tuple,
    F: Func<F1::Item, Out = R>,
    R: IntoFuture,
    R::Error: Into<Error>,
{
    type Item = One<R::Item>;
    type Error = Error;

    fn poll(&mut self) -> Poll<Self::Item, Self::Error> {
        loop {
            let next = match self.state {
                State::First(ref mut f1, ref mut f) => {
                    let item = match f1.poll()? {
                        Async::Ready(item) => item,
                        Async::NotReady => return Ok(Async::NotReady),
                    };
                    let f = f.take().expect("cannot resolve twice");
                    f.call(item).into_future()
                }
                State::Second(ref mut f2) => {
                    return match f2.poll() {
                        Ok(Async::Ready(item)) => Ok(Async::Ready(one(item))),
                        Ok(Async::NotReady) => Ok(Async::NotReady),
                        Err(err) => Err(err.into()),
                    };
                }
            };
            self.state = State::Second(next);
        }
    }
}
