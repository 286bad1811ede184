use std::fmt;

use either::Either;
use futures::{Future, Poll};
use log::trace;

use super::Endpoint;
use crate::error::Error;
use crate::input::Input;

#[derive(Copy, Clone)]
pub struct Or<E1, E2> {
    pub(super) e1: E1,
    pub(super) e2: E2,
}

impl<E1, E2> fmt::Debug for Or<E1, E2>
where
    E1: fmt::Debug,
    E2: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}|{:?})", self.e1, self.e2)
    }
}

impl<E1, E2> Endpoint for Or<E1, E2>
where
    E1: Endpoint,
    E2: Endpoint<Output = E1::Output>,
{
    type Output = E1::Output;
    type Future = OrFuture<E1::Future, E2::Future>;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        match (self.e1.apply(input), self.e2.apply(input)) {
            (Some((r1, f1)), Some((r2, f2))) => {
                // Both branches matched: the one which consumed more
                // segments wins, and an exact tie goes to the left.
                if r1.len() <= r2.len() {
                    trace!("alternation: both matched, choosing left");
                    Some((r1, OrFuture::left(f1)))
                } else {
                    trace!("alternation: both matched, choosing right");
                    Some((r2, OrFuture::right(f2)))
                }
            }
            (Some((r, f)), None) => Some((r, OrFuture::left(f))),
            (None, Some((r, f))) => Some((r, OrFuture::right(f))),
            (None, None) => None,
        }
    }
}

#[derive(Debug)]
pub struct OrFuture<F1, F2> {
    inner: Either<F1, F2>,
}

impl<F1, F2> OrFuture<F1, F2> {
    fn left(f1: F1) -> OrFuture<F1, F2> {
        OrFuture {
            inner: Either::Left(f1),
        }
    }

    fn right(f2: F2) -> OrFuture<F1, F2> {
        OrFuture {
            inner: Either::Right(f2),
        }
    }
}

impl<F1, F2> Future for OrFuture<F1, F2>
where
    F1: Future<Error = Error>,
    F2: Future<Item = F1::Item, Error = Error>,
{
    type Item = F1::Item;
    type Error = Error;

    #[inline]
    fn poll(&mut self) -> Poll<Self::Item, Self::Error> {
        match self.inner {
            Either::Left(ref mut f) => f.poll(),
            Either::Right(ref mut f) => f.poll(),
        }
    }
}
