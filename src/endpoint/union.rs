use std::fmt;

use either::Either;
use futures::{Future, Poll};
use log::trace;

use super::Endpoint;
use crate::error::Error;
use crate::generic::{one, One};
use crate::input::Input;

#[derive(Copy, Clone)]
pub struct OrUnion<E1, E2> {
    pub(super) e1: E1,
    pub(super) e2: E2,
}

impl<E1, E2> fmt::Debug for OrUnion<E1, E2>
where
    E1: fmt::Debug,
    E2: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}:+:{:?})", self.e1, self.e2)
    }
}

impl<E1, E2> Endpoint for OrUnion<E1, E2>
where
    E1: Endpoint,
    E2: Endpoint,
{
    type Output = One<Either<E1::Output, E2::Output>>;
    type Future = OrUnionFuture<E1::Future, E2::Future>;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        // The same resolution rule as alternation, with each branch's
        // value tagged by the side it came from. Tag order follows
        // operator application order.
        match (self.e1.apply(input), self.e2.apply(input)) {
            (Some((r1, f1)), Some((r2, f2))) => {
                if r1.len() <= r2.len() {
                    trace!("union: both matched, choosing left");
                    Some((r1, OrUnionFuture::left(f1)))
                } else {
                    trace!("union: both matched, choosing right");
                    Some((r2, OrUnionFuture::right(f2)))
                }
            }
            (Some((r, f)), None) => Some((r, OrUnionFuture::left(f))),
            (None, Some((r, f))) => Some((r, OrUnionFuture::right(f))),
            (None, None) => None,
        }
    }
}

#[derive(Debug)]
pub struct OrUnionFuture<F1, F2> {
    inner: Either<F1, F2>,
}

impl<F1, F2> OrUnionFuture<F1, F2> {
    fn left(f1: F1) -> OrUnionFuture<F1, F2> {
        OrUnionFuture {
            inner: Either::Left(f1),
        }
    }

    fn right(f2: F2) -> OrUnionFuture<F1, F2> {
        OrUnionFuture {
            inner: Either::Right(f2),
        }
    }
}

impl<F1, F2> Future for OrUnionFuture<F1, F2>
where
    F1: Future<Error = Error>,
    F2: Future<Error = Error>,
{
    type Item = One<Either<F1::Item, F2::Item>>;
    type Error = Error;

    fn poll(&mut self) -> Poll<Self::Item, Self::Error> {
        match self.inner {
            Either::Left(ref mut f) => f.poll().map(|a| a.map(|item| one(Either::Left(item)))),
            Either::Right(ref mut f) => f.poll().map(|a| a.map(|item| one(Either::Right(item)))),
        }
    }
}
