use std::fmt;

use futures::{Async, Future, Poll};

use super::maybe_done::MaybeDone;
use super::Endpoint;
use crate::error::Error;
use crate::generic::{Combine, Tuple};
use crate::input::Input;

#[derive(Copy, Clone)]
pub struct And<E1, E2> {
    pub(super) e1: E1,
    pub(super) e2: E2,
}

impl<E1, E2> fmt::Debug for And<E1, E2>
where
    E1: fmt::Debug,
    E2: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.e1, self.e2)
    }
}

impl<E1, E2> Endpoint for And<E1, E2>
where
    E1: Endpoint,
    E2: Endpoint,
    E1::Output: Combine<E2::Output>,
{
    type Output = <E1::Output as Combine<E2::Output>>::Out;
    type Future = AndFuture<E1::Future, E2::Future>;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        let (remainder, f1) = self.e1.apply(input)?;
        let (remainder, f2) = self.e2.apply(&remainder)?;
        Some((
            remainder,
            AndFuture {
                f1: MaybeDone::Pending(f1),
                f2: MaybeDone::Pending(f2),
            },
        ))
    }
}

/// The join of the two sides' tasks: both run without an ordering
/// guarantee, the pair resolves once both have resolved, and a failure
/// on either side fails the whole task.
pub struct AndFuture<F1: Future, F2: Future> {
    f1: MaybeDone<F1>,
    f2: MaybeDone<F2>,
}

impl<F1, F2> fmt::Debug for AndFuture<F1, F2>
where
    F1: Future + fmt::Debug,
    F2: Future + fmt::Debug,
    F1::Item: fmt::Debug,
    F2::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndFuture")
            .field("f1", &self.f1)
            .field("f2", &self.f2)
            .finish()
    }
}

impl<F1, F2> Future for AndFuture<F1, F2>
where
    F1: Future<Error = Error>,
    F2: Future<Error = Error>,
    F1::Item: Tuple + Combine<F2::Item>,
    F2::Item: Tuple,
{
    type Item = <F1::Item as Combine<F2::Item>>::Out;
    type Error = Error;

    fn poll(&mut self) -> Poll<Self::Item, Self::Error> {
        let mut all_done = self.f1.poll_done()?;
        all_done = self.f2.poll_done()? && all_done;
        if all_done {
            Ok(Async::Ready(self.f1.take().combine(self.f2.take())))
        } else {
            Ok(Async::NotReady)
        }
    }
}
