use std::mem;

use futures::{Async, Future};

/// A slot holding one side of a joined pair of tasks, caching the
/// resolved value until both sides are done.
#[derive(Debug)]
pub(super) enum MaybeDone<F: Future> {
    Pending(F),
    Done(F::Item),
    Gone,
}

impl<F: Future> MaybeDone<F> {
    /// Poll the underlying task unless it has already resolved.
    /// Returns `Ok(true)` once the value is available.
    pub(super) fn poll_done(&mut self) -> Result<bool, F::Error> {
        let item = match *self {
            MaybeDone::Pending(ref mut f) => match f.poll()? {
                Async::Ready(item) => item,
                Async::NotReady => return Ok(false),
            },
            MaybeDone::Done(..) => return Ok(true),
            MaybeDone::Gone => panic!("cannot poll a joined task twice"),
        };
        *self = MaybeDone::Done(item);
        Ok(true)
    }

    pub(super) fn take(&mut self) -> F::Item {
        match mem::replace(self, MaybeDone::Gone) {
            MaybeDone::Done(item) => item,
            _ => panic!("the joined task has not resolved yet"),
        }
    }
}
