use futures::future::{self, FutureResult};

use super::Endpoint;
use crate::error::Error;
use crate::generic::{one, One};
use crate::input::Input;

/// Create an endpoint which always matches, consumes nothing and
/// yields a clone of the given value.
pub fn just<T: Clone>(x: T) -> Just<T> {
    Just { x }
}

#[derive(Debug, Clone, Copy)]
pub struct Just<T> {
    x: T,
}

impl<T: Clone> Endpoint for Just<T> {
    type Output = One<T>;
    type Future = FutureResult<One<T>, Error>;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        Some((input.clone(), future::ok(one(self.x.clone()))))
    }
}
