use std::fmt;
use std::marker::PhantomData;

use futures::{Future, Poll};

use super::Endpoint;
use crate::error::Error;
use crate::generic::One;
use crate::input::Input;

/// Create an endpoint which always matches, consumes nothing, and
/// whose task resolves to the given error kind when forced.
///
/// The output type is free so the endpoint can stand in for any
/// alternative branch.
pub fn abort_with<T>(err: impl Into<Error>) -> AbortWith<T> {
    AbortWith {
        error: err.into(),
        _marker: PhantomData,
    }
}

pub struct AbortWith<T> {
    error: Error,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for AbortWith<T> {
    fn clone(&self) -> Self {
        AbortWith {
            error: self.error.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for AbortWith<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AbortWith").field(&self.error).finish()
    }
}

impl<T> Endpoint for AbortWith<T> {
    type Output = One<T>;
    type Future = AbortFuture<T>;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        Some((
            input.clone(),
            AbortFuture {
                error: Some(self.error.clone()),
                _marker: PhantomData,
            },
        ))
    }
}

pub struct AbortFuture<T> {
    error: Option<Error>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for AbortFuture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AbortFuture").field(&self.error).finish()
    }
}

impl<T> Future for AbortFuture<T> {
    type Item = One<T>;
    type Error = Error;

    fn poll(&mut self) -> Poll<Self::Item, Self::Error> {
        let err = self.error.take().expect("cannot reject twice");
        Err(err)
    }
}
