use std::sync::Arc;

use futures::IntoFuture;

use super::and::And;
use super::and_then::AndThen;
use super::map::Map;
use super::or::Or;
use super::union::OrUnion;
use super::{Endpoint, IntoEndpoint};
use crate::error::Error;
use crate::generic::{Combine, Func};

/// A set of combinators for composing endpoints.
pub trait EndpointExt: Endpoint + Sized {
    /// Create an endpoint which matches only if `self` matches and the
    /// remainder it leaves is accepted by `other`.
    ///
    /// The two tasks are joined and their output tuples are merged one
    /// level deep, so chained calls keep producing flat tuples.
    fn and<E>(self, other: E) -> And<Self, E::Endpoint>
    where
        E: IntoEndpoint,
        Self::Output: Combine<E::Output>,
    {
        And {
            e1: self,
            e2: other.into_endpoint(),
        }
    }

    /// Create an endpoint which tries both `self` and `other` against
    /// the same input.
    ///
    /// If both match, the branch which consumed more of the path wins;
    /// an exact tie goes to `self`. Chaining keeps the rule: the
    /// longest match among all alternatives is selected, ties broken
    /// toward the earliest one.
    fn or<E>(self, other: E) -> Or<Self, E::Endpoint>
    where
        E: IntoEndpoint<Output = Self::Output>,
    {
        Or {
            e1: self,
            e2: other.into_endpoint(),
        }
    }

    /// Like `or`, but the two branches may extract different types:
    /// the output becomes a tagged union which grows by one case per
    /// application, with tag order matching application order.
    fn or_union<E>(self, other: E) -> OrUnion<Self, E::Endpoint>
    where
        E: IntoEndpoint,
    {
        OrUnion {
            e1: self,
            e2: other.into_endpoint(),
        }
    }

    /// Create an endpoint which applies `f` to the extracted values.
    ///
    /// The match decision and the consumed prefix are those of `self`.
    fn map<F>(self, f: F) -> Map<Self, F>
    where
        F: Func<Self::Output>,
    {
        Map {
            endpoint: self,
            f: Arc::new(f),
        }
    }

    /// Create an endpoint which continues the deferred computation
    /// with the task returned by `f`.
    ///
    /// This never affects whether the endpoint matched; it only alters
    /// the eventual value (or failure) of the task.
    fn and_then<F, R>(self, f: F) -> AndThen<Self, F>
    where
        F: Func<Self::Output, Out = R>,
        R: IntoFuture,
        R::Error: Into<Error>,
    {
        AndThen {
            endpoint: self,
            f: Arc::new(f),
        }
    }
}

impl<E: Endpoint> EndpointExt for E {}
