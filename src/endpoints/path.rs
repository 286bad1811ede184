//! Endpoints for matching the segments of a request path.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use futures::future::{self, FutureResult};

use crate::endpoint::Endpoint;
use crate::error::{BadRequest, Error};
use crate::generic::{one, One};
use crate::input::Input;

/// Create an endpoint which matches the given literal path components.
///
/// `path("api/v1")` consumes two segments; leading and trailing
/// slashes in the pattern are ignored. The endpoint extracts nothing.
pub fn path(s: &str) -> MatchPath {
    let segments = s
        .trim_matches('/')
        .split('/')
        .map(|component| component.trim().to_owned())
        .filter(|component| !component.is_empty())
        .collect();
    MatchPath { segments }
}

#[derive(Clone)]
pub struct MatchPath {
    segments: Vec<String>,
}

impl fmt::Debug for MatchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.segments.join("/"))
    }
}

impl Endpoint for MatchPath {
    type Output = ();
    type Future = FutureResult<(), Error>;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        let mut cursor = input.clone();
        for literal in &self.segments {
            let matched = match cursor.head_option() {
                Some(segment) => segment == literal.as_str(),
                None => false,
            };
            if !matched {
                return None;
            }
            cursor = cursor.drop_front(1);
        }
        Some((cursor, future::ok(())))
    }
}

/// Create an endpoint which consumes exactly one segment and decodes
/// it into `T`.
///
/// A missing segment is a match failure. A present segment which fails
/// to decode is still a *match*: the failure lives in the task, so the
/// serving layer can report it as a bad request rather than a missing
/// route.
pub fn param<T: FromSegment>() -> Param<T> {
    Param {
        _marker: PhantomData,
    }
}

pub struct Param<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Param<T> {
    fn clone(&self) -> Self {
        Param {
            _marker: PhantomData,
        }
    }
}

impl<T> Copy for Param<T> {}

impl<T> fmt::Debug for Param<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("param")
    }
}

impl<T: FromSegment> Endpoint for Param<T> {
    type Output = One<T>;
    type Future = FutureResult<One<T>, Error>;

    fn apply(&self, input: &Input) -> Option<(Input, Self::Future)> {
        let result = T::from_segment(input.head_option()?);
        Some((
            input.drop_front(1),
            future::result(result.map(one).map_err(Into::into)),
        ))
    }
}

/// Trait representing the decoding of a single path segment.
pub trait FromSegment: Sized {
    /// The error type returned when decoding fails.
    type Error: Into<Error>;

    /// Try to decode the given segment.
    fn from_segment(s: &str) -> Result<Self, Self::Error>;
}

impl FromSegment for String {
    type Error = BadRequest;

    fn from_segment(s: &str) -> Result<Self, Self::Error> {
        Ok(s.to_owned())
    }
}

macro_rules! impl_from_segment_from_str {
    ($($t:ty,)*) => {$(
        impl FromSegment for $t {
            type Error = BadRequest;

            fn from_segment(s: &str) -> Result<Self, Self::Error> {
                FromStr::from_str(s).map_err(|cause| {
                    BadRequest::new(format!(
                        "failed to decode the path segment {:?}",
                        s,
                    ))
                    .with_cause(cause)
                })
            }
        }
    )*};
}

impl_from_segment_from_str! {
    bool, char,
    f32, f64,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_pattern_normalization() {
        assert_eq!(format!("{:?}", path("/api/v1/")), format!("{:?}", path("api/v1")));
    }

    #[test]
    fn test_from_segment_decodes_primitives() {
        assert_eq!(u32::from_segment("42").ok(), Some(42));
        assert_eq!(bool::from_segment("true").ok(), Some(true));
        assert_eq!(String::from_segment("abc").ok(), Some("abc".to_owned()));
    }

    #[test]
    fn test_from_segment_rejects_garbage() {
        assert!(u32::from_segment("forty-two").is_err());
        assert!(bool::from_segment("yes").is_err());
    }
}
