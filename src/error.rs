//! Error primitives.
//!
//! Routing distinguishes two failure axes which are never conflated:
//! an endpoint which does not accept the input signals this
//! structurally (see `EndpointResult::NotMatched`), while a failure of
//! the deferred computation is carried as an [`Error`] inside the task
//! and propagated unchanged through the combinators.
//!
//! [`Error`]: ./struct.Error.html

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;
use std::fmt::{Debug, Display};
use std::sync::Arc;

use failure::Fail;
use http::StatusCode;

/// Trait representing error values from endpoints.
pub trait HttpError: Debug + Display + Send + Sync + 'static {
    /// Return the HTTP status code associated with this error type.
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Return the underlying cause of this error, if any.
    fn cause(&self) -> Option<&dyn Fail> {
        None
    }

    #[doc(hidden)]
    fn __private_type_id__(&self) -> TypeId {
        TypeId::of::<Self>()
    }
}

/// A type which holds a value of `HttpError` in a type-erased form.
///
/// The contained value is shared rather than owned so that a cached
/// task outcome can be observed any number of times; cloning an
/// `Error` clones the handle, not the failure.
#[derive(Debug, Clone)]
pub struct Error(Arc<dyn HttpError>);

impl<E: HttpError> From<E> for Error {
    fn from(err: E) -> Self {
        Error(Arc::new(err))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.0, f)
    }
}

impl Error {
    /// Create an `Error` from an arbitrary `Fail` value.
    pub fn from_fail<F: Fail>(err: F) -> Error {
        FailWrapped(err.into()).into()
    }

    /// Return the HTTP status code associated with the contained value.
    pub fn status_code(&self) -> StatusCode {
        self.0.status_code()
    }

    /// Return `true` if the type of the contained value is the same as `T`.
    pub fn is<T: HttpError>(&self) -> bool {
        self.0.__private_type_id__() == TypeId::of::<T>()
    }

    /// Return the reference to the contained value.
    pub fn as_http_error(&self) -> &dyn HttpError {
        &*self.0
    }
}

#[derive(Debug)]
struct FailWrapped(failure::Error);

impl Display for FailWrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl HttpError for FailWrapped {
    fn cause(&self) -> Option<&dyn Fail> {
        Some(self.0.as_fail())
    }
}

macro_rules! define_error_kind {
    (
        $(#[$doc:meta])*
        pub struct $Name:ident($status:ident);
    ) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $Name {
            message: Cow<'static, str>,
            cause: Option<failure::Error>,
        }

        impl $Name {
            #[allow(missing_docs)]
            pub fn new<S>(message: S) -> $Name
            where
                S: Into<Cow<'static, str>>,
            {
                $Name {
                    message: message.into(),
                    cause: None,
                }
            }

            /// Annotate this error with its underlying cause.
            pub fn with_cause<E: Fail>(mut self, cause: E) -> $Name {
                self.cause = Some(cause.into());
                self
            }
        }

        impl Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&*self.message)
            }
        }

        impl HttpError for $Name {
            fn status_code(&self) -> StatusCode {
                StatusCode::$status
            }

            fn cause(&self) -> Option<&dyn Fail> {
                self.cause.as_ref().map(failure::Error::as_fail)
            }
        }
    };
}

define_error_kind! {
    /// An error which will be mapped to a `400 Bad Request`, typically
    /// raised when decoding an extracted value fails.
    pub struct BadRequest(BAD_REQUEST);
}

define_error_kind! {
    /// An error which will be mapped to a `500 Internal Server Error`.
    pub struct ServerError(INTERNAL_SERVER_ERROR);
}

/// An error raised when unwrapping an output envelope which carries no
/// payload.
#[derive(Debug)]
pub struct NotPresent {
    message: Cow<'static, str>,
}

impl NotPresent {
    #[allow(missing_docs)]
    pub fn new<S>(message: S) -> NotPresent
    where
        S: Into<Cow<'static, str>>,
    {
        NotPresent {
            message: message.into(),
        }
    }
}

impl Display for NotPresent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&*self.message)
    }
}

impl HttpError for NotPresent {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// An error raised by the blocking accessors when the deadline elapses
/// before the task resolves.
///
/// The task itself is left running; waiting again may still succeed.
#[derive(Debug)]
pub struct WaitTimedOut {
    _priv: (),
}

impl WaitTimedOut {
    #[allow(missing_docs)]
    pub fn new() -> WaitTimedOut {
        WaitTimedOut { _priv: () }
    }
}

impl Default for WaitTimedOut {
    fn default() -> Self {
        WaitTimedOut::new()
    }
}

impl Display for WaitTimedOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("timed out while waiting for the task to resolve")
    }
}

impl HttpError for WaitTimedOut {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_from_fail_wraps_an_arbitrary_failure() {
        let err = Error::from_fail(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.as_http_error().cause().is_some());
        assert_eq!(err.to_string(), "disk on fire");
    }

    #[test]
    fn test_downcast_query() {
        let err = Error::from(BadRequest::new("invalid segment"));
        assert!(err.is::<BadRequest>());
        assert!(!err.is::<ServerError>());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_clone_shares_the_failure() {
        let err = Error::from(NotPresent::new("no payload"));
        let cloned = err.clone();
        assert!(cloned.is::<NotPresent>());
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
