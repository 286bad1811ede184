//! The result envelope produced by forcing a matched endpoint's task.

use http::header::HeaderMap;
use http::StatusCode;

/// A result envelope: a status code, a set of header values and an
/// optional payload.
///
/// The routing core never inspects the payload; it is carried through
/// so the serving layer (or the test harness) can unwrap it.
#[derive(Debug, Clone, PartialEq)]
pub struct Output<T> {
    status: StatusCode,
    headers: HeaderMap,
    payload: Option<T>,
}

impl<T> Output<T> {
    /// Create an `Output` carrying the given payload, with status `200 OK`.
    pub fn payload(payload: T) -> Output<T> {
        Output {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            payload: Some(payload),
        }
    }

    /// Create an `Output` without a payload.
    pub fn empty(status: StatusCode) -> Output<T> {
        Output {
            status,
            headers: HeaderMap::new(),
            payload: None,
        }
    }

    /// Overwrite the status code of this envelope.
    pub fn with_status(mut self, status: StatusCode) -> Output<T> {
        self.status = status;
        self
    }

    /// Return the status code of this envelope.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Return the reference to the header map.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Return the mutable reference to the header map.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Apply a function to the contained payload, if any.
    pub fn map<F, U>(self, f: F) -> Output<U>
    where
        F: FnOnce(T) -> U,
    {
        Output {
            status: self.status,
            headers: self.headers,
            payload: self.payload.map(f),
        }
    }

    /// Consume the envelope and return the payload, if any.
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }
}

/// Conversion of the values extracted by an endpoint into an `Output`.
pub trait IntoOutput {
    /// The type of payload carried by the produced envelope.
    type Payload;

    /// Consume `self` and build the envelope.
    fn into_output(self) -> Output<Self::Payload>;
}

impl IntoOutput for () {
    type Payload = ();

    fn into_output(self) -> Output<Self::Payload> {
        Output::empty(StatusCode::NO_CONTENT)
    }
}

impl<T> IntoOutput for (T,) {
    type Payload = T;

    fn into_output(self) -> Output<Self::Payload> {
        Output::payload(self.0)
    }
}

macro_rules! impl_into_output_for_tuples {
    ($($T:ident),*) => {
        impl<$($T),*> IntoOutput for ($($T),*) {
            type Payload = Self;

            fn into_output(self) -> Output<Self::Payload> {
                Output::payload(self)
            }
        }
    };
}

impl_into_output_for_tuples!(T0, T1);
impl_into_output_for_tuples!(T0, T1, T2);
impl_into_output_for_tuples!(T0, T1, T2, T3);
impl_into_output_for_tuples!(T0, T1, T2, T3, T4);
impl_into_output_for_tuples!(T0, T1, T2, T3, T4, T5);
impl_into_output_for_tuples!(T0, T1, T2, T3, T4, T5, T6);
impl_into_output_for_tuples!(T0, T1, T2, T3, T4, T5, T6, T7);
