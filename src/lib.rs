//! A combinator library for building request routers.
//!
//! The routing tree is built ahead of time from small, composable
//! matchers called [`Endpoint`]s. Applying an endpoint to an [`Input`]
//! never touches an asynchronous runtime: matching is a synchronous,
//! single-pass traversal which either rejects the input or yields the
//! remaining cursor together with a deferred task computing the
//! extracted values. Forcing that task is the serving layer's job; the
//! [`local`] module provides a blocking test harness for doing it from
//! unit tests.
//!
//! [`Endpoint`]: ./endpoint/trait.Endpoint.html
//! [`Input`]: ./input/struct.Input.html
//! [`local`]: ./local/index.html
//!
//! # Example
//!
//! ```
//! use waypoint::endpoint::EndpointExt;
//! use waypoint::endpoints::path::{param, path};
//! use waypoint::local;
//!
//! let endpoint = path("users").and(param::<u32>()).map(|id: u32| id + 1);
//!
//! let mut result = local::get("/users/42").apply(&endpoint);
//! assert!(result.is_matched());
//! assert_eq!(
//!     result.await_value(None).map(|res| res.ok()),
//!     Some(Some(43)),
//! );
//! ```

#![doc(html_root_url = "https://docs.rs/waypoint/0.1.0")]
#![deny(bare_trait_objects)]

pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod generic;
pub mod input;
pub mod local;
pub mod output;

pub use crate::endpoint::{apply_input, Endpoint, EndpointExt, EndpointResult, IntoEndpoint};
pub use crate::error::{Error, HttpError};
pub use crate::input::Input;
pub use crate::output::{IntoOutput, Output};
