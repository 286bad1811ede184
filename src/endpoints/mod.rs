//! Built-in endpoints.

pub mod path;
