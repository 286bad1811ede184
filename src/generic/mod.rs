//! Type-level machinery for composing the values extracted by
//! endpoints.
//!
//! Every endpoint's output is a tuple, and sequencing two endpoints
//! merges their outputs with [`Combine`]: the tuples are concatenated
//! one level deep, so chains of `and` produce flat N-tuples instead of
//! right-nested pairs. [`Func`] is the calling convention used by
//! `map` and `and_then` so a plain closure can take the extracted
//! values as separate arguments.
//!
//! [`Combine`]: ./trait.Combine.html
//! [`Func`]: ./trait.Func.html

mod combine;
mod func;
mod hlist;

pub use self::combine::Combine;
pub use self::func::Func;
pub use self::hlist::{HCons, HList, HNil, Tuple};

/// A one-element tuple, the output type of endpoints extracting a
/// single value.
pub type One<T> = (T,);

/// Wrap a value in a one-element tuple.
#[inline]
pub fn one<T>(x: T) -> One<T> {
    (x,)
}
