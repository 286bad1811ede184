//! The outcome of applying an endpoint to an input.

use std::fmt;
use std::time::Duration;

use futures::executor::{self, Spawn};
use futures::Future;
use log::trace;

use super::Endpoint;
use crate::error::{Error, NotPresent, WaitTimedOut};
use crate::input::Input;
use crate::local::block_on;
use crate::output::{IntoOutput, Output};

/// Apply the given endpoint to the given input and package the outcome.
///
/// This is the single entry point used by the serving layer: the
/// returned value distinguishes "no route" from "matched" before any
/// part of the deferred task has run.
pub fn apply_input<E: Endpoint>(endpoint: &E, input: Input) -> EndpointResult<E::Future> {
    match endpoint.apply(&input) {
        Some((remainder, future)) => {
            trace!(
                "endpoint matched: consumed {} segment(s), {} remaining",
                remainder.popped(),
                remainder.len(),
            );
            EndpointResult::Matched {
                remainder,
                task: TaskState::new(future),
            }
        }
        None => {
            trace!("endpoint did not match {:?}", input);
            EndpointResult::NotMatched
        }
    }
}

/// The outcome of applying one endpoint to one input.
pub enum EndpointResult<F: Future<Error = Error>> {
    /// The endpoint did not accept the input.
    NotMatched,
    /// The endpoint matched, consuming a prefix of the path.
    Matched {
        /// The cursor left over after the match.
        remainder: Input,
        /// The not-yet-forced task computing the extracted values.
        task: TaskState<F>,
    },
}

impl<F: Future<Error = Error>> fmt::Debug for EndpointResult<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EndpointResult::NotMatched => f.write_str("NotMatched"),
            EndpointResult::Matched { ref remainder, .. } => f
                .debug_struct("Matched")
                .field("remainder", remainder)
                .finish(),
        }
    }
}

impl<F: Future<Error = Error>> EndpointResult<F> {
    /// Return `true` if the endpoint matched.
    pub fn is_matched(&self) -> bool {
        match *self {
            EndpointResult::Matched { .. } => true,
            EndpointResult::NotMatched => false,
        }
    }

    /// Return the post-match cursor, if the endpoint matched.
    pub fn remainder(&self) -> Option<&Input> {
        match *self {
            EndpointResult::Matched { ref remainder, .. } => Some(remainder),
            EndpointResult::NotMatched => None,
        }
    }

    /// Block until the task resolves and return the output envelope.
    ///
    /// Returns `None` if the endpoint did not match, and `Some(Err(..))`
    /// if the computation failed or `timeout` elapsed first. Forcing is
    /// idempotent: the first call drives the task to completion and
    /// caches the outcome, later calls observe the cache and never
    /// re-run the computation.
    ///
    /// This blocks the calling thread and must only be used from tests.
    pub fn await_output(
        &mut self,
        timeout: Option<Duration>,
    ) -> Option<Result<Output<<F::Item as IntoOutput>::Payload>, Error>>
    where
        F::Item: IntoOutput + Clone,
    {
        let task = match *self {
            EndpointResult::Matched { ref mut task, .. } => task,
            EndpointResult::NotMatched => return None,
        };
        Some(match task.wait(timeout) {
            Ok(outcome) => match *outcome {
                Ok(ref item) => Ok(item.clone().into_output()),
                Err(ref err) => Err(err.clone()),
            },
            Err(err) => Err(err),
        })
    }

    /// Like `await_output`, but panics on a failed computation instead
    /// of wrapping the failure.
    pub fn await_output_unsafe(
        &mut self,
        timeout: Option<Duration>,
    ) -> Option<Output<<F::Item as IntoOutput>::Payload>>
    where
        F::Item: IntoOutput + Clone,
    {
        self.await_output(timeout).map(|res| match res {
            Ok(output) => output,
            Err(err) => panic!("the task was rejected: {}", err),
        })
    }

    /// Block until the task resolves and unwrap the envelope down to
    /// its payload.
    ///
    /// Fails with a `NotPresent` error if the envelope carries no
    /// payload. See `await_output` for the full contract.
    pub fn await_value(
        &mut self,
        timeout: Option<Duration>,
    ) -> Option<Result<<F::Item as IntoOutput>::Payload, Error>>
    where
        F::Item: IntoOutput + Clone,
    {
        self.await_output(timeout).map(|res| {
            res.and_then(|output| {
                output
                    .into_payload()
                    .ok_or_else(|| NotPresent::new("the output has no payload").into())
            })
        })
    }

    /// Like `await_value`, but panics on a failed computation instead
    /// of wrapping the failure.
    pub fn await_value_unsafe(
        &mut self,
        timeout: Option<Duration>,
    ) -> Option<<F::Item as IntoOutput>::Payload>
    where
        F::Item: IntoOutput + Clone,
    {
        self.await_value(timeout).map(|res| match res {
            Ok(value) => value,
            Err(err) => panic!("the task was rejected: {}", err),
        })
    }
}

/// The state machine local to a single deferred task:
/// in-flight, then resolved to a success or a failure.
pub struct TaskState<F: Future> {
    state: State<F>,
}

enum State<F: Future> {
    InFlight(Spawn<F>),
    Done(Result<F::Item, Error>),
}

impl<F: Future<Error = Error>> TaskState<F> {
    fn new(future: F) -> TaskState<F> {
        TaskState {
            state: State::InFlight(executor::spawn(future)),
        }
    }

    /// Drive the task to completion, reusing the cached outcome on
    /// later calls. A timed-out wait returns an error without caching,
    /// so the task stays in flight and is never cancelled.
    fn wait(&mut self, timeout: Option<Duration>) -> Result<&Result<F::Item, Error>, Error> {
        if let State::InFlight(ref mut spawn) = self.state {
            match block_on(spawn, timeout) {
                Some(outcome) => {
                    let disposition = if outcome.is_ok() { "success" } else { "failure" };
                    trace!("task resolved ({})", disposition);
                    self.state = State::Done(outcome);
                }
                None => return Err(WaitTimedOut::new().into()),
            }
        }
        match self.state {
            State::Done(ref outcome) => Ok(outcome),
            State::InFlight(..) => unreachable!(),
        }
    }
}

impl<F: Future> fmt::Debug for TaskState<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            State::InFlight(..) => f.write_str("InFlight"),
            State::Done(..) => f.write_str("Done"),
        }
    }
}
