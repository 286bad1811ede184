use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::{future, Async, Future, Poll};
use matches::assert_matches;
use waypoint::endpoint::{abort_with, just, lazy, EndpointExt};
use waypoint::endpoints::path::path;
use waypoint::error::{BadRequest, Error, NotPresent, WaitTimedOut};
use waypoint::local;

#[test]
fn test_forcing_is_idempotent() {
    let _ = pretty_env_logger::try_init();

    let count = Arc::new(AtomicUsize::new(0));
    let endpoint = {
        let count = count.clone();
        lazy(move || {
            let count = count.clone();
            future::lazy(move || {
                count.fetch_add(1, Ordering::SeqCst);
                Ok::<_, Error>(42u32)
            })
        })
    };

    let mut result = local::get("/").apply(&endpoint);
    assert_eq!(result.await_value_unsafe(None), Some(42));
    assert_eq!(result.await_value_unsafe(None), Some(42));
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

struct NeverReady;

impl Future for NeverReady {
    type Item = u32;
    type Error = Error;

    fn poll(&mut self) -> Poll<Self::Item, Self::Error> {
        Ok(Async::NotReady)
    }
}

#[test]
fn test_timed_out_wait_is_reported_and_not_cached() {
    let endpoint = lazy(|| NeverReady);
    let mut result = local::get("/").apply(&endpoint);

    let err = result
        .await_value(Some(Duration::from_millis(20)))
        .unwrap()
        .unwrap_err();
    assert!(err.is::<WaitTimedOut>());

    // the task is still in flight; waiting again times out the same way
    let err = result
        .await_value(Some(Duration::from_millis(20)))
        .unwrap()
        .unwrap_err();
    assert!(err.is::<WaitTimedOut>());
}

#[test]
fn test_no_route_and_failure_are_distinguishable() {
    let not_matched = local::get("/nope").apply(&path("yes").map(|| 1u32));
    assert!(!not_matched.is_matched());

    let mut failed = local::get("/").apply(&abort_with::<u32>(BadRequest::new("bad")));
    assert!(failed.is_matched());
    assert_matches!(failed.await_value(None), Some(Err(..)));
}

#[test]
fn test_await_output_wraps_the_envelope() {
    let mut result = local::get("/").apply(&just("hi"));
    let output = result.await_output_unsafe(None).unwrap();

    assert_eq!(output.status(), http::StatusCode::OK);
    assert_eq!(output.into_payload(), Some("hi"));
}

#[test]
fn test_empty_envelope_has_no_payload() {
    let endpoint = path("ping");
    let mut result = local::get("/ping").apply(&endpoint);

    let output = result.await_output_unsafe(None).unwrap();
    assert_eq!(output.status(), http::StatusCode::NO_CONTENT);

    let err = result.await_value(None).unwrap().unwrap_err();
    assert!(err.is::<NotPresent>());
}

#[test]
#[should_panic(expected = "the task was rejected")]
fn test_unsafe_variant_panics_on_failure() {
    let mut result = local::get("/").apply(&abort_with::<u32>(BadRequest::new("bad")));
    let _ = result.await_value_unsafe(None);
}

#[test]
fn test_builder_carries_method_and_headers() {
    let request = local::LocalRequest::new()
        .method("POST")
        .uri("/submit")
        .header("content-type", "text/plain");

    let mut result = request.apply(&path("submit").map(|| "ok"));
    assert_eq!(result.await_value_unsafe(None), Some("ok"));
}
