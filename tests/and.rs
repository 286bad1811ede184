use waypoint::endpoint::{abort_with, just, EndpointExt};
use waypoint::endpoints::path::{param, path};
use waypoint::error::BadRequest;
use waypoint::local;

#[test]
fn test_and_yields_the_pair() {
    let endpoint = just("Hello").and(just("world"));
    let mut result = local::get("/").apply(&endpoint);
    assert_eq!(result.await_value_unsafe(None), Some(("Hello", "world")));
}

#[test]
fn test_and_remainder_is_what_both_sides_left() {
    let endpoint = path("a").and(path("b"));
    let result = local::get("/a/b/c").apply(&endpoint);

    assert!(result.is_matched());
    let remainder = result.remainder().unwrap();
    assert_eq!(remainder.len(), 1);
    assert_eq!(remainder.head_option(), Some("c"));
}

#[test]
fn test_and_requires_both_sides() {
    let endpoint = path("a").and(path("b"));
    assert!(!local::get("/a/c").apply(&endpoint).is_matched());
    assert!(!local::get("/a").apply(&endpoint).is_matched());
}

#[test]
fn test_chained_and_stays_flat() {
    let endpoint = param::<u32>().and(param::<u32>()).and(param::<u32>());
    let mut result = local::get("/1/2/3").apply(&endpoint);
    assert_eq!(result.await_value_unsafe(None), Some((1, 2, 3)));
}

#[test]
fn test_and_does_not_mask_a_failure() {
    let endpoint = just(1u32).and(abort_with::<u32>(BadRequest::new("boom")));
    let mut result = local::get("/").apply(&endpoint);

    assert!(result.is_matched());
    let err = result.await_value(None).unwrap().unwrap_err();
    assert!(err.is::<BadRequest>());
}
