use matches::assert_matches;
use waypoint::endpoint::EndpointExt;
use waypoint::endpoints::path::{param, path};
use waypoint::error::BadRequest;
use waypoint::local;

#[test]
fn test_route_extracts_the_typed_segment() {
    let endpoint = path("users").and(param::<u32>());
    let mut result = local::get("/users/42").apply(&endpoint);

    assert!(result.is_matched());
    assert!(result.remainder().unwrap().is_empty());
    assert_matches!(result.await_value(None), Some(Ok(42)));
}

#[test]
fn test_route_rejects_a_different_prefix() {
    let endpoint = path("users").and(param::<u32>());
    let result = local::get("/posts/42").apply(&endpoint);

    assert!(!result.is_matched());
    assert!(result.remainder().is_none());
}

#[test]
fn test_undecodable_segment_is_a_computation_failure() {
    let endpoint = path("users").and(param::<u32>());
    let mut result = local::get("/users/alice").apply(&endpoint);

    // the route exists; only the decoding fails
    assert!(result.is_matched());
    let err = result.await_value(None).unwrap().unwrap_err();
    assert!(err.is::<BadRequest>());
}

#[test]
fn test_multi_component_literal() {
    let endpoint = path("api/v1").map(|| "ok");

    let mut result = local::get("/api/v1").apply(&endpoint);
    assert_eq!(result.await_value_unsafe(None), Some("ok"));

    assert!(!local::get("/api/v2").apply(&endpoint).is_matched());
    assert!(!local::get("/api").apply(&endpoint).is_matched());
}

#[test]
fn test_apply_is_deterministic() {
    let endpoint = path("users").and(param::<u32>());
    for _ in 0..2 {
        let mut result = local::get("/users/7/posts").apply(&endpoint);
        assert!(result.is_matched());

        let remainder = result.remainder().unwrap();
        assert_eq!(remainder.len(), 1);
        assert_eq!(remainder.head_option(), Some("posts"));
        assert_eq!(result.await_value_unsafe(None), Some(7));
    }
}
