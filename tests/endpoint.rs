use futures::future;
use waypoint::endpoint::{apply_fn, endpoint, just, EndpointExt};
use waypoint::endpoints::path::{param, path};
use waypoint::error::Error;
use waypoint::local;
use waypoint::Input;

#[test]
fn test_apply_fn_is_the_universal_constructor() {
    // an endpoint which consumes one segment and yields its length
    let endpoint = apply_fn(|input: &Input| {
        let len = input.head_option()?.len();
        Some((input.drop_front(1), future::ok::<_, Error>((len,))))
    });

    let mut result = local::get("/hello").apply(&endpoint);
    assert_eq!(result.await_value_unsafe(None), Some(5));

    assert!(!local::get("/").apply(&endpoint).is_matched());
}

#[test]
fn test_into_endpoint_is_the_identity_for_endpoints() {
    let e = endpoint(just(1u8));
    let mut result = local::get("/").apply(&e);
    assert_eq!(result.await_value_unsafe(None), Some(1u8));
}

#[test]
fn test_endpoints_compose_behind_shared_pointers() {
    let shared = std::sync::Arc::new(path("v1").and(param::<u32>()));
    let mut result = local::get("/v1/9").apply(&shared);
    assert_eq!(result.await_value_unsafe(None), Some(9));
}

#[test]
fn test_debug_rendering_follows_the_operators() {
    let sequenced = path("users").and(param::<u32>());
    assert_eq!(format!("{:?}", sequenced), r#""users"/param"#);

    let alternated = path("a").or(path("b"));
    assert_eq!(format!("{:?}", alternated), r#"("a"|"b")"#);

    let merged = path("a").or_union(path("b"));
    assert_eq!(format!("{:?}", merged), r#"("a":+:"b")"#);

    // mapping keeps the diagnostic identity of its source
    let mapped = path("users").map(|| 0);
    assert_eq!(format!("{:?}", mapped), r#""users""#);
}
