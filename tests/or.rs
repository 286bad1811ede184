use waypoint::endpoint::{just, EndpointExt};
use waypoint::endpoints::path::path;
use waypoint::local;

#[test]
fn test_or_selects_the_matching_branch() {
    let endpoint = path("foo").map(|| "foo").or(path("bar").map(|| "bar"));

    let mut result = local::get("/foo").apply(&endpoint);
    assert_eq!(result.await_value_unsafe(None), Some("foo"));

    let mut result = local::get("/bar").apply(&endpoint);
    assert_eq!(result.await_value_unsafe(None), Some("bar"));
}

#[test]
fn test_or_prefers_the_longest_match() {
    let deep = path("foo").and(path("bar")).map(|| "foobar");
    let shallow = path("foo").map(|| "foo");

    // the branch consuming more segments wins regardless of the
    // operand order
    let mut result = local::get("/foo/bar").apply(&deep.clone().or(shallow.clone()));
    assert_eq!(result.await_value_unsafe(None), Some("foobar"));

    let mut result = local::get("/foo/bar").apply(&shallow.or(deep));
    assert_eq!(result.await_value_unsafe(None), Some("foobar"));
}

#[test]
fn test_or_is_left_biased_on_ties() {
    let endpoint = path("p").map(|| "left").or(path("p").map(|| "right"));
    let mut result = local::get("/p").apply(&endpoint);
    assert_eq!(result.await_value_unsafe(None), Some("left"));

    let endpoint = path("p").map(|| "right").or(path("p").map(|| "left"));
    let mut result = local::get("/p").apply(&endpoint);
    assert_eq!(result.await_value_unsafe(None), Some("right"));
}

#[test]
fn test_or_zero_consumption_tie_resolves_left() {
    let endpoint = just("x").or(just("y"));
    let mut result = local::get("/whatever").apply(&endpoint);
    assert_eq!(result.await_value_unsafe(None), Some("x"));
}

#[test]
fn test_chained_or_selects_the_single_longest_match() {
    let a = path("x").map(|| "one");
    let b = path("x").and(path("y")).map(|| "two");
    let c = path("x").and(path("y")).and(path("z")).map(|| "three");

    let mut result = local::get("/x/y/z").apply(&a.or(b).or(c));
    assert_eq!(result.await_value_unsafe(None), Some("three"));
}

#[test]
fn test_or_not_matched_when_neither_accepts() {
    let endpoint = path("foo").map(|| 1).or(path("bar").map(|| 2));
    let mut result = local::get("/baz").apply(&endpoint);

    assert!(!result.is_matched());
    assert!(result.remainder().is_none());
    assert!(result.await_value(None).is_none());
}
