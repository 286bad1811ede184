//! Components for tracking the unconsumed portion of a request path.

use std::cmp;
use std::fmt;
use std::sync::Arc;

use http::Request;

/// An immutable cursor over the path segments of an incoming request.
///
/// An `Input` is created once per request and threaded through the
/// endpoints during routing. Endpoints never mutate it in place: every
/// transition produces a new `Input` whose view of the path has shrunk.
/// The request and the segment storage are shared, so cloning is cheap.
#[derive(Clone)]
pub struct Input {
    request: Arc<Request<()>>,
    segments: Arc<[String]>,
    pos: usize,
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("uri", &self.request.uri())
            .field("remaining", &&self.segments[self.pos..])
            .finish()
    }
}

impl Input {
    /// Create an `Input` from the given request.
    ///
    /// The request path is split on `/` and the single empty segment
    /// produced by the leading slash is discarded. Segment order is
    /// preserved and no decoding is applied.
    pub fn new(request: Request<()>) -> Input {
        let segments: Vec<String> = {
            let mut path = request.uri().path();
            if path.starts_with('/') {
                path = &path[1..];
            }
            if path.is_empty() {
                Vec::new()
            } else {
                path.split('/').map(String::from).collect()
            }
        };
        Input {
            request: Arc::new(request),
            segments: segments.into(),
            pos: 0,
        }
    }

    /// Return the reference to the underlying request.
    pub fn request(&self) -> &Request<()> {
        &self.request
    }

    /// Return the first unconsumed segment, if any.
    pub fn head_option(&self) -> Option<&str> {
        self.segments.get(self.pos).map(|s| s.as_str())
    }

    /// Return a new `Input` with the first `n` segments removed.
    ///
    /// Dropping past the end saturates at the empty path.
    pub fn drop_front(&self, n: usize) -> Input {
        Input {
            request: self.request.clone(),
            segments: self.segments.clone(),
            pos: cmp::min(self.pos.saturating_add(n), self.segments.len()),
        }
    }

    /// Return `true` if no segments remain.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.segments.len()
    }

    /// Return the number of remaining segments.
    pub fn len(&self) -> usize {
        self.segments.len() - self.pos
    }

    /// Return the number of segments already consumed.
    pub fn popped(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Request;

    fn input(uri: &str) -> Input {
        let mut request = Request::new(());
        *request.uri_mut() = uri.parse().unwrap();
        Input::new(request)
    }

    #[test]
    fn test_root_path_has_no_segments() {
        let input = input("/");
        assert!(input.is_empty());
        assert_eq!(input.len(), 0);
        assert_eq!(input.head_option(), None);
    }

    #[test]
    fn test_segments_in_order() {
        let input = input("/api/v1/posts");
        assert_eq!(input.len(), 3);
        assert_eq!(input.head_option(), Some("api"));

        let input = input.drop_front(1);
        assert_eq!(input.head_option(), Some("v1"));
        assert_eq!(input.popped(), 1);

        let input = input.drop_front(2);
        assert!(input.is_empty());
        assert_eq!(input.head_option(), None);
    }

    #[test]
    fn test_drop_front_saturates() {
        let input = input("/foo/bar");
        let dropped = input.drop_front(10);
        assert!(dropped.is_empty());
        assert_eq!(dropped.len(), 0);

        // over-dropping an exhausted cursor is still a no-op
        assert!(dropped.drop_front(1).is_empty());
    }

    #[test]
    fn test_transitions_do_not_affect_the_source() {
        let input = input("/foo/bar");
        let _ = input.drop_front(1);
        assert_eq!(input.len(), 2);
        assert_eq!(input.head_option(), Some("foo"));
    }
}
