use crate::error::NoMatch;
use crate::params::Params;
use crate::path::{normalize, segments};

use std::fmt;

/// Marks a segment as a named capture, e.g. `:user`.
const CAPTURE: char = ':';

/// A single segment of a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    /// Matches exactly this text.
    Literal(String),
    /// Matches any segment, binding it to the key.
    Capture(String),
}

impl Segment {
    fn parse(segment: &str) -> Segment {
        match segment.strip_prefix(CAPTURE) {
            Some(key) => Segment::Capture(key.to_owned()),
            None => Segment::Literal(segment.to_owned()),
        }
    }

    fn matches(&self, value: &str) -> bool {
        match self {
            Segment::Literal(literal) => literal == value,
            Segment::Capture(_) => true,
        }
    }
}

/// A normalized route template made of literal and capture segments.
///
/// A segment starting with `:` is a capture: it matches any single path
/// segment and binds it to the name that follows the colon. Every other
/// segment must match exactly, byte for byte.
///
/// ```rust
/// use pathmux::Pattern;
///
/// let pattern = Pattern::new("/users//:id/");
/// assert_eq!(pattern.as_str(), "/users/:id");
///
/// assert!(pattern.matches("/users/5"));
/// assert!(!pattern.matches("/Users/5"));
/// assert!(!pattern.matches("/users/5/posts"));
///
/// let params = pattern.extract("/users/5").unwrap();
/// assert_eq!(params.get("id"), Some("5"));
/// ```
///
/// Two patterns are equal when their normalized text is equal, so
/// `/:user/:repo` and `/:a/:b` are distinct patterns even though they
/// match the same paths.
#[derive(Clone)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Normalizes and parses a pattern.
    pub fn new(pattern: impl AsRef<str>) -> Pattern {
        let raw = normalize(pattern.as_ref());
        let segments = segments(&raw).map(Segment::parse).collect();
        Pattern { raw, segments }
    }

    /// Returns the normalized text of this pattern.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if `path` matches this pattern.
    ///
    /// `path` must already be [normalized](crate::normalize). A pattern only
    /// ever matches paths with the same number of segments.
    pub fn matches(&self, path: &str) -> bool {
        if segments(path).count() != self.segments.len() {
            return false;
        }

        self.segments
            .iter()
            .zip(segments(path))
            .all(|(segment, value)| segment.matches(value))
    }

    /// Extracts the captured parameters of `path`.
    ///
    /// `path` must already be [normalized](crate::normalize). If a capture
    /// name is used more than once, the value of the last occurrence wins.
    pub fn extract(&self, path: &str) -> Result<Params, NoMatch> {
        if !self.matches(path) {
            return Err(NoMatch);
        }

        let mut params = Params::new();
        for (segment, value) in self.segments.iter().zip(segments(path)) {
            if let Segment::Capture(key) = segment {
                params.insert(key, value);
            }
        }

        Ok(params)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.raw).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A registered pattern and the value it routes to.
#[derive(Clone, Debug)]
pub(crate) struct Route<T> {
    pub(crate) pattern: Pattern,
    pub(crate) value: T,
}
