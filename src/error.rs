use std::fmt;

/// Represents errors that can occur when inserting a new route.
///
/// ```
/// use pathmux::{InsertError, Router};
///
/// let mut router = Router::new();
/// router.insert("/users/:id", "user").unwrap();
///
/// // redundant slashes are normalized away before comparing
/// assert_eq!(
///     router.insert("//users//:id/", "other"),
///     Err(InsertError::Duplicate { with: "/users/:id".into() })
/// );
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum InsertError {
    /// Attempted to insert a route whose normalized pattern is already registered.
    Duplicate {
        /// The normalized pattern of the existing route.
        with: String,
    },
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { with } => {
                write!(f, "insertion failed, route is already registered: {with}")
            }
        }
    }
}

impl std::error::Error for InsertError {}

/// A failed match attempt.
///
/// ```
/// use pathmux::{MatchError, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.insert("/home", "Welcome!")?;
/// router.insert("/blog", "Our blog.")?;
///
/// // no routes match
/// if let Err(err) = router.at("/foobar") {
///     assert_eq!(err, MatchError::NotFound);
/// }
/// # Ok(())
/// # }
/// ```
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchError {
    /// No matching route was found.
    NotFound,
    /// A route matched the path but its parameters could not be extracted.
    ///
    /// This indicates a bug in the router rather than a bad request.
    Inconsistent {
        /// The normalized pattern of the offending route.
        route: String,
    },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "matching route not found"),
            Self::Inconsistent { route } => write!(
                f,
                "route {route} matched but its parameters could not be extracted"
            ),
        }
    }
}

impl std::error::Error for MatchError {}

/// The path does not match the pattern parameters were extracted against.
///
/// ```
/// use pathmux::{NoMatch, Pattern};
///
/// let pattern = Pattern::new("/:user/:repo");
/// assert_eq!(pattern.extract("/alice").unwrap_err(), NoMatch);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NoMatch;

impl fmt::Display for NoMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the given path does not match the pattern")
    }
}

impl std::error::Error for NoMatch {}
