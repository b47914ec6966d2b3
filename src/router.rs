use crate::error::{InsertError, MatchError};
use crate::params::Params;
use crate::path::normalize;
use crate::route::{Pattern, Route};

use std::fmt;

/// An ordered table of routes.
///
/// Routes are tried in the order they were inserted and the first one that
/// matches wins, so more specific patterns must be inserted before more
/// general ones that would otherwise shadow them:
///
/// ```rust
/// use pathmux::Router;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.insert("/static", "assets")?;
/// router.insert("/:username", "profile")?;
///
/// assert_eq!(*router.at("/static")?.value, "assets");
///
/// let matched = router.at("/alice")?;
/// assert_eq!(*matched.value, "profile");
/// assert_eq!(matched.params.get("username"), Some("alice"));
/// # Ok(())
/// # }
/// ```
///
/// Inserting takes `&mut self` while matching only needs `&self`: build the
/// router during startup, then share it (for example behind an `Arc`) with
/// the tasks serving requests. A router that must change after startup has
/// to be wrapped in a reader/writer lock by its owner.
#[derive(Clone)]
pub struct Router<T> {
    routes: Vec<Route<T>>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<T> Router<T> {
    /// Construct a new, empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route into the router.
    ///
    /// The pattern is normalized first; inserting a pattern whose normalized
    /// text is already registered fails with [`InsertError::Duplicate`].
    ///
    /// ```rust
    /// # use pathmux::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.insert("/home", "Welcome!")?;
    /// router.insert("/users/:id", "A User")?;
    /// assert!(router.insert("/users//:id", "Again").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, pattern: impl AsRef<str>, value: T) -> Result<(), InsertError> {
        let pattern = Pattern::new(pattern);

        if let Some(existing) = self.find_route(&pattern) {
            debug!("rejected duplicate route {pattern}");
            return Err(InsertError::Duplicate {
                with: existing.pattern.as_str().to_owned(),
            });
        }

        debug!("registered route {pattern}");
        self.routes.push(Route { pattern, value });
        Ok(())
    }

    /// Tries to match a path against the registered routes.
    ///
    /// The path is normalized before matching. On success, returns the value
    /// of the first matching route along with the parameters it captured.
    ///
    /// ```rust
    /// # use pathmux::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.insert("/:user/:repo", "repo")?;
    ///
    /// let matched = router.at("/alice//project1/")?;
    /// assert_eq!(*matched.value, "repo");
    /// assert_eq!(matched.params.get("user"), Some("alice"));
    /// assert_eq!(matched.params.get("repo"), Some("project1"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn at(&self, path: &str) -> Result<Match<&T>, MatchError> {
        let (index, params) = self.lookup(path)?;
        Ok(Match {
            value: &self.routes[index].value,
            params,
        })
    }

    /// Tries to match a path against the registered routes, returning a
    /// mutable reference to the matched value.
    ///
    /// ```rust
    /// # use pathmux::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.insert("/:user", 0)?;
    ///
    /// *router.at_mut("/alice")?.value += 1;
    /// assert_eq!(*router.at("/bob")?.value, 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn at_mut(&mut self, path: &str) -> Result<Match<&mut T>, MatchError> {
        let (index, params) = self.lookup(path)?;
        Ok(Match {
            value: &mut self.routes[index].value,
            params,
        })
    }

    /// Appends all routes of another router, preserving their order.
    ///
    /// If any of them is already registered here, or registered twice in
    /// `other`, nothing is merged and the first collision is returned.
    ///
    /// ```rust
    /// # use pathmux::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut root = Router::new();
    /// root.insert("/home", "Welcome!")?;
    ///
    /// let mut child = Router::new();
    /// child.insert("/users/:id", "A User")?;
    ///
    /// root.merge(child)?;
    /// assert!(root.at("/users/1").is_ok());
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(&mut self, other: Router<T>) -> Result<(), InsertError> {
        for (i, route) in other.routes.iter().enumerate() {
            let earlier = other.routes[..i].iter().find(|r| r.pattern == route.pattern);
            if let Some(existing) = self.find_route(&route.pattern).or(earlier) {
                debug!("rejected merge, duplicate route {}", route.pattern);
                return Err(InsertError::Duplicate {
                    with: existing.pattern.as_str().to_owned(),
                });
            }
        }

        for route in other.routes {
            debug!("registered route {}", route.pattern);
            self.routes.push(route);
        }

        Ok(())
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns an iterator over the normalized patterns and their values, in
    /// registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.routes
            .iter()
            .map(|route| (route.pattern.as_str(), &route.value))
    }

    fn find_route(&self, pattern: &Pattern) -> Option<&Route<T>> {
        self.routes.iter().find(|route| route.pattern == *pattern)
    }

    // Finds the first route matching `path` and extracts its parameters.
    fn lookup(&self, path: &str) -> Result<(usize, Params), MatchError> {
        let path = normalize(path);

        let Some(index) = self
            .routes
            .iter()
            .position(|route| route.pattern.matches(&path))
        else {
            trace!("no route matched {path}");
            return Err(MatchError::NotFound);
        };

        let pattern = &self.routes[index].pattern;
        match pattern.extract(&path) {
            Ok(params) => {
                trace!("{path} matched {pattern} with {params:?}");
                Ok((index, params))
            }
            Err(err) => {
                error!("{path} matched {pattern} but extraction failed: {err}");
                Err(MatchError::Inconsistent {
                    route: pattern.as_str().to_owned(),
                })
            }
        }
    }
}

impl<T> fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field(
                "routes",
                &self.routes.iter().map(|r| r.pattern.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A successful match consisting of the registered value and the captured
/// path parameters.
#[derive(Debug)]
pub struct Match<V> {
    /// The value stored under the matched route.
    pub value: V,
    /// The route parameters. See [parameters](crate::Params) for more details.
    pub params: Params,
}
