//! A minimal URL path router.
//!
//! ```rust
//! use pathmux::Router;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.insert("/", "Welcome!")?;
//! router.insert("/:username", "A User")?;
//! router.insert("/:username//////:repo", "A Repository")?;
//!
//! let matched = router.at("/alice/project1")?;
//! assert_eq!(*matched.value, "A Repository");
//! assert_eq!(matched.params.get("username"), Some("alice"));
//! assert_eq!(matched.params.get("repo"), Some("project1"));
//! # Ok(())
//! # }
//! ```
//!
//! # Patterns
//!
//! A pattern is a list of `/`-separated segments. A segment beginning with
//! `:` is a named parameter that matches exactly one path segment:
//!
//! ```text
//! Pattern: /users/:id
//!
//! /users/1              match: id="1"
//! /users/1/             match: id="1"
//! /users                no match
//! /users/1/posts        no match
//! ```
//!
//! Every other segment is matched literally and case-sensitively.
//!
//! # Normalization
//!
//! Both patterns and request paths are [normalized](normalize) before they
//! are compared: empty segments as well as `.` and `..` elements are
//! dropped, so `/:username//////:repo` is registered as `/:username/:repo`
//! and a request for `/a/../b` is matched as `/a/b`.
//!
//! # Priority
//!
//! Routes are tried in the order they were inserted and the first match
//! wins. Inserting the same normalized pattern twice is an error.
//!
//! # hyper
//!
//! With the `hyper` feature enabled, a router of boxed handlers can be
//! turned into a `hyper` service, see `RouterService`. Request paths are
//! percent-decoded before they are matched.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod error;
mod params;
mod path;
mod route;
mod router;
#[cfg(feature = "hyper")]
mod service;

pub use error::{InsertError, MatchError, NoMatch};
pub use params::{Params, ParamsIter};
pub use path::normalize;
pub use route::Pattern;
pub use router::{Match, Router};

#[cfg(feature = "hyper")]
pub use service::{BoxedHandler, Handler, RouterService};
