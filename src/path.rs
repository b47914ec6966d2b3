/// Returns the canonical form of `path`.
///
/// Empty segments and `.`/`..` elements are dropped and the remaining
/// segments are joined by a single `/`, with a leading `/`. Unlike
/// `path.Clean`, a `..` element is discarded rather than resolved against
/// the segment before it:
///
/// ```rust
/// use pathmux::normalize;
///
/// assert_eq!(normalize("/a//////b"), "/a/b");
/// assert_eq!(normalize("/a/../b"), "/a/b");
/// assert_eq!(normalize("./.."), "/");
/// ```
///
/// The result never has a trailing slash (except for the root) and
/// `normalize(normalize(p)) == normalize(p)` holds for every input.
pub fn normalize(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len() + 1);

    for segment in path.split('/') {
        if is_discarded(segment) {
            continue;
        }

        normalized.push('/');
        normalized.push_str(segment);
    }

    if normalized.is_empty() {
        normalized.push('/');
    }

    normalized
}

// Segments that never survive normalization.
fn is_discarded(segment: &str) -> bool {
    matches!(segment, "" | "." | "..")
}

/// Splits a normalized path into its segments.
///
/// The root path has no segments.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    rest.split('/').filter(move |_| !rest.is_empty())
}
