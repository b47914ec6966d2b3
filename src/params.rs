use std::{fmt, mem, slice};

/// A single path parameter, consisting of a capture key and the segment it
/// captured.
#[derive(PartialEq, Eq, Ord, PartialOrd, Default, Clone)]
struct Param {
    key: String,
    value: String,
}

impl Param {
    const EMPTY: Param = Param {
        key: String::new(),
        value: String::new(),
    };
}

/// The parameters captured by a route match.
///
/// Every capture key appears at most once. Parameters are produced fresh
/// for each match and owned by the caller.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut router = pathmux::Router::new();
/// # router.insert("/:user/:repo", true)?;
/// let matched = router.at("/alice/project1")?;
///
/// // Iterate through the keys and values.
/// for (key, value) in matched.params.iter() {
///     println!("key: {key}, value: {value}");
/// }
///
/// // Get a specific value by name.
/// assert_eq!(matched.params.get("user"), Some("alice"));
/// assert_eq!(matched.params.get("repo"), Some("project1"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Params {
    kind: ParamsKind,
}

// Most routes have a small number of captures, so we can avoid
// a second allocation for the list itself in the common case.
const SMALL: usize = 3;

#[derive(Clone)]
enum ParamsKind {
    Small([Param; SMALL], usize),
    Large(Vec<Param>),
}

impl Params {
    pub(crate) fn new() -> Self {
        Self {
            kind: ParamsKind::Small([Param::EMPTY; SMALL], 0),
        }
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        match self.kind {
            ParamsKind::Small(_, len) => len,
            ParamsKind::Large(ref vec) => vec.len(),
        }
    }

    /// Returns `true` if there are no parameters in the list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value captured under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();
        self.slice()
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value.as_str())
    }

    /// Returns `true` if a value was captured under the given key.
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.get(key).is_some()
    }

    /// Returns an iterator over the parameters, in capture order.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter::new(self)
    }

    /// Records `value` under `key`, replacing any earlier value for the
    /// same key.
    pub(crate) fn insert(&mut self, key: &str, value: &str) {
        #[cold]
        fn drain_to_vec<T: Default>(len: usize, elem: T, arr: &mut [T; SMALL]) -> Vec<T> {
            let mut vec = Vec::with_capacity(len + 1);
            vec.extend(arr.iter_mut().map(mem::take));
            vec.push(elem);
            vec
        }

        if let Some(param) = self.slice_mut().iter_mut().find(|param| param.key == key) {
            param.value.clear();
            param.value.push_str(value);
            return;
        }

        let param = Param {
            key: key.to_owned(),
            value: value.to_owned(),
        };

        match &mut self.kind {
            ParamsKind::Small(arr, len) => {
                if *len == SMALL {
                    self.kind = ParamsKind::Large(drain_to_vec(*len, param, arr));
                    return;
                }

                arr[*len] = param;
                *len += 1;
            }
            ParamsKind::Large(vec) => vec.push(param),
        }
    }

    fn slice(&self) -> &[Param] {
        match &self.kind {
            ParamsKind::Small(arr, len) => &arr[..*len],
            ParamsKind::Large(vec) => vec,
        }
    }

    fn slice_mut(&mut self) -> &mut [Param] {
        match &mut self.kind {
            ParamsKind::Small(arr, len) => &mut arr[..*len],
            ParamsKind::Large(vec) => vec,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.slice() == other.slice()
    }
}

impl Eq for Params {}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'ps> IntoIterator for &'ps Params {
    type Item = (&'ps str, &'ps str);
    type IntoIter = ParamsIter<'ps>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the keys and values of a route's [parameters](crate::Params).
pub struct ParamsIter<'ps> {
    inner: slice::Iter<'ps, Param>,
}

impl<'ps> ParamsIter<'ps> {
    fn new(params: &'ps Params) -> Self {
        Self {
            inner: params.slice().iter(),
        }
    }
}

impl<'ps> Iterator for ParamsIter<'ps> {
    type Item = (&'ps str, &'ps str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|p| (p.key.as_str(), p.value.as_str()))
    }
}

impl ExactSizeIterator for ParamsIter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
