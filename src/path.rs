//! Deep path parsing and resolution.
//!
//! A deep path is a root key followed by bracketed segments:
//! `root[key1][key2]`. The root is everything before the first `[`. Each
//! segment descends one level into an object (by key) or an array (by
//! decimal index).
//!
//! The segments are read by a two-state machine:
//!
//! | state       | `[`           | `]`               | other char        |
//! |-------------|---------------|-------------------|-------------------|
//! | `Outside`   | start capture | error             | error             |
//! | `Capturing` | error         | emit key, go out  | append to key     |
//!
//! Reaching the end of the path while `Capturing` is an error as well.
//! Positions in errors are 0-based character offsets into the whole path.
//!
//! ## Examples
//!
//! ```rust
//! use parameter_bag::path::split;
//!
//! let (root, keys) = split("db[replicas][0]").unwrap();
//! assert_eq!(root, "db");
//! assert_eq!(keys, vec!["replicas", "0"]);
//!
//! assert!(split("db[replicas").is_err());
//! ```

use crate::{Error, ParamMap, Result, Value};

/// Scanner state while walking the segment part of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Outside,
    Capturing(String),
}

/// What the scanner produced for one character.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Segment(String),
}

impl State {
    fn feed(&mut self, c: char, position: usize) -> Result<Step> {
        match (std::mem::replace(self, State::Outside), c) {
            (State::Outside, '[') => {
                *self = State::Capturing(String::new());
                Ok(Step::Continue)
            }
            (State::Outside, other) => Err(Error::unexpected_character(other, position)),
            (State::Capturing(_), '[') => Err(Error::unexpected_character('[', position)),
            (State::Capturing(key), ']') => Ok(Step::Segment(key)),
            (State::Capturing(mut key), other) => {
                key.push(other);
                *self = State::Capturing(key);
                Ok(Step::Continue)
            }
        }
    }

    fn finish(&self, position: usize) -> Result<()> {
        match self {
            State::Outside => Ok(()),
            State::Capturing(_) => Err(Error::unterminated_path(position)),
        }
    }
}

/// Walks the segments of `rest`, calling `on_segment` for every closed key.
///
/// `offset` is the character position of the first character of `rest` in
/// the full path. Stops early, without reporting later syntax errors, as soon
/// as `on_segment` returns `false`.
fn scan<F>(rest: &str, offset: usize, mut on_segment: F) -> Result<bool>
where
    F: FnMut(String) -> bool,
{
    let mut state = State::Outside;
    let mut position = offset;
    for c in rest.chars() {
        if let Step::Segment(key) = state.feed(c, position)? {
            if !on_segment(key) {
                return Ok(false);
            }
        }
        position += 1;
    }
    state.finish(position)?;
    Ok(true)
}

/// Separates the root from the bracketed remainder, if any.
///
/// A `]` can never appear before the first `[` of a deep path.
fn split_root(path: &str) -> Result<(&str, Option<&str>)> {
    let (root, rest) = match path.find('[') {
        Some(pos) => {
            let (root, rest) = path.split_at(pos);
            (root, Some(rest))
        }
        None => (path, None),
    };
    if let Some(idx) = root.find(']') {
        return Err(Error::unexpected_character(']', root[..idx].chars().count()));
    }
    Ok((root, rest))
}

/// Splits a deep path into its root and segment keys, validating the whole path.
///
/// A path with no `[` is all root and has no segments, though it still may
/// not contain a stray `]`.
///
/// # Errors
///
/// Returns [`Error::UnexpectedCharacter`] or [`Error::UnterminatedPath`] for
/// malformed bracket syntax.
///
/// # Examples
///
/// ```rust
/// use parameter_bag::path::split;
///
/// assert_eq!(split("plain").unwrap(), ("plain", vec![]));
/// assert_eq!(split("a[]").unwrap(), ("a", vec![String::new()]));
///
/// let err = split("a[b]c").unwrap_err();
/// assert_eq!(err.position(), Some(4));
/// ```
pub fn split(path: &str) -> Result<(&str, Vec<String>)> {
    let (root, rest) = split_root(path)?;
    let Some(rest) = rest else {
        return Ok((root, Vec::new()));
    };
    let mut keys = Vec::new();
    scan(rest, root.chars().count(), |key| {
        keys.push(key);
        true
    })?;
    Ok((root, keys))
}

/// Resolves a deep path against `map`.
///
/// Returns `Ok(None)` when the root is missing, when an intermediate value is
/// not an object or array, or when a segment key is absent. Resolution stops
/// at the first miss, so syntax errors further along the path are only
/// reported when every earlier segment resolved.
///
/// # Errors
///
/// Returns a path error for malformed bracket syntax reached during
/// resolution.
///
/// # Examples
///
/// ```rust
/// use parameter_bag::{params, path::resolve, Value};
///
/// let value = params!({ "a": { "b": [10, 20] } });
/// let map = value.as_object().unwrap();
///
/// assert_eq!(resolve(map, "a[b][1]").unwrap(), Some(&Value::from(20)));
/// assert_eq!(resolve(map, "a[x][1]").unwrap(), None);
/// assert!(resolve(map, "a[b").is_err());
/// ```
pub fn resolve<'a>(map: &'a ParamMap, path: &str) -> Result<Option<&'a Value>> {
    let (root, rest) = split_root(path).inspect_err(|err| {
        tracing::debug!(path, position = ?err.position(), "rejected malformed deep path");
    })?;
    let Some(rest) = rest else {
        return Ok(map.get(root));
    };
    let Some(mut current) = map.get(root) else {
        tracing::trace!(path, root, "deep lookup root missing");
        return Ok(None);
    };

    let completed = scan(rest, root.chars().count(), |key| match current.child(&key) {
        Some(next) => {
            current = next;
            true
        }
        None => {
            tracing::trace!(path, key = %key, "deep lookup stopped early");
            false
        }
    })
    .inspect_err(|err| {
        tracing::debug!(path, position = ?err.position(), "rejected malformed deep path");
    })?;

    Ok(completed.then_some(current))
}
