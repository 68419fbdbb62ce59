//! Lookup options for parameter access.
//!
//! Every accessor on [`ParameterBag`](crate::ParameterBag) that takes a path
//! also takes a [`PathMode`], which decides whether brackets in the path are
//! plain key characters or nested segments.
//!
//! ## Examples
//!
//! ```rust
//! use parameter_bag::{params, ParameterBag, PathMode, Value};
//!
//! let mut bag = ParameterBag::try_from(params!({ "db": { "host": "localhost" } })).unwrap();
//! bag.set("db[host]", "literal");
//!
//! assert_eq!(
//!     bag.lookup("db[host]", PathMode::Shallow).unwrap(),
//!     Some(&Value::from("literal"))
//! );
//! assert_eq!(
//!     bag.lookup("db[host]", PathMode::Deep).unwrap(),
//!     Some(&Value::from("localhost"))
//! );
//! ```

/// How a lookup path is interpreted.
///
/// - **Shallow**: The path is a single literal key (default)
/// - **Deep**: `root[key][key]...` descends into nested objects and arrays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PathMode {
    #[default]
    Shallow,
    Deep,
}

impl PathMode {
    /// Returns `true` for [`PathMode::Deep`].
    #[must_use]
    pub const fn is_deep(self) -> bool {
        matches!(self, PathMode::Deep)
    }
}

impl From<bool> for PathMode {
    fn from(deep: bool) -> Self {
        if deep {
            PathMode::Deep
        } else {
            PathMode::Shallow
        }
    }
}
