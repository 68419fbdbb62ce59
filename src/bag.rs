//! The parameter bag container.
//!
//! [`ParameterBag`] owns an ordered map of string keys to [`Value`]s and layers
//! typed accessors on top of it. Writes are always shallow; reads can follow
//! bracketed deep paths when asked to with [`PathMode::Deep`].
//!
//! ## Examples
//!
//! ```rust
//! use parameter_bag::{params, ParameterBag, PathMode};
//!
//! let mut bag = ParameterBag::try_from(params!({
//!     "server": { "port": "8080/tcp", "name": "edge-01" },
//!     "debug": true
//! }))
//! .unwrap();
//!
//! assert_eq!(bag.get_int("server[port]", 0, PathMode::Deep).unwrap(), 8080);
//! assert_eq!(bag.get_alpha("server[name]", "", PathMode::Deep).unwrap(), "edge");
//! assert_eq!(bag.get_int("missing", 3, PathMode::Shallow).unwrap(), 3);
//!
//! bag.remove("debug");
//! assert_eq!(bag.keys(), vec!["server"]);
//! ```

use crate::coerce::{filter_alnum, filter_alpha, filter_digits, value_to_int};
use crate::{path, Error, ParamMap, PathMode, Result, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A container for key/value parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterBag {
    parameters: ParamMap,
}

impl ParameterBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the backing map.
    #[must_use]
    pub fn all(&self) -> &ParamMap {
        &self.parameters
    }

    /// Returns the backing map for in-place modification.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parameter_bag::{ParameterBag, Value};
    ///
    /// let mut bag = ParameterBag::new();
    /// bag.all_mut().insert("k".to_string(), Value::from(1));
    /// assert!(bag.has("k"));
    /// ```
    pub fn all_mut(&mut self) -> &mut ParamMap {
        &mut self.parameters
    }

    /// Consumes the bag, returning the backing map.
    #[must_use]
    pub fn into_inner(self) -> ParamMap {
        self.parameters
    }

    /// Returns a snapshot of the parameter keys, in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.parameters.keys().cloned().collect()
    }

    /// Replaces the current parameters by a new set.
    pub fn replace(&mut self, parameters: ParamMap) {
        self.parameters = parameters;
    }

    /// Replaces the current parameters by the entries of an object value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if `parameters` is not an object. The
    /// bag is left unchanged.
    pub fn replace_value(&mut self, parameters: Value) -> Result<()> {
        self.parameters = into_map(parameters)?;
        Ok(())
    }

    /// Adds parameters, overwriting existing keys.
    ///
    /// Overwritten keys keep their position; new keys are appended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parameter_bag::{params, ParameterBag, Value};
    ///
    /// let mut bag = ParameterBag::try_from(params!({ "a": 1, "b": 2 })).unwrap();
    /// bag.add_value(params!({ "b": 20, "c": 30 })).unwrap();
    ///
    /// assert_eq!(bag.keys(), vec!["a", "b", "c"]);
    /// assert_eq!(bag.get("b"), Some(&Value::from(20)));
    /// ```
    pub fn add(&mut self, parameters: ParamMap) {
        self.parameters.extend(parameters);
    }

    /// Adds the entries of an object value, overwriting existing keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if `parameters` is not an object. The
    /// bag is left unchanged.
    pub fn add_value(&mut self, parameters: Value) -> Result<()> {
        self.add(into_map(parameters)?);
        Ok(())
    }

    /// Returns the parameter stored under `key`, without path parsing.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.parameters.get(key)
    }

    /// Returns the parameter stored under `key`, or `default` if it is absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Looks up a parameter, following `root[key]...` paths in deep mode.
    ///
    /// In [`PathMode::Shallow`], or when the path contains no `[`, `path` is a
    /// single literal key. Missing keys at any depth give `Ok(None)`.
    ///
    /// # Errors
    ///
    /// In [`PathMode::Deep`], returns a path error
    /// ([`Error::is_invalid_path`]) for malformed bracket syntax.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parameter_bag::{params, ParameterBag, PathMode, Value};
    ///
    /// let bag = ParameterBag::try_from(params!({ "a": { "b": { "c": 1 } } })).unwrap();
    ///
    /// assert_eq!(bag.lookup("a[b][c]", PathMode::Deep).unwrap(), Some(&Value::from(1)));
    /// assert_eq!(bag.lookup("a[b][c]", PathMode::Shallow).unwrap(), None);
    /// assert_eq!(bag.lookup("a[x][c]", PathMode::Deep).unwrap(), None);
    /// assert!(bag.lookup("a[b", PathMode::Deep).is_err());
    /// ```
    pub fn lookup(&self, path: &str, mode: PathMode) -> Result<Option<&Value>> {
        if mode.is_deep() {
            path::resolve(&self.parameters, path)
        } else {
            Ok(self.get(path))
        }
    }

    /// Like [`ParameterBag::lookup`], falling back to `default` when the path
    /// does not resolve.
    ///
    /// # Errors
    ///
    /// Same as [`ParameterBag::lookup`].
    pub fn lookup_or<'a>(
        &'a self,
        path: &str,
        default: &'a Value,
        mode: PathMode,
    ) -> Result<&'a Value> {
        Ok(self.lookup(path, mode)?.unwrap_or(default))
    }

    /// Sets a parameter by name. Brackets in `key` are stored literally.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.parameters.insert(key.into(), value.into());
    }

    /// Returns `true` if the parameter is defined at the top level.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.parameters.contains_key(key)
    }

    /// Removes a parameter, returning it if it was present.
    ///
    /// Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.parameters.remove(key)
    }

    /// Returns the alphabetic characters of the parameter value.
    ///
    /// # Errors
    ///
    /// Returns a path error for malformed deep paths.
    pub fn get_alpha(&self, key: &str, default: &str, mode: PathMode) -> Result<String> {
        self.filtered(key, default, mode, filter_alpha)
    }

    /// Returns the letters, digits and underscores of the parameter value.
    ///
    /// # Errors
    ///
    /// Returns a path error for malformed deep paths.
    pub fn get_alnum(&self, key: &str, default: &str, mode: PathMode) -> Result<String> {
        self.filtered(key, default, mode, filter_alnum)
    }

    /// Returns the digits of the parameter value.
    ///
    /// # Errors
    ///
    /// Returns a path error for malformed deep paths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parameter_bag::{ParameterBag, PathMode};
    ///
    /// let mut bag = ParameterBag::new();
    /// bag.set("phone", "+1 (555) 010-9999");
    ///
    /// assert_eq!(bag.get_digits("phone", "", PathMode::Shallow).unwrap(), "15550109999");
    /// assert_eq!(bag.get_digits("fax", "n/a 0", PathMode::Shallow).unwrap(), "0");
    /// ```
    pub fn get_digits(&self, key: &str, default: &str, mode: PathMode) -> Result<String> {
        self.filtered(key, default, mode, filter_digits)
    }

    /// Returns the parameter value converted to an integer.
    ///
    /// Integers are returned as-is and floats are truncated. Other values are
    /// converted with PHP's loose numeric-string rules (see
    /// [`coerce::str_to_int`](crate::coerce::str_to_int)). A missing
    /// parameter yields `default`.
    ///
    /// # Errors
    ///
    /// Returns a path error for malformed deep paths.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parameter_bag::{ParameterBag, PathMode};
    ///
    /// let mut bag = ParameterBag::new();
    /// bag.set("n", "42abc");
    /// bag.set("m", 7);
    ///
    /// assert_eq!(bag.get_int("n", 0, PathMode::Shallow).unwrap(), 42);
    /// assert_eq!(bag.get_int("m", 0, PathMode::Shallow).unwrap(), 7);
    /// ```
    pub fn get_int(&self, key: &str, default: i64, mode: PathMode) -> Result<i64> {
        Ok(self.lookup(key, mode)?.map_or(default, value_to_int))
    }

    /// Returns an iterator over the parameter keys.
    pub fn iter(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.parameters.keys()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns `true` if the bag holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    fn filtered(
        &self,
        key: &str,
        default: &str,
        mode: PathMode,
        filter: fn(&str) -> String,
    ) -> Result<String> {
        Ok(match self.lookup(key, mode)? {
            Some(value) => filter(&value.to_loose_string()),
            None => filter(default),
        })
    }
}

fn into_map(value: Value) -> Result<ParamMap> {
    match value {
        Value::Object(map) => Ok(map),
        other => {
            tracing::debug!(found = other.kind(), "rejected non-object parameters");
            Err(Error::type_mismatch("object", other.kind()))
        }
    }
}

impl From<ParamMap> for ParameterBag {
    fn from(parameters: ParamMap) -> Self {
        ParameterBag { parameters }
    }
}

impl From<ParameterBag> for ParamMap {
    fn from(bag: ParameterBag) -> Self {
        bag.parameters
    }
}

impl TryFrom<Value> for ParameterBag {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        into_map(value).map(ParameterBag::from)
    }
}

impl FromIterator<(String, Value)> for ParameterBag {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        ParameterBag {
            parameters: ParamMap::from_iter(iter),
        }
    }
}

impl<'a> IntoIterator for &'a ParameterBag {
    type Item = &'a String;
    type IntoIter = indexmap::map::Keys<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ParameterBag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.parameters.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ParameterBag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ParamMap::deserialize(deserializer).map(ParameterBag::from)
    }
}
