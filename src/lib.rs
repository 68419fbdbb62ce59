//! # parameter_bag
//!
//! A key/value parameter container for configuration-reading code, with
//! bracketed deep-path lookup and PHP-compatible loose numeric coercion.
//!
//! ## Key Features
//!
//! - **Ordered**: Parameters keep the order they were inserted or decoded in
//! - **Deep Paths**: `server[tls][cert]` reaches into nested objects and arrays
//! - **Strict Paths, Lenient Data**: Malformed paths are errors; missing keys
//!   and non-numeric strings fall back to defaults
//! - **Loose Integers**: `"42abc"`, `"1.5e3"` and `"3.99"` convert the way PHP
//!   casts them (`42`, `1500`, `3`)
//! - **Serde Compatible**: Bags and values serialize and deserialize with any
//!   serde format
//!
//! ## Quick Start
//!
//! ```rust
//! use parameter_bag::{params, ParameterBag, PathMode, Value};
//!
//! let mut bag = ParameterBag::try_from(params!({
//!     "db": { "host": "localhost", "port": "5432" },
//!     "workers": 4
//! }))
//! .unwrap();
//!
//! assert_eq!(
//!     bag.lookup("db[host]", PathMode::Deep).unwrap(),
//!     Some(&Value::from("localhost"))
//! );
//! assert_eq!(bag.get_int("db[port]", 0, PathMode::Deep).unwrap(), 5432);
//! assert_eq!(bag.get_int("workers", 1, PathMode::Shallow).unwrap(), 4);
//!
//! bag.set("debug", true);
//! assert!(bag.has("debug"));
//! ```
//!
//! ### Decoding JSON in source order
//!
//! ```rust
//! use parameter_bag::ParameterBag;
//!
//! let bag: ParameterBag = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
//! assert_eq!(bag.keys(), vec!["z", "a", "m"]);
//! ```
//!
//! ## Deep Path Errors
//!
//! ```rust
//! use parameter_bag::{params, ParameterBag, PathMode};
//!
//! let bag = ParameterBag::try_from(params!({ "a": { "b": 1 } })).unwrap();
//!
//! let err = bag.lookup("a[b", PathMode::Deep).unwrap_err();
//! assert!(err.is_invalid_path());
//! assert_eq!(err.to_string(), "Malformed path. Path must end with \"]\".");
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events at `trace` and `debug` level (deep lookup
//! misses, rejected paths, rejected non-object parameters). Nothing is printed
//! unless the host installs a subscriber.

pub mod bag;
pub mod coerce;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod value;

pub use bag::ParameterBag;
pub use coerce::{str_to_int, value_to_int};
pub use error::{Error, Result};
pub use map::ParamMap;
pub use options::PathMode;
pub use value::{Number, Value};
