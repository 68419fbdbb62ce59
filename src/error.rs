//! Error types for parameter bag operations.
//!
//! Only two situations are errors:
//!
//! - **Malformed deep paths**: a bracketed path such as `a]` or `a[b` given to a
//!   deep lookup. The error carries the offending character and its 0-based
//!   position in the path.
//! - **Type mismatches**: a [`Value`](crate::Value) that is not an object handed
//!   to an operation expecting a mapping (`replace_value`, `add_value`,
//!   `ParameterBag::try_from`).
//!
//! Missing keys are never errors. Lookups return `None` or the caller's default,
//! and numeric coercion falls back to `0`.
//!
//! ## Examples
//!
//! ```rust
//! use parameter_bag::{params, ParameterBag, PathMode};
//!
//! let bag = ParameterBag::try_from(params!({ "a": 1 })).unwrap();
//! let err = bag.lookup("a]", PathMode::Deep).unwrap_err();
//!
//! assert!(err.is_invalid_path());
//! assert_eq!(err.to_string(), "Malformed path. Unexpected \"]\" at position 1.");
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all errors raised by the parameter bag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A deep path contained a character that is not valid where it appears
    #[error("Malformed path. Unexpected \"{character}\" at position {position}.")]
    UnexpectedCharacter { character: char, position: usize },

    /// A deep path ended while a `[` segment was still open
    #[error("Malformed path. Path must end with \"]\".")]
    UnterminatedPath { position: usize },

    /// A value of the wrong kind was supplied where a mapping was required
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an error for a character that is not allowed at `position`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parameter_bag::Error;
    ///
    /// let err = Error::unexpected_character('[', 4);
    /// assert!(err.to_string().contains("position 4"));
    /// ```
    pub fn unexpected_character(character: char, position: usize) -> Self {
        Error::UnexpectedCharacter {
            character,
            position,
        }
    }

    /// Creates an error for a path whose last segment is never closed.
    ///
    /// `position` is the length of the path in characters, i.e. the position
    /// where the missing `]` was expected.
    pub fn unterminated_path(position: usize) -> Self {
        Error::UnterminatedPath { position }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use parameter_bag::Error;
    ///
    /// let err = Error::type_mismatch("object", "array");
    /// assert!(err.to_string().contains("expected object"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for the malformed deep path errors.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedCharacter { .. } | Error::UnterminatedPath { .. }
        )
    }

    /// The 0-based character position a path error points at, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Error::UnexpectedCharacter { position, .. } | Error::UnterminatedPath { position } => {
                Some(*position)
            }
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
