//! Loose conversions from parameter values.
//!
//! [`str_to_int`] reproduces PHP's leading-numeric-string cast: it reads the
//! longest prefix made of `0-9 . e E + -`, matches it against PHP's numeric
//! grammar and shifts the decimal point by the exponent. Digits shifted past
//! the decimal point are dropped, never rounded. Anything that does not parse
//! becomes `0`.
//!
//! The string filters keep one ASCII character class of their input.
//!
//! ## Examples
//!
//! ```rust
//! use parameter_bag::coerce::{filter_digits, str_to_int};
//!
//! assert_eq!(str_to_int("42abc"), 42);
//! assert_eq!(str_to_int("1.5e3"), 1500);
//! assert_eq!(str_to_int("19e-1"), 1);
//! assert_eq!(str_to_int("abc"), 0);
//!
//! assert_eq!(filter_digits("+33 (0)6-12"), "330612");
//! ```

use crate::Value;
use regex::Regex;
use std::sync::LazyLock;

/// Characters that may appear in the numeric prefix.
const NUMERIC_CHARS: &str = "0123456789.eE+-";

/// `sign (int | [int] . dec | int . [dec]) [e sign exp]`
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([+-]?)(?:([0-9]+)|([0-9]*)\.([0-9]+)|([0-9]+)\.([0-9]*))(?:[eE]([+-]?)([0-9]+))?$",
    )
    .expect("numeric prefix pattern is valid")
});

/// A numeric prefix split into its components.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Decomposed<'a> {
    negative: bool,
    int_part: &'a str,
    dec_part: &'a str,
    exp_negative: bool,
    /// Saturates on absurdly long exponents; the result saturates anyway.
    exponent: usize,
}

impl<'a> Decomposed<'a> {
    fn parse(prefix: &'a str) -> Option<Self> {
        let caps = NUMERIC_PREFIX.captures(prefix)?;
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());

        let int_part = [2, 3, 5]
            .into_iter()
            .map(group)
            .find(|s| !s.is_empty())
            .unwrap_or("");
        let dec_part = [4, 6]
            .into_iter()
            .map(group)
            .find(|s| !s.is_empty())
            .unwrap_or("");
        let exponent = match group(8) {
            "" => 0,
            digits => digits.parse().unwrap_or(usize::MAX),
        };

        Some(Decomposed {
            negative: group(1) == "-",
            int_part,
            dec_part,
            exp_negative: group(7) == "-",
            exponent,
        })
    }

    /// Applies the exponent, returning the kept digits and a count of zeros
    /// to append after them.
    fn shift(&self) -> (String, usize) {
        if self.exp_negative {
            if self.exponent >= self.int_part.len() {
                (String::new(), 0)
            } else {
                let keep = self.int_part.len() - self.exponent;
                (self.int_part[..keep].to_string(), 0)
            }
        } else {
            let digits = format!("{}{}", self.int_part, self.dec_part);
            if self.exponent < self.dec_part.len() {
                let keep = digits.len() - (self.dec_part.len() - self.exponent);
                (digits[..keep].to_string(), 0)
            } else {
                (digits, self.exponent - self.dec_part.len())
            }
        }
    }

    fn to_i64(&self) -> i64 {
        let (digits, zeros) = self.shift();
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            return 0;
        }

        let magnitude = significant
            .bytes()
            .map(|b| u64::from(b - b'0'))
            .chain(std::iter::repeat(0).take(zeros))
            .try_fold(0u64, |acc, d| acc.checked_mul(10)?.checked_add(d));

        let saturated = if self.negative { i64::MIN } else { i64::MAX };
        let Some(magnitude) = magnitude else {
            return saturated;
        };
        let signed = if self.negative {
            -i128::from(magnitude)
        } else {
            i128::from(magnitude)
        };
        i64::try_from(signed).unwrap_or(saturated)
    }
}

/// Returns the leading run of numeric characters, or `None` when the string
/// does not start with one.
fn numeric_prefix(value: &str) -> Option<&str> {
    let end = value
        .char_indices()
        .find(|(_, c)| !NUMERIC_CHARS.contains(*c))
        .map_or(value.len(), |(i, _)| i);
    (end > 0).then(|| &value[..end])
}

/// Converts a string to an integer using PHP's loose numeric-string rules.
///
/// Never fails: input without a valid numeric prefix yields `0`, and results
/// outside the `i64` range saturate at `i64::MIN` / `i64::MAX`.
///
/// # Examples
///
/// ```rust
/// use parameter_bag::coerce::str_to_int;
///
/// assert_eq!(str_to_int("42"), 42);
/// assert_eq!(str_to_int("3.14"), 3);
/// assert_eq!(str_to_int("1e3"), 1000);
/// assert_eq!(str_to_int("-5"), -5);
/// assert_eq!(str_to_int(""), 0);
/// assert_eq!(str_to_int("1e100"), i64::MAX);
/// ```
#[must_use]
pub fn str_to_int(value: &str) -> i64 {
    numeric_prefix(value)
        .and_then(Decomposed::parse)
        .map_or(0, |d| d.to_i64())
}

/// Converts any value to an integer.
///
/// Integers pass through, floats truncate toward zero and booleans count as
/// `1` / `0`. Every other value is read through [`Value::to_loose_string`] and
/// [`str_to_int`].
///
/// # Examples
///
/// ```rust
/// use parameter_bag::{coerce::value_to_int, Value};
///
/// assert_eq!(value_to_int(&Value::from(7)), 7);
/// assert_eq!(value_to_int(&Value::from(-2.9)), -2);
/// assert_eq!(value_to_int(&Value::from("12 apples")), 12);
/// assert_eq!(value_to_int(&Value::from(true)), 1);
/// assert_eq!(value_to_int(&Value::Null), 0);
/// ```
#[must_use]
pub fn value_to_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.truncate(),
        Value::Bool(b) => i64::from(*b),
        other => str_to_int(&other.to_loose_string()),
    }
}

/// Keeps only ASCII letters.
///
/// # Examples
///
/// ```rust
/// use parameter_bag::coerce::filter_alpha;
///
/// assert_eq!(filter_alpha("abc-123_DEF"), "abcDEF");
/// ```
#[must_use]
pub fn filter_alpha(value: &str) -> String {
    value.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Keeps ASCII letters, digits and the underscore.
///
/// # Examples
///
/// ```rust
/// use parameter_bag::coerce::filter_alnum;
///
/// assert_eq!(filter_alnum("abc-123_DEF!"), "abc123_DEF");
/// ```
#[must_use]
pub fn filter_alnum(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Keeps only ASCII digits.
#[must_use]
pub fn filter_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
