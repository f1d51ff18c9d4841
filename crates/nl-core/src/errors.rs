//! Error types for nongli-rs.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The lookup tables are
//! pure data, so errors only ever describe bad *arguments*: a year outside
//! the lunar table, a date outside the conversion window, or a date string
//! that does not match its pattern.
//!
//! The [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros are the
//! shorthand used for argument checks throughout the workspace.

use thiserror::Error;

/// The top-level error type used throughout nongli-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A year argument to a table lookup lies outside the table.
    #[error("year {year} out of range [{min}, {max}]")]
    Range {
        /// The offending year.
        year: i32,
        /// First year covered by the table.
        min: i32,
        /// Last year covered by the table.
        max: i32,
    },

    /// A Gregorian date lies outside the supported conversion window.
    #[error("date out of range: {0}")]
    OutOfRange(String),

    /// A date string could not be matched against its pattern.
    #[error("cannot parse {value:?} with pattern {pattern:?}")]
    Format {
        /// The input string.
        value: String,
        /// The pattern it was matched against.
        pattern: String,
    },

    /// Invalid Gregorian date construction or arithmetic.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

impl Error {
    /// Build an [`Error::Range`] for a year outside `[min, max]`.
    pub fn year_out_of_range(year: impl Into<i32>, min: impl Into<i32>, max: impl Into<i32>) -> Self {
        Error::Range {
            year: year.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Shorthand `Result` type used throughout nongli-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use nl_core::{ensure, errors::Error};
/// fn month(m: u8) -> nl_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} not in 1..=12");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(matches!(month(13), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use nl_core::fail;
/// fn always_err() -> nl_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_message() {
        let e = Error::year_out_of_range(2101, 1900, 2100);
        assert_eq!(e.to_string(), "year 2101 out of range [1900, 2100]");
        assert!(matches!(e, Error::Range { year: 2101, min: 1900, max: 2100 }));
    }

    #[test]
    fn format_message() {
        let e = Error::Format {
            value: "abc".into(),
            pattern: "yyyy-MM-dd".into(),
        };
        assert_eq!(
            e.to_string(),
            "cannot parse \"abc\" with pattern \"yyyy-MM-dd\""
        );
    }
}
