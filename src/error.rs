//! Error types for parsing intervals from text.
//!
//! Set operations themselves never fail: empty intervals are inert inputs,
//! not errors. The only fallible entry point is [`Interval::from_str`],
//! which parses the rendering produced by `Display`.
//!
//! [`Interval::from_str`]: crate::Interval

/// Represents an error when a string cannot be parsed as an
/// [`Interval`](crate::Interval).
///
/// # Examples
///
/// ```rust
/// use rangeset::{Interval, ParseIntervalError};
///
/// let error = "[3..9".parse::<Interval<i32>>().unwrap_err();
/// assert_eq!(error, ParseIntervalError::MissingClosingBracket);
/// assert_eq!(format!("{error}"), "interval must end with ']' or ')'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIntervalError {
    /// The input was empty or contained only whitespace.
    Empty,
    /// The input did not start with `[` or `(`.
    MissingOpeningBracket,
    /// The input did not end with `]` or `)`.
    MissingClosingBracket,
    /// No `..` separated the two endpoints.
    MissingSeparator,
    /// An endpoint could not be parsed as a value of the domain.
    InvalidEndpoint {
        /// The endpoint text as it appeared in the input.
        endpoint: String,
        /// Why the endpoint was rejected.
        reason: String,
    },
}

impl std::fmt::Display for ParseIntervalError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(formatter, "cannot parse interval from empty string"),
            Self::MissingOpeningBracket => {
                write!(formatter, "interval must start with '[' or '('")
            }
            Self::MissingClosingBracket => write!(formatter, "interval must end with ']' or ')'"),
            Self::MissingSeparator => {
                write!(formatter, "interval endpoints must be separated by '..'")
            }
            Self::InvalidEndpoint { endpoint, reason } => {
                write!(formatter, "invalid interval endpoint '{endpoint}': {reason}")
            }
        }
    }
}

impl std::error::Error for ParseIntervalError {}
