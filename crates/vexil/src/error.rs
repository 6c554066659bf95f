//! Error types and result alias for flag value validation.
//!
//! Every adapter reports rejection through [`Error`]. At the clap boundary
//! the semantic error is converted into a [`clap::Error`] with
//! [`ErrorKind::ValueValidation`], so the host library reports it as a usage
//! error and exits non-zero; exit-code policy stays with the host.
//!
//! ```rust
//! use vexil::{Domain, Error};
//!
//! let domain = Domain::new(["open", "closed"]);
//! let err = domain.check("merged").unwrap_err();
//! assert!(matches!(err, Error::NotInDomain { .. }));
//! assert!(err.to_string().contains("{open|closed}"));
//! ```

use clap::error::ErrorKind;
use thiserror::Error as ThisError;

/// Validation failures produced by the flag value adapters.
///
/// Messages are written for direct display to the user: the domain error
/// enumerates the allowed set as `{a|b|c}` and the pattern error echoes the
/// rejected value.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value is not one of the recognized boolean literals
    /// (`1 t T TRUE true True` / `0 f F FALSE false False`).
    #[error("invalid boolean value {value:?} (accepted: 1, t, true, 0, f, false)")]
    InvalidBoolean {
        /// The rejected input.
        value: String,
    },

    /// The value (or one item of a comma-separated list) is outside the
    /// flag's enum domain.
    #[error("invalid value {value:?}: valid values are {allowed}")]
    NotInDomain {
        /// The rejected input.
        value: String,
        /// The permitted values, rendered as `{a|b|c}`.
        allowed: String,
    },

    /// The value does not match the flag's regular expression.
    #[error("value {value:?} does not match pattern {pattern:?}")]
    PatternMismatch {
        /// The rejected input.
        value: String,
        /// The pattern the value was checked against.
        pattern: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Convert a semantic validation error into the host library's error type.
///
/// The resulting message names the flag the way clap does (`--state`) so it
/// reads like any other usage error.
pub(crate) fn value_validation(
    cmd: &clap::Command,
    arg: Option<&clap::Arg>,
    err: &Error,
) -> clap::Error {
    let flag = arg.map_or_else(
        || String::from("value"),
        |a| {
            a.get_long()
                .map_or_else(|| a.get_id().as_str().to_owned(), |long| format!("--{long}"))
        },
    );
    clap::Error::raw(
        ErrorKind::ValueValidation,
        format!("invalid value for '{flag}': {err}\n"),
    )
    .with_cmd(cmd)
}

/// Error for argv entries that are not valid UTF-8.
pub(crate) fn invalid_utf8(cmd: &clap::Command) -> clap::Error {
    clap::Error::new(ErrorKind::InvalidUtf8).with_cmd(cmd)
}
