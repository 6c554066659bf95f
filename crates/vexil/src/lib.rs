//! # vexil
//!
//! Custom flag values for [`clap`]-based CLIs: nilable strings and bools,
//! enum-constrained strings and string slices, and regexp-validated strings.
//!
//! ## Architecture
//!
//! Each flag kind is an adapter over clap's extensible-value surface:
//!
//! - **Value parsers** ([`BoolLiteralParser`], [`EnumValueParser`],
//!   [`RegexValueParser`]) validate raw input; the host invokes them once per
//!   flag occurrence, left-to-right, and a rejection aborts the parse before
//!   any state becomes observable.
//! - **Arg constructors** ([`nil_string_flag`], [`nil_bool_flag`],
//!   [`string_enum_flag`], [`string_slice_enum_flag`],
//!   [`string_regexp_flag`]) bundle the parser with value names, defaults,
//!   and last-write-wins repeat semantics.
//! - **Readers and renderers** give the parsed state a typed read side:
//!   `None` from a nilable reader always means "flag not supplied".
//!
//! Enum domains flow into `--help` and shell completion through the parser's
//! possible values; see [`completion`] for script generation.
//!
//! ## Quick start
//!
//! ```rust
//! use clap::Command;
//! use vexil::{
//!     nil_bool_flag, nil_bool_value, string_enum_flag, string_enum_value, Domain,
//! };
//!
//! let cmd = Command::new("pr-list")
//!     .arg(string_enum_flag(
//!         "state",
//!         Some('s'),
//!         "open",
//!         Domain::new(["open", "closed", "merged"]),
//!         "Filter by state",
//!     ))
//!     .arg(nil_bool_flag("draft", None, "Filter by draft state"));
//!
//! let matches = cmd.try_get_matches_from(["pr-list", "--state", "Merged", "--draft"])?;
//! assert_eq!(string_enum_value(&matches, "state"), Some("Merged"));
//! assert_eq!(nil_bool_value(&matches, "draft"), Some(true));
//! # Ok::<(), clap::Error>(())
//! ```
//!
//! ## Error handling
//!
//! Validation failures are [`Error`] values; at the clap boundary they become
//! usage errors (`ErrorKind::ValueValidation`) that the host reports before
//! exiting non-zero:
//!
//! ```rust
//! use clap::Command;
//! use vexil::{string_enum_flag, Domain};
//!
//! let cmd = Command::new("pr-list").arg(string_enum_flag(
//!     "state",
//!     None,
//!     "open",
//!     Domain::new(["open", "closed"]),
//!     "Filter by state",
//! ));
//!
//! let err = cmd.try_get_matches_from(["pr-list", "--state", "bogus"]).unwrap_err();
//! assert!(err.to_string().contains("{open|closed}"));
//! ```

/// Shell completion generation
pub mod completion;
/// Enum domains of permitted flag values
pub mod domain;
/// Enum-constrained string and string-slice flags
pub mod enums;
/// Error types and result aliases
pub mod error;
/// Nilable string and bool flags
pub mod nilable;
/// Regexp-validated string flags
pub mod pattern;

// Re-export commonly used types
pub use domain::Domain;
pub use enums::{
    EnumValueParser, render_values, string_enum_flag, string_enum_value, string_slice_enum_flag,
    string_slice_enum_values,
};
pub use error::{Error, Result};
pub use nilable::{
    BoolLiteralParser, nil_bool_flag, nil_bool_value, nil_string_flag, nil_string_value,
    parse_bool_literal, render_bool, render_string,
};
pub use pattern::{RegexValueParser, string_regexp_flag, string_regexp_value};
