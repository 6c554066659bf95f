//! Nilable string and bool flags.
//!
//! "Nilable" means the post-parse value distinguishes *flag not supplied*
//! from *flag supplied with an empty/false value*: readers return
//! `Option<String>` / `Option<bool>`, and `None` always means the flag never
//! appeared on the command line.
//!
//! The bool flag is registered boolean-style: `--flag` alone means `true`,
//! and an explicit value must use the equals form (`--flag=false`). Accepted
//! literals are exactly `1 t T TRUE true True` and `0 f F FALSE false
//! False`; anything else is rejected without touching the parsed state.
//!
//! ```rust
//! use clap::Command;
//! use vexil::{nil_bool_flag, nil_bool_value, nil_string_flag, nil_string_value};
//!
//! let cmd = Command::new("demo")
//!     .arg(nil_string_flag("author", Some('a'), "Filter by author"))
//!     .arg(nil_bool_flag("draft", None, "Filter by draft state"));
//!
//! let matches = cmd.try_get_matches_from(["demo", "--author=", "--draft"])?;
//! assert_eq!(nil_string_value(&matches, "author"), Some(""));
//! assert_eq!(nil_bool_value(&matches, "draft"), Some(true));
//! # Ok::<(), clap::Error>(())
//! ```

use std::ffi::OsStr;

use clap::builder::TypedValueParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;

use crate::error::{self, Error};

/// Parse one of the recognized boolean literals.
///
/// The accepted set is exact: `1 t T TRUE true True` for `true` and
/// `0 f F FALSE false False` for `false`. Mixed-case spellings such as
/// `"tRuE"` are rejected.
pub fn parse_bool_literal(raw: &str) -> Result<bool, Error> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Error::InvalidBoolean {
            value: raw.to_owned(),
        }),
    }
}

/// Value parser for boolean-literal flag values.
///
/// Unlike clap's stock bool parsing, this accepts the short `t`/`f` and
/// numeric `1`/`0` spellings while rejecting everything outside the literal
/// set.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoolLiteralParser;

impl TypedValueParser for BoolLiteralParser {
    type Value = bool;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let raw = value.to_str().ok_or_else(|| error::invalid_utf8(cmd))?;
        parse_bool_literal(raw).map_err(|err| {
            debug!(value = raw, "rejected boolean flag value");
            error::value_validation(cmd, arg, &err)
        })
    }
}

/// Build a nilable string flag.
///
/// Accepts every value, including the empty string and values that start
/// with a hyphen. Repeated occurrences are last-write-wins.
#[must_use]
pub fn nil_string_flag(name: &'static str, short: Option<char>, help: &'static str) -> Arg {
    let mut arg = Arg::new(name)
        .long(name)
        .help(help)
        .value_name("string")
        .action(ArgAction::Set)
        .overrides_with(name)
        .allow_hyphen_values(true)
        .value_parser(clap::value_parser!(String));
    if let Some(short) = short {
        arg = arg.short(short);
    }
    arg
}

/// Build a nilable bool flag.
///
/// The flag may be given without a value (`--flag` means `true`); an
/// explicit value requires the equals form (`--flag=false`).
#[must_use]
pub fn nil_bool_flag(name: &'static str, short: Option<char>, help: &'static str) -> Arg {
    let mut arg = Arg::new(name)
        .long(name)
        .help(help)
        .value_name("bool")
        .action(ArgAction::Set)
        .overrides_with(name)
        .num_args(0..=1)
        .require_equals(true)
        .default_missing_value("true")
        .value_parser(BoolLiteralParser);
    if let Some(short) = short {
        arg = arg.short(short);
    }
    arg
}

/// Read a nilable string flag: `None` means the flag was not supplied.
#[must_use]
pub fn nil_string_value<'a>(matches: &'a ArgMatches, id: &str) -> Option<&'a str> {
    matches.get_one::<String>(id).map(String::as_str)
}

/// Read a nilable bool flag: `None` means the flag was not supplied.
#[must_use]
pub fn nil_bool_value(matches: &ArgMatches, id: &str) -> Option<bool> {
    matches.get_one::<bool>(id).copied()
}

/// Render a nilable string value: the stored string, or `""` when unset.
#[must_use]
pub fn render_string(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

/// Render a nilable bool value: `"false"` when unset, otherwise the stored
/// value.
#[must_use]
pub fn render_bool(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "true",
        Some(false) | None => "false",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic, clippy::bool_assert_comparison)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn demo() -> Command {
        Command::new("demo")
            .arg(nil_string_flag("author", Some('a'), "Filter by author"))
            .arg(nil_bool_flag("draft", Some('d'), "Filter by draft state"))
    }

    mod bool_literals {
        use super::*;

        #[test]
        fn accepts_the_true_literals() {
            for literal in ["1", "t", "T", "TRUE", "true", "True"] {
                assert_eq!(parse_bool_literal(literal).unwrap(), true, "{literal}");
            }
        }

        #[test]
        fn accepts_the_false_literals() {
            for literal in ["0", "f", "F", "FALSE", "false", "False"] {
                assert_eq!(parse_bool_literal(literal).unwrap(), false, "{literal}");
            }
        }

        #[test]
        fn rejects_everything_else() {
            for bad in ["yes", "no", "2", "tRuE", "FaLsE", "", " true", "true "] {
                let err = parse_bool_literal(bad).unwrap_err();
                match err {
                    Error::InvalidBoolean { value } => assert_eq!(value, bad),
                    other => panic!("expected InvalidBoolean, got {other:?}"),
                }
            }
        }
    }

    mod nil_string {
        use super::*;

        #[test]
        fn absent_flag_reads_as_none() {
            let matches = demo().try_get_matches_from(["demo"]).unwrap();
            assert_eq!(nil_string_value(&matches, "author"), None);
        }

        #[test]
        fn empty_value_is_present_not_absent() {
            let matches = demo().try_get_matches_from(["demo", "--author="]).unwrap();
            assert_eq!(nil_string_value(&matches, "author"), Some(""));
        }

        #[test]
        fn hyphen_leading_values_are_accepted() {
            let matches = demo()
                .try_get_matches_from(["demo", "--author", "-weird"])
                .unwrap();
            assert_eq!(nil_string_value(&matches, "author"), Some("-weird"));
        }

        #[test]
        fn shorthand_works() {
            let matches = demo()
                .try_get_matches_from(["demo", "-a", "octocat"])
                .unwrap();
            assert_eq!(nil_string_value(&matches, "author"), Some("octocat"));
        }

        #[test]
        fn repeated_flag_keeps_the_last_value() {
            let matches = demo()
                .try_get_matches_from(["demo", "--author=one", "--author=two"])
                .unwrap();
            assert_eq!(nil_string_value(&matches, "author"), Some("two"));
        }

        proptest! {
            #[test]
            fn any_value_round_trips_verbatim(value in "[A-Za-z0-9 ._:/@+-]{0,48}") {
                let matches = demo()
                    .try_get_matches_from(["demo".to_owned(), format!("--author={value}")])
                    .unwrap();
                prop_assert_eq!(nil_string_value(&matches, "author"), Some(value.as_str()));
            }
        }
    }

    mod nil_bool {
        use super::*;

        #[test]
        fn absent_flag_reads_as_none() {
            let matches = demo().try_get_matches_from(["demo"]).unwrap();
            assert_eq!(nil_bool_value(&matches, "draft"), None);
        }

        #[test]
        fn bare_flag_implies_true() {
            let matches = demo().try_get_matches_from(["demo", "--draft"]).unwrap();
            assert_eq!(nil_bool_value(&matches, "draft"), Some(true));
        }

        #[test]
        fn explicit_false_is_present_not_absent() {
            let matches = demo()
                .try_get_matches_from(["demo", "--draft=false"])
                .unwrap();
            assert_eq!(nil_bool_value(&matches, "draft"), Some(false));
        }

        #[test]
        fn short_and_numeric_literals_parse() {
            let matches = demo().try_get_matches_from(["demo", "--draft=0"]).unwrap();
            assert_eq!(nil_bool_value(&matches, "draft"), Some(false));

            let matches = demo().try_get_matches_from(["demo", "--draft=t"]).unwrap();
            assert_eq!(nil_bool_value(&matches, "draft"), Some(true));
        }

        #[test]
        fn malformed_literals_are_usage_errors() {
            for bad in ["--draft=yes", "--draft=2", "--draft=tRuE"] {
                let err = demo().try_get_matches_from(["demo", bad]).unwrap_err();
                assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation, "{bad}");
                assert!(err.to_string().contains("boolean"), "{bad}");
            }
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn string_renders_empty_when_unset() {
            assert_eq!(render_string(None), "");
            assert_eq!(render_string(Some("")), "");
            assert_eq!(render_string(Some("octocat")), "octocat");
        }

        #[test]
        fn bool_renders_false_when_unset() {
            assert_eq!(render_bool(None), "false");
            assert_eq!(render_bool(Some(false)), "false");
            assert_eq!(render_bool(Some(true)), "true");
        }
    }
}
