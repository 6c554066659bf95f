//! Regexp-validated string flags.

use std::ffi::OsStr;

use clap::builder::TypedValueParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use regex::Regex;
use tracing::debug;

use crate::error::{self, Error};

/// Value parser that accepts only values matching a compiled [`Regex`].
#[derive(Clone, Debug)]
pub struct RegexValueParser {
    pattern: Regex,
}

impl RegexValueParser {
    /// Create a parser for the given pattern.
    #[must_use]
    pub const fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// The pattern this parser validates against.
    #[must_use]
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl TypedValueParser for RegexValueParser {
    type Value = String;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let raw = value.to_str().ok_or_else(|| error::invalid_utf8(cmd))?;
        if self.pattern.is_match(raw) {
            Ok(raw.to_owned())
        } else {
            let err = Error::PatternMismatch {
                value: raw.to_owned(),
                pattern: self.pattern.as_str().to_owned(),
            };
            debug!(value = raw, pattern = %self.pattern, "rejected pattern flag value");
            Err(error::value_validation(cmd, arg, &err))
        }
    }
}

/// Build a regexp-validated string flag.
///
/// A non-empty `default` is installed as the flag's default value; defaults
/// are not validated against the pattern at construction time.
#[must_use]
pub fn string_regexp_flag(
    name: &'static str,
    short: Option<char>,
    default: &str,
    pattern: Regex,
    help: &'static str,
) -> Arg {
    let mut arg = Arg::new(name)
        .long(name)
        .help(help)
        .value_name("string")
        .action(ArgAction::Set)
        .overrides_with(name)
        .value_parser(RegexValueParser::new(pattern));
    if !default.is_empty() {
        arg = arg.default_value(default.to_owned());
    }
    if let Some(short) = short {
        arg = arg.short(short);
    }
    arg
}

/// Read a regexp-validated flag's current value.
#[must_use]
pub fn string_regexp_value<'a>(matches: &'a ArgMatches, id: &str) -> Option<&'a str> {
    matches.get_one::<String>(id).map(String::as_str)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn demo() -> Command {
        let digits = Regex::new(r"^\d+$").unwrap();
        Command::new("demo").arg(string_regexp_flag(
            "build",
            Some('b'),
            "42",
            digits,
            "Build number",
        ))
    }

    #[test]
    fn default_is_visible_when_flag_absent() {
        let matches = demo().try_get_matches_from(["demo"]).unwrap();
        assert_eq!(string_regexp_value(&matches, "build"), Some("42"));
    }

    #[test]
    fn matching_value_is_stored_verbatim() {
        let matches = demo()
            .try_get_matches_from(["demo", "--build", "123"])
            .unwrap();
        assert_eq!(string_regexp_value(&matches, "build"), Some("123"));
    }

    #[test]
    fn mismatch_echoes_the_rejected_value() {
        let err = demo()
            .try_get_matches_from(["demo", "--build", "12a"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("12a"));
    }

    #[test]
    fn failed_run_leaves_nothing_behind() {
        // A rejected value aborts the parse as a whole; a fresh parse still
        // sees the registered default.
        assert!(
            demo()
                .try_get_matches_from(["demo", "--build", "nope"])
                .is_err()
        );
        let matches = demo().try_get_matches_from(["demo"]).unwrap();
        assert_eq!(string_regexp_value(&matches, "build"), Some("42"));
    }

    #[test]
    fn non_matching_default_does_not_fail_construction() {
        let pattern = Regex::new(r"^\d+$").unwrap();
        let arg = string_regexp_flag("build", None, "not-a-number", pattern, "Build number");
        assert_eq!(arg.get_id().as_str(), "build");
    }

    #[test]
    fn empty_default_reads_back_as_absent() {
        let pattern = Regex::new(r"^\d+$").unwrap();
        let cmd = Command::new("demo").arg(string_regexp_flag(
            "build",
            None,
            "",
            pattern,
            "Build number",
        ));
        let matches = cmd.try_get_matches_from(["demo"]).unwrap();
        assert_eq!(string_regexp_value(&matches, "build"), None);
        assert_eq!(crate::nilable::render_string(None), "");
    }
}
