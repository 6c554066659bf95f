//! Enum-constrained string and string-slice flags.
//!
//! Both flags validate against a [`Domain`]: membership is case-insensitive,
//! and accepted input is stored with the caller's casing intact. The domain
//! is published through the value parser's possible values, so it reaches
//! `--help` and generated shell completions without any extra registration.
//!
//! The slice flag takes one comma-separated list per occurrence. The host
//! splits on `,` and runs every item through the domain check; one bad item
//! rejects the whole occurrence, so no partial update is ever observable.
//! Repeated occurrences replace the previous list outright.
//!
//! ```rust
//! use clap::Command;
//! use vexil::{string_enum_flag, string_enum_value, Domain};
//!
//! let domain = Domain::new(["open", "closed", "merged"]);
//! let cmd = Command::new("demo")
//!     .arg(string_enum_flag("state", Some('s'), "open", domain, "Filter by state"));
//!
//! let matches = cmd.try_get_matches_from(["demo", "--state", "Merged"])?;
//! assert_eq!(string_enum_value(&matches, "state"), Some("Merged"));
//! # Ok::<(), clap::Error>(())
//! ```

use std::ffi::OsStr;

use clap::builder::{PossibleValue, TypedValueParser};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::debug;

use crate::domain::Domain;
use crate::error;

/// Value parser that enforces membership in a [`Domain`].
///
/// Matching is case-insensitive; the accepted value keeps the caller's
/// casing. The domain's literal values are exposed as possible values for
/// help text and shell completion.
#[derive(Clone, Debug)]
pub struct EnumValueParser {
    domain: Domain,
}

impl EnumValueParser {
    /// Create a parser for the given domain.
    #[must_use]
    pub const fn new(domain: Domain) -> Self {
        Self { domain }
    }

    /// The domain this parser validates against.
    #[must_use]
    pub const fn domain(&self) -> &Domain {
        &self.domain
    }
}

impl TypedValueParser for EnumValueParser {
    type Value = String;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        let raw = value.to_str().ok_or_else(|| error::invalid_utf8(cmd))?;
        self.domain.check(raw).map_err(|err| {
            debug!(value = raw, allowed = %self.domain, "rejected enum flag value");
            error::value_validation(cmd, arg, &err)
        })?;
        Ok(raw.to_owned())
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(
            self.domain
                .values()
                .iter()
                .map(|value| PossibleValue::new(value.clone())),
        ))
    }
}

/// Build an enum-constrained string flag.
///
/// A non-empty `default` is installed as the flag's default value; defaults
/// are not validated against the domain at construction time.
#[must_use]
pub fn string_enum_flag(
    name: &'static str,
    short: Option<char>,
    default: &str,
    domain: Domain,
    help: &'static str,
) -> Arg {
    let mut arg = Arg::new(name)
        .long(name)
        .help(help)
        .value_name("string")
        .action(ArgAction::Set)
        .overrides_with(name)
        .value_parser(EnumValueParser::new(domain));
    if !default.is_empty() {
        arg = arg.default_value(default.to_owned());
    }
    if let Some(short) = short {
        arg = arg.short(short);
    }
    arg
}

/// Build an enum-constrained string-slice flag.
///
/// One occurrence supplies a comma-separated list; every item must belong to
/// the domain. Defaults are installed pre-split and are not validated.
#[must_use]
pub fn string_slice_enum_flag(
    name: &'static str,
    short: Option<char>,
    defaults: &[&str],
    domain: Domain,
    help: &'static str,
) -> Arg {
    let mut arg = Arg::new(name)
        .long(name)
        .help(help)
        .value_name("stringSlice")
        .action(ArgAction::Set)
        .overrides_with(name)
        .value_delimiter(',')
        .value_parser(EnumValueParser::new(domain));
    if !defaults.is_empty() {
        arg = arg.default_values(defaults.iter().map(|value| (*value).to_owned()));
    }
    if let Some(short) = short {
        arg = arg.short(short);
    }
    arg
}

/// Read an enum flag's current value.
#[must_use]
pub fn string_enum_value<'a>(matches: &'a ArgMatches, id: &str) -> Option<&'a str> {
    matches.get_one::<String>(id).map(String::as_str)
}

/// Read an enum-slice flag's current values, in the order they were given.
#[must_use]
pub fn string_slice_enum_values(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Render a list of values as `{a, b}`.
#[must_use]
pub fn render_values<S: AsRef<str>>(values: &[S]) -> String {
    let joined = values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{joined}}}")
}
