//! Enum domains: fixed sets of permitted flag values.
//!
//! A [`Domain`] is created once at flag-registration time and is immutable
//! afterwards. Membership tests are case-insensitive (ASCII), while the
//! values themselves keep the casing they were declared with — that casing is
//! what shows up in help text, completion candidates, and error messages.

use std::fmt;

use crate::error::{Error, Result};

/// An ordered, immutable set of permitted string values.
///
/// Displays as `{a|b|c}`, the form used in validation messages.
///
/// ```rust
/// use vexil::Domain;
///
/// let domain = Domain::new(["open", "closed", "merged"]);
/// assert!(domain.contains("CLOSED"));
/// assert!(!domain.contains("draft"));
/// assert_eq!(domain.to_string(), "{open|closed|merged}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    values: Vec<String>,
}

impl Domain {
    /// Create a domain from the permitted values, preserving order.
    ///
    /// Duplicates are kept as given; the domain never rewrites or sorts its
    /// contents.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.values
            .iter()
            .any(|value| value.eq_ignore_ascii_case(candidate))
    }

    /// Validate a candidate, returning [`Error::NotInDomain`] on failure.
    ///
    /// The error carries the full allowed set rendered as `{a|b|c}` for
    /// display.
    pub fn check(&self, candidate: &str) -> Result<()> {
        if self.contains(candidate) {
            Ok(())
        } else {
            Err(Error::NotInDomain {
                value: candidate.to_owned(),
                allowed: self.to_string(),
            })
        }
    }

    /// The permitted values, in declaration order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of permitted values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the domain permits no values at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.values.join("|"))
    }
}
