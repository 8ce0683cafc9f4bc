//! Domain types for booking input validation.
//!
//! A [`BookingRequest`] is built by the caller from user input, checked by the
//! validator, and the outcome is reported as a [`ValidationVerdict`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Booking Request
// ============================================================================

/// Prospective booking input, as typed by the user.
///
/// Transient: it carries no identity and lives only for one validation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Customer first name
    pub first_name: String,
    /// Customer last name
    pub last_name: String,
    /// Customer email address
    pub email: String,
    /// Number of tickets requested
    pub ticket_count: u32,
}

impl BookingRequest {
    /// Creates a new `BookingRequest`
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        ticket_count: u32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ticket_count,
        }
    }
}

// ============================================================================
// Verdicts
// ============================================================================

/// Outcome of validating one [`BookingRequest`].
///
/// Each field is independent: a short name does not affect the email or
/// ticket verdicts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// Both name parts meet the minimum length
    pub name_valid: bool,
    /// Email contains an `@`
    pub email_valid: bool,
    /// Ticket count is positive and within the remaining inventory
    pub ticket_count_valid: bool,
}

impl ValidationVerdict {
    /// Creates a new `ValidationVerdict`
    #[must_use]
    pub const fn new(name_valid: bool, email_valid: bool, ticket_count_valid: bool) -> Self {
        Self {
            name_valid,
            email_valid,
            ticket_count_valid,
        }
    }

    /// Returns `true` when all three checks passed
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.name_valid && self.email_valid && self.ticket_count_valid
    }

    /// Lists the failed checks in name, email, tickets order.
    ///
    /// Empty when [`is_valid`](Self::is_valid) is `true`.
    #[must_use]
    pub fn problems(&self) -> Vec<ValidationProblem> {
        let mut problems = Vec::new();
        if !self.name_valid {
            problems.push(ValidationProblem::InvalidName);
        }
        if !self.email_valid {
            problems.push(ValidationProblem::InvalidEmail);
        }
        if !self.ticket_count_valid {
            problems.push(ValidationProblem::InvalidTicketCount);
        }
        problems
    }

    /// Returns the verdicts as `(name, email, ticket_count)`
    #[must_use]
    pub const fn as_tuple(&self) -> (bool, bool, bool) {
        (self.name_valid, self.email_valid, self.ticket_count_valid)
    }
}

impl From<(bool, bool, bool)> for ValidationVerdict {
    fn from((name_valid, email_valid, ticket_count_valid): (bool, bool, bool)) -> Self {
        Self::new(name_valid, email_valid, ticket_count_valid)
    }
}

impl From<ValidationVerdict> for (bool, bool, bool) {
    fn from(verdict: ValidationVerdict) -> Self {
        verdict.as_tuple()
    }
}

/// A single failed check, with the message shown to the user.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationProblem {
    /// First or last name is too short
    #[error("first name or last name you entered is too short")]
    InvalidName,
    /// Email has no `@`
    #[error("email address you entered doesn't contain @ sign")]
    InvalidEmail,
    /// Ticket count is zero or exceeds what is left
    #[error("number of tickets you entered is invalid")]
    InvalidTicketCount,
}

// ============================================================================
// Name Length Mode
// ============================================================================

/// How the length of a name is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameLengthMode {
    /// UTF-8 byte length (`"Jé"` has length 3)
    #[default]
    Bytes,
    /// Unicode scalar values (`"Jé"` has length 2)
    Chars,
}

impl NameLengthMode {
    /// Measures `name` under this mode
    #[must_use]
    pub fn measure(self, name: &str) -> usize {
        match self {
            Self::Bytes => name.len(),
            Self::Chars => name.chars().count(),
        }
    }
}

impl fmt::Display for NameLengthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes => write!(f, "bytes"),
            Self::Chars => write!(f, "chars"),
        }
    }
}

/// Error type for `NameLengthMode` parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid name length mode: {0} (expected \"bytes\" or \"chars\")")]
pub struct ParseNameLengthModeError(String);

impl FromStr for NameLengthMode {
    type Err = ParseNameLengthModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bytes" => Ok(Self::Bytes),
            "chars" => Ok(Self::Chars),
            _ => Err(ParseNameLengthModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_problems_follow_field_order() {
        let verdict = ValidationVerdict::new(false, false, false);
        assert_eq!(
            verdict.problems(),
            vec![
                ValidationProblem::InvalidName,
                ValidationProblem::InvalidEmail,
                ValidationProblem::InvalidTicketCount,
            ]
        );
        assert!(!verdict.is_valid());
    }

    #[test]
    fn valid_verdict_has_no_problems() {
        let verdict = ValidationVerdict::from((true, true, true));
        assert!(verdict.is_valid());
        assert!(verdict.problems().is_empty());
    }

    #[test]
    fn verdict_tuple_conversion() {
        let verdict = ValidationVerdict::new(true, false, true);
        let tuple: (bool, bool, bool) = verdict.into();
        assert_eq!(tuple, (true, false, true));
    }

    #[test]
    fn problem_messages() {
        assert_eq!(
            ValidationProblem::InvalidEmail.to_string(),
            "email address you entered doesn't contain @ sign"
        );
        assert_eq!(
            ValidationProblem::InvalidTicketCount.to_string(),
            "number of tickets you entered is invalid"
        );
    }

    #[test]
    fn length_modes_differ_on_multibyte_names() {
        assert_eq!(NameLengthMode::Bytes.measure("Jé"), 3);
        assert_eq!(NameLengthMode::Chars.measure("Jé"), 2);
        assert_eq!(NameLengthMode::Bytes.measure("Jo"), 2);
        assert_eq!(NameLengthMode::Chars.measure(""), 0);
    }

    #[test]
    fn parse_length_mode() {
        assert_eq!("bytes".parse::<NameLengthMode>(), Ok(NameLengthMode::Bytes));
        assert_eq!(" Chars ".parse::<NameLengthMode>(), Ok(NameLengthMode::Chars));
        assert!("graphemes".parse::<NameLengthMode>().is_err());
        assert_eq!(NameLengthMode::default().to_string(), "bytes");
    }
}
