//! Booking input validation.
//!
//! Three independent checks run against a [`BookingRequest`]:
//!
//! - **Name**: first and last name are each at least two long
//! - **Email**: the address contains an `@` (nothing more is checked)
//! - **Tickets**: `0 < ticket_count <= remaining`
//!
//! Failures are reported as `false` verdicts, never as errors. The remaining
//! ticket count is read once per call and never modified.

use crate::config::ValidatorConfig;
use crate::inventory::TicketInventory;
use crate::types::{BookingRequest, NameLengthMode, ValidationVerdict};

/// Marker an email address must contain
pub const EMAIL_MARKER: char = '@';

/// Validates booking input against the stock rules.
///
/// Returns `(name_valid, email_valid, ticket_count_valid)`. Name length is
/// the UTF-8 byte length and must be at least 2 for both parts.
///
/// # Examples
///
/// ```
/// use booking::validate_user_input;
///
/// assert_eq!(validate_user_input("Jo", "Do", "jo@x.com", 5, 5), (true, true, true));
/// assert_eq!(validate_user_input("J", "Do", "jo.com", 0, 5), (false, false, false));
/// ```
#[must_use]
pub fn validate_user_input(
    first_name: &str,
    last_name: &str,
    email: &str,
    ticket_count: u32,
    remaining_tickets: u32,
) -> (bool, bool, bool) {
    InputValidator::default()
        .check(first_name, last_name, email, ticket_count, remaining_tickets)
        .as_tuple()
}

/// Stateless validator for booking requests.
///
/// Holds only its rules; inventory is passed in on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputValidator {
    config: ValidatorConfig,
}

impl InputValidator {
    /// Creates a validator with the given rules
    #[must_use]
    pub const fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the rules this validator applies
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `request` against the tickets currently left in `inventory`.
    #[must_use]
    pub fn validate<I>(&self, request: &BookingRequest, inventory: &I) -> ValidationVerdict
    where
        I: TicketInventory + ?Sized,
    {
        self.check(
            &request.first_name,
            &request.last_name,
            &request.email,
            request.ticket_count,
            inventory.remaining(),
        )
    }

    /// Validates loose fields against a remaining-ticket snapshot.
    #[must_use]
    pub fn check(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        ticket_count: u32,
        remaining_tickets: u32,
    ) -> ValidationVerdict {
        let verdict = ValidationVerdict::new(
            self.is_valid_name(first_name) && self.is_valid_name(last_name),
            is_valid_email(email),
            is_valid_ticket_count(ticket_count, remaining_tickets),
        );

        tracing::debug!(
            name_valid = verdict.name_valid,
            email_valid = verdict.email_valid,
            ticket_count_valid = verdict.ticket_count_valid,
            ticket_count,
            remaining_tickets,
            "Booking input validated"
        );

        verdict
    }

    fn is_valid_name(&self, name: &str) -> bool {
        self.length_mode().measure(name) >= self.config.min_name_length
    }

    const fn length_mode(&self) -> NameLengthMode {
        self.config.name_length_mode
    }
}

fn is_valid_email(email: &str) -> bool {
    email.contains(EMAIL_MARKER)
}

const fn is_valid_ticket_count(ticket_count: u32, remaining_tickets: u32) -> bool {
    ticket_count > 0 && ticket_count <= remaining_tickets
}
