//! # Booking
//!
//! Input validation for conference ticket bookings.
//!
//! A booking request carries a first name, a last name, an email address and
//! a ticket count. Validation produces three independent verdicts:
//!
//! | Check   | Passes when                              |
//! |---------|------------------------------------------|
//! | name    | both name parts are at least 2 long      |
//! | email   | the address contains `@`                 |
//! | tickets | `0 < ticket_count <= remaining tickets`  |
//!
//! Validation never fails with an error and never changes the inventory. The
//! remaining count comes from a [`TicketInventory`] owned by the caller, which
//! is responsible for selling tickets once a request is accepted.
//!
//! ## Example
//!
//! ```
//! use booking::{BookingRequest, InputValidator, SharedInventory, TicketInventory};
//!
//! let inventory = SharedInventory::new(5);
//! let validator = InputValidator::default();
//!
//! let request = BookingRequest::new("Jo", "Do", "jo@x.com", 5);
//! let verdict = validator.validate(&request, &inventory);
//! assert!(verdict.is_valid());
//!
//! inventory.sell(request.ticket_count).unwrap();
//! assert_eq!(inventory.remaining(), 0);
//!
//! let verdict = validator.validate(&BookingRequest::new("Jo", "Do", "jo@x.com", 1), &inventory);
//! assert!(!verdict.ticket_count_valid);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod inventory;
pub mod types;
pub mod validator;

pub use config::{Config, ValidatorConfig};
pub use inventory::{InventoryError, SharedInventory, TicketInventory};
pub use types::{
    BookingRequest, NameLengthMode, ParseNameLengthModeError, ValidationProblem,
    ValidationVerdict,
};
pub use validator::{validate_user_input, InputValidator};
