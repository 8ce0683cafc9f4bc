//! Ticket inventory seen by the validator.
//!
//! Validation only ever reads the remaining count through [`TicketInventory`].
//! The caller owns the counter and decrements it after a booking is accepted,
//! typically through [`SharedInventory::sell`].

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Read access to the number of tickets still for sale.
pub trait TicketInventory {
    /// Tickets still available at the time of the call
    fn remaining(&self) -> u32;
}

/// A plain number is a snapshot of the inventory.
impl TicketInventory for u32 {
    fn remaining(&self) -> u32 {
        *self
    }
}

impl<T: TicketInventory + ?Sized> TicketInventory for &T {
    fn remaining(&self) -> u32 {
        (**self).remaining()
    }
}

impl<T: TicketInventory + ?Sized> TicketInventory for Arc<T> {
    fn remaining(&self) -> u32 {
        (**self).remaining()
    }
}

/// Errors returned when selling from a [`SharedInventory`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryError {
    /// Zero tickets cannot be sold
    #[error("Cannot sell zero tickets")]
    ZeroQuantity,

    /// Not enough tickets left
    #[error("Insufficient tickets: requested {requested}, remaining {remaining}")]
    Insufficient {
        /// Tickets requested
        requested: u32,
        /// Tickets left when the sale was attempted
        remaining: u32,
    },
}

/// Process-wide remaining-ticket counter.
///
/// Cloning shares the same counter. Sales are atomic, so concurrent sellers
/// can never push the count below zero.
#[derive(Clone, Debug)]
pub struct SharedInventory {
    remaining: Arc<AtomicU32>,
}

impl SharedInventory {
    /// Creates an inventory holding `total` tickets
    #[must_use]
    pub fn new(total: u32) -> Self {
        Self {
            remaining: Arc::new(AtomicU32::new(total)),
        }
    }

    /// Removes `quantity` tickets and returns how many are left.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ZeroQuantity`] for a zero quantity and
    /// [`InventoryError::Insufficient`] when fewer than `quantity` tickets
    /// remain. The count is unchanged on error.
    pub fn sell(&self, quantity: u32) -> Result<u32, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::ZeroQuantity);
        }

        let previous = self
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current.checked_sub(quantity)
            })
            .map_err(|remaining| InventoryError::Insufficient {
                requested: quantity,
                remaining,
            })?;

        let left = previous - quantity;
        tracing::info!(sold = quantity, remaining = left, "Tickets sold");
        Ok(left)
    }
}

impl TicketInventory for SharedInventory {
    fn remaining(&self) -> u32 {
        self.remaining.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reports_itself() {
        assert_eq!(5_u32.remaining(), 5);
        assert_eq!((&0_u32).remaining(), 0);
    }

    #[test]
    fn sell_decrements() {
        let inventory = SharedInventory::new(50);
        assert_eq!(inventory.sell(3), Ok(47));
        assert_eq!(inventory.remaining(), 47);
    }

    #[test]
    fn sell_everything_left() {
        let inventory = SharedInventory::new(2);
        assert_eq!(inventory.sell(2), Ok(0));
        assert_eq!(inventory.remaining(), 0);
    }

    #[test]
    fn sell_rejects_zero() {
        let inventory = SharedInventory::new(5);
        assert_eq!(inventory.sell(0), Err(InventoryError::ZeroQuantity));
        assert_eq!(inventory.remaining(), 5);
    }

    #[test]
    fn sell_rejects_oversell() {
        let inventory = SharedInventory::new(5);
        assert_eq!(
            inventory.sell(6),
            Err(InventoryError::Insufficient {
                requested: 6,
                remaining: 5
            })
        );
        assert_eq!(inventory.remaining(), 5);
    }

    #[test]
    fn clones_share_the_counter() {
        let inventory = SharedInventory::new(10);
        let other = inventory.clone();
        assert_eq!(other.sell(4), Ok(6));
        assert_eq!(inventory.remaining(), 6);

        let shared: Arc<SharedInventory> = Arc::new(inventory);
        assert_eq!(shared.remaining(), 6);
    }
}
