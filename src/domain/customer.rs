//! The Customer entity: a validated name plus the orders the customer placed.
//!
//! The order list is maintained exclusively by [`CoffeeShop`](crate::shop::CoffeeShop)
//! relationship operations; nothing outside the crate can push into it directly.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::order::OrderId;

/// Minimum trimmed name length.
pub const NAME_MIN_CHARS: usize = 1;
/// Maximum trimmed name length.
pub const NAME_MAX_CHARS: usize = 15;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The name is empty or too long after trimming.
    #[error("Customer name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters: {0:?}")]
    InvalidName(String),

    /// The requested customer was not found in the shop.
    #[error("Customer not found: {0}")]
    NotFound(CustomerId),
}

/// A customer of the shop.
///
/// The name is trimmed on the way in and re-validated on every rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    orders: Vec<OrderId>,
}

impl Customer {
    pub(crate) fn new(id: CustomerId, name: &str) -> Result<Self, CustomerError> {
        Ok(Self {
            id,
            name: validate_name(name)?,
            orders: Vec::new(),
        })
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    /// The trimmed name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Orders in placement order.
    ///
    /// This borrows internal state read-only; use
    /// [`CoffeeShop::orders_for_customer`](crate::shop::CoffeeShop::orders_for_customer)
    /// for an owned snapshot.
    pub fn orders(&self) -> &[OrderId] {
        &self.orders
    }

    pub(crate) fn rename(&mut self, name: &str) -> Result<(), CustomerError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub(crate) fn register(&mut self, order: OrderId) {
        self.orders.push(order);
    }

    pub(crate) fn unregister(&mut self, order: OrderId) {
        self.orders.retain(|&o| o != order);
    }
}

fn validate_name(name: &str) -> Result<String, CustomerError> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(CustomerError::InvalidName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let customer = Customer::new(CustomerId(0), "  Alice  ").unwrap();
        assert_eq!(customer.name(), "Alice");
    }

    #[test]
    fn rejects_empty_and_whitespace_names() {
        assert!(matches!(
            Customer::new(CustomerId(0), ""),
            Err(CustomerError::InvalidName(_))
        ));
        assert!(matches!(
            Customer::new(CustomerId(0), "   "),
            Err(CustomerError::InvalidName(_))
        ));
    }

    #[test]
    fn rejects_names_longer_than_fifteen_chars() {
        let name = "A".repeat(16);
        assert!(matches!(
            Customer::new(CustomerId(0), &name),
            Err(CustomerError::InvalidName(_))
        ));
        // 15 is still fine
        assert!(Customer::new(CustomerId(0), &"A".repeat(15)).is_ok());
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 15 multibyte characters must pass
        let name = "é".repeat(15);
        assert!(Customer::new(CustomerId(0), &name).is_ok());
    }

    #[test]
    fn failed_rename_keeps_previous_name() {
        let mut customer = Customer::new(CustomerId(0), "Alice").unwrap();
        assert!(customer.rename("").is_err());
        assert_eq!(customer.name(), "Alice");
    }
}
