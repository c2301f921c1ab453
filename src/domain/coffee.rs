//! The Coffee entity: a validated name plus the orders placed for it.
//!
//! Unlike [`Customer`](super::Customer), the name is fixed at construction.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::order::OrderId;

/// Minimum trimmed name length.
pub const NAME_MIN_CHARS: usize = 3;

/// Type-safe identifier for Coffees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoffeeId(pub u32);

impl From<u32> for CoffeeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CoffeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "coffee_{}", self.0)
    }
}

/// Errors that can occur during coffee operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoffeeError {
    /// The name is shorter than three characters after trimming.
    #[error("Coffee name must be at least {NAME_MIN_CHARS} characters: {0:?}")]
    InvalidName(String),

    /// The requested coffee was not found in the shop.
    #[error("Coffee not found: {0}")]
    NotFound(CoffeeId),
}

/// A coffee on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coffee {
    id: CoffeeId,
    name: String,
    orders: Vec<OrderId>,
}

impl Coffee {
    pub(crate) fn new(id: CoffeeId, name: &str) -> Result<Self, CoffeeError> {
        let trimmed = name.trim();
        if trimmed.chars().count() < NAME_MIN_CHARS {
            return Err(CoffeeError::InvalidName(name.to_string()));
        }
        Ok(Self {
            id,
            name: trimmed.to_string(),
            orders: Vec::new(),
        })
    }

    pub fn id(&self) -> CoffeeId {
        self.id
    }

    /// The trimmed name, fixed at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Orders in placement order.
    pub fn orders(&self) -> &[OrderId] {
        &self.orders
    }

    pub(crate) fn register(&mut self, order: OrderId) {
        self.orders.push(order);
    }

    pub(crate) fn unregister(&mut self, order: OrderId) {
        self.orders.retain(|&o| o != order);
    }
}
