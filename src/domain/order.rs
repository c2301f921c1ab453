//! The Order entity: the join between one [`Customer`](super::Customer) and one
//! [`Coffee`](super::Coffee) at a fixed price.
//!
//! An order's endpoints are reassignable, but only through
//! [`CoffeeShop`](crate::shop::CoffeeShop), which keeps both sides' order lists in
//! step. The price is write-once: it is validated at construction and there is no
//! mutator, so the compiler rejects any later change.

use std::fmt::Display;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coffee::CoffeeId;
use super::customer::CustomerId;

/// Lowest accepted price, inclusive.
pub const PRICE_MIN: f64 = 1.0;
/// Highest accepted price, inclusive.
pub const PRICE_MAX: f64 = 10.0;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The price is NaN or infinite.
    #[error("Order price must be a number, got {0}")]
    NotANumber(f64),

    /// The price is outside the accepted range.
    #[error("Order price must be between {PRICE_MIN} and {PRICE_MAX}, got {0}")]
    PriceOutOfRange(f64),

    /// The customer the order points at does not exist in the shop.
    #[error("Invalid customer: {0}")]
    InvalidCustomer(CustomerId),

    /// The coffee the order points at does not exist in the shop.
    #[error("Invalid coffee: {0}")]
    InvalidCoffee(CoffeeId),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),
}

/// One order: a customer, a coffee, and a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer: CustomerId,
    coffee: CoffeeId,
    price: f64,
}

impl Order {
    pub(crate) fn new(
        id: OrderId,
        customer: CustomerId,
        coffee: CoffeeId,
        price: f64,
    ) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            customer,
            coffee,
            price: validate_price(price)?,
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// The customer who placed the order.
    pub fn customer(&self) -> CustomerId {
        self.customer
    }

    /// The coffee the order is for.
    pub fn coffee(&self) -> CoffeeId {
        self.coffee
    }

    /// The price, fixed at construction.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// The price as an exact decimal, for spend accumulation and averaging.
    ///
    /// The price is validated finite at construction, so the conversion cannot
    /// fail in practice.
    pub(crate) fn price_decimal(&self) -> Decimal {
        Decimal::from_f64(self.price).unwrap_or_default()
    }

    pub(crate) fn set_customer(&mut self, customer: CustomerId) {
        self.customer = customer;
    }

    pub(crate) fn set_coffee(&mut self, coffee: CoffeeId) {
        self.coffee = coffee;
    }
}

pub(crate) fn validate_price(price: f64) -> Result<f64, OrderError> {
    if !price.is_finite() {
        return Err(OrderError::NotANumber(price));
    }
    if !(PRICE_MIN..=PRICE_MAX).contains(&price) {
        return Err(OrderError::PriceOutOfRange(price));
    }
    Ok(price)
}
