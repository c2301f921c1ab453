//! Pure data structures for the coffee-shop domain: [`Customer`], [`Coffee`], and
//! the [`Order`] join entity, each with a type-safe ID and its own error type.

pub mod coffee;
pub mod customer;
pub mod order;

pub use coffee::{Coffee, CoffeeError, CoffeeId};
pub use customer::{Customer, CustomerError, CustomerId};
pub use order::{Order, OrderError, OrderId};
