//! # Coffee Shop
//!
//! > **A small coffee-shop domain model with bidirectional relationship
//! > consistency.**
//!
//! Customers place orders for coffees at a price; aggregate statistics (average
//! price, unique coffees per customer, the "aficionado" with the highest spend)
//! are derived lazily from the resulting relationship graph.
//!
//! ## 🏗️ Design
//!
//! Three entities compose the object graph:
//! - [`Customer`](domain::Customer) — a validated name plus the orders placed.
//! - [`Coffee`](domain::Coffee) — a validated name plus the orders placed for it.
//! - [`Order`](domain::Order) — the join entity: one customer, one coffee, and a
//!   write-once price.
//!
//! Instead of reference cycles, entities point at each other through typed IDs
//! ([`CustomerId`](domain::CustomerId), [`CoffeeId`](domain::CoffeeId),
//! [`OrderId`](domain::OrderId)) and live in insertion-ordered arenas inside
//! [`CoffeeShop`]. The shop is the only place relationships change, which is what
//! keeps the core invariant: an order is always listed by exactly its current
//! customer and its current coffee, and by nobody else.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`domain`])
//! Pure entities with their IDs, validation rules, and per-entity error types.
//! Nothing in here can break the relationship invariant on its own: the mutators
//! are crate-private.
//!
//! ### 2. The Store ([`shop`])
//! [`CoffeeShop`] holds the arenas and implements creation, reassignment, and the
//! aggregate queries. Every mutating operation validates before it touches a
//! list, so failures leave the shop untouched.
//!
//! ### 3. Observability ([`trace`])
//! `tracing` setup for the demo binary. Library code emits structured events;
//! subscribers are up to the caller.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use coffee_shop::CoffeeShop;
//!
//! let mut shop = CoffeeShop::new();
//! let alice = shop.add_customer("Alice")?;
//! let latte = shop.add_coffee("Latte")?;
//! shop.place_order(alice, latte, 4.5)?;
//! shop.place_order(alice, latte, 5.5)?;
//!
//! assert_eq!(shop.average_price(latte)?, 5.0);
//! assert_eq!(shop.most_aficionado(latte)?, Some(alice));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod domain;
pub mod shop;
pub mod trace;

pub use domain::{
    Coffee, CoffeeError, CoffeeId, Customer, CustomerError, CustomerId, Order, OrderError, OrderId,
};
pub use shop::CoffeeShop;
