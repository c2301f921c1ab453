//! # The Shop Store
//!
//! [`CoffeeShop`] owns every entity in insertion-ordered arenas and is the only
//! place relationships are wired. Entities reference each other through typed IDs
//! instead of pointers, so there are no reference cycles to manage.
//!
//! ## Invariant
//!
//! At all times an order appears in the order list of exactly its current customer
//! and its current coffee, and in no other list. Every mutating operation here
//! validates its inputs before touching any list, so a failed call leaves the shop
//! exactly as it was.

mod stats;

use tracing::{debug, info};

use crate::domain::{
    Coffee, CoffeeError, CoffeeId, Customer, CustomerError, CustomerId, Order, OrderError, OrderId,
};

/// The in-memory store binding customers, coffees, and orders together.
///
/// IDs are handed out sequentially, so `id.0` doubles as the arena index and the
/// customer arena's order is construction order (which
/// [`most_aficionado`](CoffeeShop::most_aficionado) relies on for its tie-break).
///
/// # Example
///
/// ```
/// use coffee_shop::CoffeeShop;
///
/// let mut shop = CoffeeShop::new();
/// let alice = shop.add_customer("Alice")?;
/// let latte = shop.add_coffee("Latte")?;
/// let order = shop.place_order(alice, latte, 4.5)?;
///
/// assert_eq!(shop.orders_for_customer(alice)?, vec![order]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct CoffeeShop {
    customers: Vec<Customer>,
    coffees: Vec<Coffee>,
    orders: Vec<Order>,
}

impl CoffeeShop {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    /// Adds a customer with a validated, trimmed name.
    pub fn add_customer(&mut self, name: &str) -> Result<CustomerId, CustomerError> {
        let id = CustomerId(self.customers.len() as u32);
        let customer = Customer::new(id, name)?;
        info!(customer_id = %id, name = customer.name(), "Customer created");
        self.customers.push(customer);
        Ok(id)
    }

    /// Renames a customer, re-validating and re-trimming the new name.
    pub fn rename_customer(&mut self, id: CustomerId, name: &str) -> Result<(), CustomerError> {
        let customer = self
            .customers
            .get_mut(id.0 as usize)
            .ok_or(CustomerError::NotFound(id))?;
        customer.rename(name)?;
        debug!(customer_id = %id, name = customer.name(), "Customer renamed");
        Ok(())
    }

    /// Adds a coffee to the menu with a validated, trimmed name.
    pub fn add_coffee(&mut self, name: &str) -> Result<CoffeeId, CoffeeError> {
        let id = CoffeeId(self.coffees.len() as u32);
        let coffee = Coffee::new(id, name)?;
        info!(coffee_id = %id, name = coffee.name(), "Coffee created");
        self.coffees.push(coffee);
        Ok(id)
    }

    /// Places an order: validates the price, resolves both endpoints, then
    /// registers the order on the customer's and the coffee's lists.
    ///
    /// Validation runs price first, then customer, then coffee. Nothing is
    /// registered unless everything passes.
    pub fn place_order(
        &mut self,
        customer: CustomerId,
        coffee: CoffeeId,
        price: f64,
    ) -> Result<OrderId, OrderError> {
        let id = OrderId(self.orders.len() as u32);
        let order = Order::new(id, customer, coffee, price)?;
        if self.customer(customer).is_none() {
            return Err(OrderError::InvalidCustomer(customer));
        }
        if self.coffee(coffee).is_none() {
            return Err(OrderError::InvalidCoffee(coffee));
        }

        self.customers[customer.0 as usize].register(id);
        self.coffees[coffee.0 as usize].register(id);
        self.orders.push(order);
        info!(order_id = %id, customer_id = %customer, coffee_id = %coffee, price, "Order placed");
        Ok(id)
    }

    // -------------------------------------------------------------------------
    // Relationship maintenance
    // -------------------------------------------------------------------------

    /// Moves an order to another customer: removes it from the old customer's
    /// list, appends it to the new one, and updates the order's reference, as one
    /// unit.
    ///
    /// Reassigning to the current customer re-appends, moving the order to the
    /// end of the same list.
    pub fn reassign_customer(
        &mut self,
        order: OrderId,
        new_customer: CustomerId,
    ) -> Result<(), OrderError> {
        if self.customer(new_customer).is_none() {
            return Err(OrderError::InvalidCustomer(new_customer));
        }
        let old_customer = self
            .order(order)
            .ok_or(OrderError::NotFound(order))?
            .customer();

        self.customers[old_customer.0 as usize].unregister(order);
        self.customers[new_customer.0 as usize].register(order);
        self.orders[order.0 as usize].set_customer(new_customer);
        debug!(order_id = %order, from = %old_customer, to = %new_customer, "Order reassigned to customer");
        Ok(())
    }

    /// Moves an order to another coffee. Same contract as
    /// [`reassign_customer`](Self::reassign_customer).
    pub fn reassign_coffee(&mut self, order: OrderId, new_coffee: CoffeeId) -> Result<(), OrderError> {
        if self.coffee(new_coffee).is_none() {
            return Err(OrderError::InvalidCoffee(new_coffee));
        }
        let old_coffee = self
            .order(order)
            .ok_or(OrderError::NotFound(order))?
            .coffee();

        self.coffees[old_coffee.0 as usize].unregister(order);
        self.coffees[new_coffee.0 as usize].register(order);
        self.orders[order.0 as usize].set_coffee(new_coffee);
        debug!(order_id = %order, from = %old_coffee, to = %new_coffee, "Order reassigned to coffee");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(id.0 as usize)
    }

    pub fn coffee(&self, id: CoffeeId) -> Option<&Coffee> {
        self.coffees.get(id.0 as usize)
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(id.0 as usize)
    }

    /// Customers in construction order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Coffees in construction order.
    pub fn coffees(&self) -> &[Coffee] {
        &self.coffees
    }

    pub fn num_customers(&self) -> usize {
        self.customers.len()
    }

    pub fn num_coffees(&self) -> usize {
        self.coffees.len()
    }

    /// Total orders across the whole shop.
    pub fn num_orders_total(&self) -> usize {
        self.orders.len()
    }

    /// Resolves an order that is guaranteed present by the shop invariant
    /// (its ID came from one of our own order lists).
    pub(crate) fn order_unchecked(&self, id: OrderId) -> &Order {
        &self.orders[id.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_order_registers_both_sides() {
        let mut shop = CoffeeShop::new();
        let alice = shop.add_customer("Alice").unwrap();
        let latte = shop.add_coffee("Latte").unwrap();
        let order = shop.place_order(alice, latte, 4.5).unwrap();

        assert_eq!(shop.customer(alice).unwrap().orders(), [order]);
        assert_eq!(shop.coffee(latte).unwrap().orders(), [order]);
        assert_eq!(shop.order(order).unwrap().customer(), alice);
        assert_eq!(shop.order(order).unwrap().coffee(), latte);
    }

    #[test]
    fn failed_place_order_leaves_shop_unchanged() {
        let mut shop = CoffeeShop::new();
        let alice = shop.add_customer("Alice").unwrap();
        let latte = shop.add_coffee("Latte").unwrap();

        assert!(shop.place_order(alice, latte, 0.5).is_err());
        assert!(shop.place_order(alice, CoffeeId(42), 4.5).is_err());
        assert!(shop.place_order(CustomerId(42), latte, 4.5).is_err());

        assert_eq!(shop.num_orders_total(), 0);
        assert!(shop.customer(alice).unwrap().orders().is_empty());
        assert!(shop.coffee(latte).unwrap().orders().is_empty());
    }

    #[test]
    fn reassign_moves_order_between_customers() {
        let mut shop = CoffeeShop::new();
        let alice = shop.add_customer("Alice").unwrap();
        let bob = shop.add_customer("Bob").unwrap();
        let latte = shop.add_coffee("Latte").unwrap();
        let order = shop.place_order(alice, latte, 4.5).unwrap();

        shop.reassign_customer(order, bob).unwrap();

        assert!(shop.customer(alice).unwrap().orders().is_empty());
        assert_eq!(shop.customer(bob).unwrap().orders(), [order]);
        assert_eq!(shop.order(order).unwrap().customer(), bob);
    }

    #[test]
    fn reassign_to_same_customer_keeps_single_entry() {
        let mut shop = CoffeeShop::new();
        let alice = shop.add_customer("Alice").unwrap();
        let latte = shop.add_coffee("Latte").unwrap();
        let first = shop.place_order(alice, latte, 4.5).unwrap();
        let second = shop.place_order(alice, latte, 5.5).unwrap();

        shop.reassign_customer(first, alice).unwrap();

        // remove-then-append moves the order to the end
        assert_eq!(shop.customer(alice).unwrap().orders(), [second, first]);
    }
}
