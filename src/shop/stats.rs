//! Aggregate queries over the relationship graph.
//!
//! Everything here is computed lazily from the order lists; no derived state is
//! cached. Monetary sums go through [`rust_decimal::Decimal`] so that spend
//! comparisons are exact (3.33 + 3.33 + 3.34 really is 10.00).

use std::collections::HashSet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::domain::{CoffeeError, CoffeeId, CustomerError, CustomerId, OrderId};

use super::CoffeeShop;

impl CoffeeShop {
    /// Snapshot of a customer's orders, in placement order.
    ///
    /// The returned `Vec` is a defensive copy; mutating it never touches the
    /// shop.
    pub fn orders_for_customer(&self, id: CustomerId) -> Result<Vec<OrderId>, CustomerError> {
        let customer = self.customer(id).ok_or(CustomerError::NotFound(id))?;
        Ok(customer.orders().to_vec())
    }

    /// Snapshot of a coffee's orders, in placement order.
    pub fn orders_for_coffee(&self, id: CoffeeId) -> Result<Vec<OrderId>, CoffeeError> {
        let coffee = self.coffee(id).ok_or(CoffeeError::NotFound(id))?;
        Ok(coffee.orders().to_vec())
    }

    /// The distinct coffees a customer has ordered, deduplicated by *name* in
    /// first-seen order. Two coffees with the same name count once, represented
    /// by the one ordered first.
    pub fn coffees_for_customer(&self, id: CustomerId) -> Result<Vec<CoffeeId>, CustomerError> {
        let customer = self.customer(id).ok_or(CustomerError::NotFound(id))?;
        let mut seen = HashSet::new();
        let mut coffees = Vec::new();
        for &order_id in customer.orders() {
            let coffee_id = self.order_unchecked(order_id).coffee();
            // coffee is present by the shop invariant
            let name = self.coffees[coffee_id.0 as usize].name().to_string();
            if seen.insert(name) {
                coffees.push(coffee_id);
            }
        }
        Ok(coffees)
    }

    /// The distinct customers who ordered a coffee, deduplicated by identity.
    pub fn customers_for_coffee(&self, id: CoffeeId) -> Result<Vec<CustomerId>, CoffeeError> {
        let coffee = self.coffee(id).ok_or(CoffeeError::NotFound(id))?;
        let mut seen = HashSet::new();
        let mut customers = Vec::new();
        for &order_id in coffee.orders() {
            let customer_id = self.order_unchecked(order_id).customer();
            if seen.insert(customer_id) {
                customers.push(customer_id);
            }
        }
        Ok(customers)
    }

    /// Number of orders placed for a coffee.
    pub fn num_orders(&self, id: CoffeeId) -> Result<usize, CoffeeError> {
        let coffee = self.coffee(id).ok_or(CoffeeError::NotFound(id))?;
        Ok(coffee.orders().len())
    }

    /// Mean order price for a coffee, rounded to 2 decimal places; 0.0 when the
    /// coffee has no orders.
    pub fn average_price(&self, id: CoffeeId) -> Result<f64, CoffeeError> {
        let coffee = self.coffee(id).ok_or(CoffeeError::NotFound(id))?;
        if coffee.orders().is_empty() {
            return Ok(0.0);
        }
        let total: Decimal = coffee
            .orders()
            .iter()
            .map(|&o| self.order_unchecked(o).price_decimal())
            .sum();
        let mean = total / Decimal::from(coffee.orders().len() as u64);
        Ok(mean.round_dp(2).to_f64().unwrap_or_default())
    }

    /// The customer with the strictly greatest cumulative spend on a coffee.
    ///
    /// Customers are scanned in construction order, so a tie keeps the customer
    /// constructed first. Returns `Ok(None)` when nobody has ordered the coffee.
    pub fn most_aficionado(&self, id: CoffeeId) -> Result<Option<CustomerId>, CoffeeError> {
        if self.coffee(id).is_none() {
            return Err(CoffeeError::NotFound(id));
        }

        let mut best: Option<(CustomerId, Decimal)> = None;
        for customer in self.customers() {
            let mut spend = Decimal::ZERO;
            let mut ordered = false;
            for &order_id in customer.orders() {
                let order = self.order_unchecked(order_id);
                if order.coffee() == id {
                    spend += order.price_decimal();
                    ordered = true;
                }
            }
            if !ordered {
                continue;
            }
            match best {
                Some((_, top)) if spend <= top => {}
                _ => best = Some((customer.id(), spend)),
            }
        }
        Ok(best.map(|(winner, _)| winner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_price_uses_decimal_rounding() {
        let mut shop = CoffeeShop::new();
        let alice = shop.add_customer("Alice").unwrap();
        let latte = shop.add_coffee("Latte").unwrap();
        shop.place_order(alice, latte, 3.333).unwrap();
        shop.place_order(alice, latte, 6.666).unwrap();

        // mean 4.9995 rounds to 5.00 at 2 dp
        assert_eq!(shop.average_price(latte).unwrap(), 5.0);
    }

    #[test]
    fn aficionado_spend_is_exact() {
        let mut shop = CoffeeShop::new();
        let macchiato = shop.add_coffee("Macchiato").unwrap();
        let alice = shop.add_customer("Alice").unwrap();
        shop.place_order(alice, macchiato, 3.33).unwrap();
        shop.place_order(alice, macchiato, 3.33).unwrap();
        shop.place_order(alice, macchiato, 3.34).unwrap();
        let bob = shop.add_customer("Bob").unwrap();
        shop.place_order(bob, macchiato, 10.0).unwrap();

        // both spent exactly 10.00; Alice was constructed first
        assert_eq!(shop.most_aficionado(macchiato).unwrap(), Some(alice));
    }
}
