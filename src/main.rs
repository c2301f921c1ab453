//! Demo entry point: walks a small scenario through the shop and logs the
//! derived statistics.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use coffee_shop::trace::setup_tracing;
use coffee_shop::CoffeeShop;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Opening the coffee shop");

    let mut shop = CoffeeShop::new();

    let alice = shop.add_customer("Alice")?;
    let bob = shop.add_customer("Bob")?;

    let latte = shop.add_coffee("Latte")?;
    let mocha = shop.add_coffee("Mocha")?;

    shop.place_order(alice, latte, 4.5)?;
    shop.place_order(alice, mocha, 5.0)?;
    shop.place_order(bob, latte, 3.5)?;

    let alices_coffees: Vec<&str> = shop
        .coffees_for_customer(alice)?
        .into_iter()
        .filter_map(|id| shop.coffee(id).map(|c| c.name()))
        .collect();
    info!(customer = "Alice", coffees = ?alices_coffees, "Unique coffees ordered");

    info!(
        coffee = "Latte",
        average_price = shop.average_price(latte)?,
        total_orders = shop.num_orders(latte)?,
        "Coffee statistics"
    );

    match shop.most_aficionado(latte)? {
        Some(id) => {
            // the winner came out of the customer arena, so the lookup succeeds
            let name = shop.customer(id).map(|c| c.name()).unwrap_or("?");
            info!(coffee = "Latte", aficionado = name, "Biggest spender");
        }
        None => info!(coffee = "Latte", "No orders yet"),
    }

    Ok(())
}
