use crate::commands::cart::CartBadge;
use crate::core::{
    context::StorefrontContext,
    error::Result,
    intent::CartIntent,
    print_info, print_notice, print_success,
};

pub fn execute_add(
    context: &StorefrontContext,
    product_ids: &[String],
    quantity: i64,
) -> Result<()> {
    // Validate every id up front so a typo adds nothing
    let products = product_ids
        .iter()
        .map(|id| context.require_product(id))
        .collect::<Result<Vec<_>>>()?;

    let badge = CartBadge::new();
    let mut cart = context.open_cart();
    badge.attach(&mut cart);

    for product in products {
        let outcome = cart.dispatch(CartIntent::add(&product.id, quantity));
        let held = cart.state().quantity(&product.id);

        if outcome.changed {
            print_success(&format!(
                "{} in cart: {} (max {})",
                product.title, held, product.stock
            ));
        } else if held == product.stock {
            print_notice(&format!(
                "{} is already at the stock limit ({})",
                product.title, product.stock
            ));
        } else {
            print_notice(&format!("Cart unchanged for {}", product.title));
        }
    }

    print_info(&format!("Cart: {} item(s)", badge.count()));
    Ok(())
}
