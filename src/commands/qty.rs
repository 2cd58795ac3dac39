use crate::commands::cart::print_cart;
use crate::core::{
    context::StorefrontContext, error::Result, intent::CartIntent, print_notice, print_success,
};

/// Set an absolute quantity. Zero or a negative number removes the product.
pub fn execute_qty(context: &StorefrontContext, product_id: &str, quantity: i64) -> Result<()> {
    // Removal works for any id; setting a positive quantity needs a real product
    if quantity > 0 {
        context.require_product(product_id)?;
    }

    let mut cart = context.open_cart();
    let outcome = cart.dispatch(CartIntent::set_quantity(product_id, quantity));

    match (outcome.changed, cart.state().get(product_id)) {
        (true, Some(entry)) => {
            print_success(&format!("{product_id} quantity set to {}", entry.quantity))
        }
        (true, None) => print_success(&format!("Removed {product_id} from cart")),
        (false, _) => print_notice("Cart unchanged"),
    }

    print_cart(context, &cart);
    Ok(())
}
