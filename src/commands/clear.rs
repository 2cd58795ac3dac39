use crate::core::{context::StorefrontContext, error::Result, intent::CartIntent, print_success};

pub fn execute_clear(context: &StorefrontContext) -> Result<()> {
    let mut cart = context.open_cart();
    cart.dispatch(CartIntent::Clear);
    print_success("Cart cleared");
    Ok(())
}
