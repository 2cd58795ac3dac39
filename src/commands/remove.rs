use crate::commands::cart::print_cart;
use crate::core::{
    context::StorefrontContext, error::Result, intent::CartIntent, print_notice, print_success,
};

pub fn execute_remove(context: &StorefrontContext, product_id: &str) -> Result<()> {
    let mut cart = context.open_cart();

    if cart.dispatch(CartIntent::remove(product_id)).changed {
        print_success(&format!("Removed {product_id} from cart"));
    } else {
        print_notice(&format!("{product_id} was not in the cart"));
    }

    print_cart(context, &cart);
    Ok(())
}
