use crate::core::{
    cart::{CartManager, CartState},
    context::StorefrontContext,
    error::Result,
    print_section_header,
    store::KeyValueStore,
    templates::{render_template, TemplateContext, TEMPLATES},
};
use std::cell::Cell;

pub fn execute_cart(context: &StorefrontContext) -> Result<()> {
    let cart = context.open_cart();
    print_cart(context, &cart);
    Ok(())
}

/// Render the cart contents followed by the item count and total.
pub fn print_cart<S: KeyValueStore>(context: &StorefrontContext, cart: &CartManager<'_, S>) {
    let lines = cart.lines();

    if lines.is_empty() {
        println!(
            "\n{}\n",
            render_template(TEMPLATES.cart_empty, &TemplateContext::default())
        );
        return;
    }

    print_section_header("Cart");
    for line in &lines {
        let price = context.price(line.product.price);
        let line_total = context.price(line.line_total);
        let line_context = TemplateContext {
            product_id: Some(&line.product.id),
            title: Some(&line.product.title),
            price: Some(&price),
            quantity: Some(u64::from(line.quantity)),
            line_total: Some(&line_total),
            ..Default::default()
        };
        println!("{}", render_template(TEMPLATES.cart_line, &line_context));
    }

    let totals = cart.totals();
    let total = context.price(totals.total_price);
    let summary_context = TemplateContext {
        quantity: Some(totals.total_quantity),
        total: Some(&total),
        ..Default::default()
    };
    println!(
        "\n{}\n",
        render_template(TEMPLATES.cart_summary, &summary_context)
    );
}

/// Item counter kept current by a cart listener, like the header cart badge.
#[derive(Debug, Default)]
pub struct CartBadge {
    count: Cell<u64>,
}

impl CartBadge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `cart` so the badge follows every change.
    pub fn attach<'c, S: KeyValueStore>(&'c self, cart: &mut CartManager<'c, S>) {
        let catalog = cart.catalog();
        cart.subscribe(move |state: &CartState| {
            self.count.set(state.totals(catalog).total_quantity);
        });
    }

    pub fn count(&self) -> u64 {
        self.count.get()
    }
}
