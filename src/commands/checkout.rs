use crate::core::{
    checkout::{checkout, CheckoutDetails},
    context::StorefrontContext,
    error::Result,
    print_section_header, print_success,
};
use clap::Args;
use colored::*;

#[derive(Args, Debug, Clone)]
pub struct CheckoutArgs {
    /// Full name (3+ characters)
    #[arg(long)]
    pub name: String,

    /// Delivery address (3+ characters)
    #[arg(long)]
    pub address: String,

    /// Card number, exactly 16 digits
    #[arg(long)]
    pub card: String,

    /// City (2+ characters)
    #[arg(long)]
    pub city: String,
}

impl From<CheckoutArgs> for CheckoutDetails {
    fn from(args: CheckoutArgs) -> Self {
        Self {
            full_name: args.name,
            address: args.address,
            card_number: args.card,
            city: args.city,
        }
    }
}

pub fn execute_checkout(context: &StorefrontContext, args: CheckoutArgs) -> Result<()> {
    let details = CheckoutDetails::from(args);
    let mut cart = context.open_cart();
    let receipt = checkout(&mut cart, &details)?;

    print_section_header("Order summary");
    for line in &receipt.lines {
        println!(
            "   {} x {}  {}",
            line.quantity.to_string().white(),
            line.title.bold(),
            context.price(line.line_total).green()
        );
    }
    println!(
        "\n   {} {}",
        "Total:".blue(),
        context.price(receipt.totals.total_price).green().bold()
    );

    print_success(&format!(
        "Payment successful! Thank you, {}",
        receipt.customer
    ));
    Ok(())
}
