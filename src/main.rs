use clap::{Parser, Subcommand};
use nexbuy::commands::*;
use nexbuy::core::{
    context::{StorefrontContext, StorefrontInit},
    error::{NexbuyError, Result},
    print_error,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nexbuy")]
#[command(about = "Browse the NexBuy catalog and manage your cart from the terminal")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Directory holding the saved cart and session
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort the catalog
    Products(ProductsArgs),
    /// Quick view of one product
    Show {
        /// Product id (e.g. "p1")
        id: String,
    },
    /// Show cart contents and totals
    Cart,
    /// Add products to the cart
    Add {
        /// Product ids (e.g. "p1 p5")
        #[arg(required = true)]
        ids: Vec<String>,
        /// Units to add per product
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        qty: i64,
    },
    /// Set the quantity of a product; zero or less removes it
    Qty {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a product from the cart
    Remove { id: String },
    /// Empty the cart
    Clear,
    /// Pay for the cart (simulated)
    Checkout(CheckoutArgs),
    /// Sign in (simulated)
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
}

fn run(context: &StorefrontContext, command: Commands) -> Result<()> {
    match command {
        Commands::Products(args) => execute_products(context, &args),
        Commands::Show { id } => execute_show(context, &id),
        Commands::Cart => execute_cart(context),
        Commands::Add { ids, qty } => execute_add(context, &ids, qty),
        Commands::Qty { id, quantity } => execute_qty(context, &id, quantity),
        Commands::Remove { id } => execute_remove(context, &id),
        Commands::Clear => execute_clear(context),
        Commands::Checkout(args) => execute_checkout(context, args),
        Commands::Login { email, password } => execute_login(context, &email, &password),
        Commands::Logout => execute_logout(context),
        Commands::Whoami => execute_whoami(context),
    }
}

fn report(e: &NexbuyError) -> ! {
    if let NexbuyError::NotSignedIn = e {
        print_error("Not signed in. Use 'nexbuy login' first");
    } else {
        print_error(&e.to_string());
    }
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let context = match StorefrontInit::initialize(cli.data_dir.as_deref()) {
        Ok(context) => context,
        Err(e) => report(&e),
    };

    if let Err(e) = run(&context, cli.command) {
        report(&e);
    }
}
