pub mod add;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod clear;
pub mod products;
pub mod qty;
pub mod remove;
pub mod show;

pub use add::*;
pub use auth::*;
pub use cart::*;
pub use checkout::*;
pub use clear::*;
pub use products::*;
pub use qty::*;
pub use remove::*;
pub use show::*;
