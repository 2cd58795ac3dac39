//! Shared utilities for nexbuy integration tests
//!
//! Every test gets its own temporary `NEXBUY_HOME`, so saved carts and sessions
//! never leak between tests or into the user's real data directory.

pub mod assertions;
pub mod fixtures;
pub mod storefront;
