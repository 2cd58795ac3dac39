//! Message helpers shared by every command.
//!
//! Errors are red with a `✕` prefix, successes green with `✓`, notices yellow with
//! `!`. Each message is surrounded by blank lines so command output stays readable.

use colored::*;

/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Used for no-op outcomes such as adding past the stock limit.
pub fn print_notice(message: &str) {
    println!("\n{} {}", "!".yellow(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}
