//! Price display.

/// Render an amount as `<symbol><digits>` with `,` between thousands groups.
pub fn format_price(amount: u64, symbol: &str) -> String {
    let mut buffer = itoa::Buffer::new();
    let digits = buffer.format(amount);

    let mut result = String::with_capacity(symbol.len() + digits.len() + digits.len() / 3);
    result.push_str(symbol);

    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(format_price(0, "₹"), "₹0");
        assert_eq!(format_price(349, "₹"), "₹349");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_price(1299, "₹"), "₹1,299");
        assert_eq!(format_price(15999, "₹"), "₹15,999");
        assert_eq!(format_price(15588, "$"), "$15,588");
        assert_eq!(format_price(100000, ""), "100,000");
        assert_eq!(format_price(1234567, "₹"), "₹1,234,567");
    }
}
