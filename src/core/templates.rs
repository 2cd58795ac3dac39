//! Template system for consistent storefront output.
//!
//! Templates are plain strings with `{placeholder}` slots. Rendering happens in a
//! single pass, then colours are applied according to which template was used.
//!
//! # Public API
//! - [`Templates`]: Template definitions for every output line
//! - [`TemplateContext`]: Values to substitute
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Render with colours
//! - [`render_template_plain`]: Render without colours (tests, piping)
//! - [`strip_ansi_codes`]: Remove colour escape sequences

use colored::*;
use std::fmt::Write;

/// Template definitions for all output formatting
pub struct Templates {
    // Product listing
    pub results_header: &'static str,
    pub product_line: &'static str,
    pub no_results: &'static str,

    // Quick view
    pub quick_view_title: &'static str,
    pub quick_view_detail: &'static str,

    // Cart
    pub cart_line: &'static str,
    pub cart_summary: &'static str,
    pub cart_empty: &'static str,

    // Session
    pub greeting: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    results_header: "Showing {count} of {total} products",
    product_line: "   [{product_id}] {title} ({category}) {price} ★{rating} · {stock} in stock",
    no_results: "No products found",
    quick_view_title: "{title} {price}",
    quick_view_detail: "   {label}: {value}",
    cart_line: "   [{product_id}] {title}  {price} x {quantity} = {line_total}",
    cart_summary: "Items: {quantity}  Total: {total}",
    cart_empty: "Your cart is empty",
    greeting: "Hi, {name}",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub product_id: Option<&'a str>,
    pub title: Option<&'a str>,
    pub category: Option<&'a str>,
    pub price: Option<&'a str>,
    pub rating: Option<f32>,
    pub stock: Option<u32>,
    pub quantity: Option<u64>,
    pub line_total: Option<&'a str>,
    pub total: Option<&'a str>,
    pub name: Option<&'a str>,
    pub label: Option<&'a str>,
    pub value: Option<&'a str>,
    pub count: Option<usize>,
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let mut rendered = String::with_capacity(template.len() + 64);
    render_template_single_pass(template, context, &mut rendered);
    apply_colors(&rendered, template, context)
}

fn push_str_value(output: &mut String, value: Option<&str>) {
    if let Some(value) = value {
        output.push_str(value);
    }
}

fn push_display_value<T: std::fmt::Display>(output: &mut String, value: Option<T>) {
    if let Some(value) = value {
        let _ = write!(output, "{value}");
    }
}

fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            // No closing brace, keep the remainder literally
            output.push_str(&rest[open..]);
            return;
        };

        let placeholder = &after_open[..close];
        match placeholder {
            "product_id" => push_str_value(output, context.product_id),
            "title" => push_str_value(output, context.title),
            "category" => push_str_value(output, context.category),
            "price" => push_str_value(output, context.price),
            "rating" => {
                if let Some(rating) = context.rating {
                    let _ = write!(output, "{rating:.1}");
                }
            }
            "stock" => push_display_value(output, context.stock),
            "quantity" => push_display_value(output, context.quantity),
            "line_total" => push_str_value(output, context.line_total),
            "total" => push_str_value(output, context.total),
            "name" => push_str_value(output, context.name),
            "label" => push_str_value(output, context.label),
            "value" => push_str_value(output, context.value),
            "count" => push_display_value(output, context.count),
            _ => {
                // Unknown placeholder, keep as-is
                output.push('{');
                output.push_str(placeholder);
                output.push('}');
            }
        }

        rest = &after_open[close + 1..];
    }

    output.push_str(rest);
}

fn apply_colors(text: &str, template: &str, context: &TemplateContext) -> String {
    let mut result = String::with_capacity(text.len() + 64);

    match template {
        t if t == TEMPLATES.product_line => {
            let _ = write!(
                result,
                "   {}{}{} {} {} {} {} {}",
                "[".bright_black(),
                context.product_id.unwrap_or_default().white(),
                "]".bright_black(),
                context.title.unwrap_or_default().bold(),
                format!("({})", context.category.unwrap_or_default()).cyan(),
                context.price.unwrap_or_default().green(),
                format!("★{:.1}", context.rating.unwrap_or_default()).yellow(),
                format!("· {} in stock", context.stock.unwrap_or_default()).bright_black(),
            );
        }
        t if t == TEMPLATES.cart_line => {
            let _ = write!(
                result,
                "   {}{}{} {}  {} x {} = {}",
                "[".bright_black(),
                context.product_id.unwrap_or_default().white(),
                "]".bright_black(),
                context.title.unwrap_or_default().bold(),
                context.price.unwrap_or_default().green(),
                context.quantity.unwrap_or_default().to_string().white(),
                context.line_total.unwrap_or_default().green(),
            );
        }
        t if t == TEMPLATES.cart_summary => {
            let _ = write!(
                result,
                "{} {}  {} {}",
                "Items:".blue(),
                context.quantity.unwrap_or_default().to_string().white(),
                "Total:".blue(),
                context.total.unwrap_or_default().green().bold(),
            );
        }
        t if t == TEMPLATES.quick_view_title => {
            let _ = write!(
                result,
                "{} {}",
                context.title.unwrap_or_default().bold(),
                context.price.unwrap_or_default().green(),
            );
        }
        t if t == TEMPLATES.no_results || t == TEMPLATES.cart_empty => {
            let _ = write!(result, "{}", text.bright_black());
        }
        t if t == TEMPLATES.greeting => {
            let _ = write!(result, "Hi, {}", context.name.unwrap_or_default().blue());
        }
        _ => result.push_str(text),
    }

    result
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Render template without colors
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    strip_ansi_codes(&render_template(template, context))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_product_line() {
        let context = TemplateContext {
            product_id: Some("p1"),
            title: Some("Wireless Headphones"),
            category: Some("electronics"),
            price: Some("₹1,299"),
            rating: Some(4.4),
            stock: Some(12),
            ..Default::default()
        };
        let result = render_template_plain(TEMPLATES.product_line, &context);
        assert_eq!(
            result,
            "   [p1] Wireless Headphones (electronics) ₹1,299 ★4.4 · 12 in stock"
        );
    }

    #[test]
    fn test_render_cart_line() {
        let context = TemplateContext {
            product_id: Some("p5"),
            title: Some("Pet Shampoo"),
            price: Some("₹349"),
            quantity: Some(3),
            line_total: Some("₹1,047"),
            ..Default::default()
        };
        let result = render_template_plain(TEMPLATES.cart_line, &context);
        assert_eq!(result, "   [p5] Pet Shampoo  ₹349 x 3 = ₹1,047");
    }

    #[test]
    fn test_render_cart_summary() {
        let context = TemplateContext {
            quantity: Some(12),
            total: Some("₹15,588"),
            ..Default::default()
        };
        let result = render_template_plain(TEMPLATES.cart_summary, &context);
        assert_eq!(result, "Items: 12  Total: ₹15,588");
    }

    #[test]
    fn test_render_results_header_uses_plain_path() {
        let context = TemplateContext {
            count: Some(2),
            total: None,
            ..Default::default()
        };
        let result = render_template_plain("Showing {count} products", &context);
        assert_eq!(result, "Showing 2 products");
    }

    #[test]
    fn test_greeting() {
        let context = TemplateContext {
            name: Some("asha"),
            ..Default::default()
        };
        assert_eq!(render_template_plain(TEMPLATES.greeting, &context), "Hi, asha");
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let mut output = String::new();
        render_template_single_pass("Hello {unknown}!", &TemplateContext::default(), &mut output);
        assert_eq!(output, "Hello {unknown}!");
    }

    #[test]
    fn test_malformed_placeholder_kept() {
        let mut output = String::new();
        render_template_single_pass("Hello {incomplete", &TemplateContext::default(), &mut output);
        assert_eq!(output, "Hello {incomplete");
    }

    #[test]
    fn test_multibyte_text_around_placeholders() {
        let mut output = String::new();
        let context = TemplateContext {
            label: Some("Rating"),
            value: Some("★4.6"),
            ..Default::default()
        };
        render_template_single_pass("→ {label}: {value} ←", &context, &mut output);
        assert_eq!(output, "→ Rating: ★4.6 ←");
    }

    #[test]
    fn test_strip_ansi_codes() {
        let colored = format!("{} {}", "red".red(), "blue".blue());
        assert_eq!(strip_ansi_codes(&colored), "red blue");
    }
}
