use crate::core::{
    context::StorefrontContext,
    error::Result,
    templates::{render_template, TemplateContext, TEMPLATES},
};

/// Quick view of a single product.
pub fn execute_show(context: &StorefrontContext, product_id: &str) -> Result<()> {
    let product = context.require_product(product_id)?;
    let price = context.price(product.price);

    let title_context = TemplateContext {
        title: Some(&product.title),
        price: Some(&price),
        ..Default::default()
    };
    println!(
        "\n{}\n",
        render_template(TEMPLATES.quick_view_title, &title_context)
    );

    let rating = format!("{:.1}", product.rating);
    let stock = product.stock.to_string();
    let details = [
        ("Id", product.id.as_str()),
        ("Category", product.category.as_str()),
        ("Description", product.description.as_str()),
        ("Rating", rating.as_str()),
        ("In stock", stock.as_str()),
    ];
    for (label, value) in details {
        let detail_context = TemplateContext {
            label: Some(label),
            value: Some(value),
            ..Default::default()
        };
        println!(
            "{}",
            render_template(TEMPLATES.quick_view_detail, &detail_context)
        );
    }
    println!();

    Ok(())
}
