use crate::core::{
    catalog::Product,
    context::StorefrontContext,
    error::Result,
    query::{run_query, CategoryFilter, FilterSpec, SortMode},
    templates::{render_template, TemplateContext, TEMPLATES},
};
use clap::Args;

#[derive(Args, Debug, Default, Clone)]
pub struct ProductsArgs {
    /// Case-insensitive text matched against title, description and category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show a single category ("all" for every category)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Comma-separated categories to include (defaults to all of them)
    #[arg(short, long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Highest price to show
    #[arg(short = 'm', long)]
    pub max_price: Option<u64>,

    /// price-asc, price-desc, name-asc or relevance
    #[arg(long, default_value = "relevance")]
    pub sort: String,
}

impl ProductsArgs {
    /// Build the query, starting from the reset filters.
    pub fn to_filter_spec(&self, context: &StorefrontContext) -> FilterSpec {
        let mut spec = context.default_filters();

        if let Some(search) = &self.search {
            spec = spec.with_search(search);
        }
        if let Some(category) = &self.category {
            spec = spec.with_category(CategoryFilter::from(category.as_str()));
        }
        if !self.include.is_empty() {
            spec = spec.with_included(self.include.iter().map(|c| c.trim().to_string()));
        }
        if let Some(max_price) = self.max_price {
            spec = spec.with_max_price(max_price);
        }

        // Unrecognised values fall back to relevance
        let sort_mode = self.sort.parse::<SortMode>().unwrap_or_default();
        spec.with_sort(sort_mode)
    }
}

pub fn execute_products(context: &StorefrontContext, args: &ProductsArgs) -> Result<()> {
    let spec = args.to_filter_spec(context);
    log::debug!("Running product query: {spec:?}");

    let results = run_query(&context.catalog, &spec);
    render_results(context, &results);

    Ok(())
}

/// Print one line per product, or the empty-results notice.
pub fn render_results(context: &StorefrontContext, results: &[&Product]) {
    if results.is_empty() {
        println!(
            "\n{}\n",
            render_template(TEMPLATES.no_results, &TemplateContext::default())
        );
        return;
    }

    let total = context.catalog.len().to_string();
    let header_context = TemplateContext {
        count: Some(results.len()),
        total: Some(&total),
        ..Default::default()
    };
    println!(
        "\n{}\n",
        render_template(TEMPLATES.results_header, &header_context)
    );

    for product in results {
        let price = context.price(product.price);
        let line_context = TemplateContext {
            product_id: Some(&product.id),
            title: Some(&product.title),
            category: Some(&product.category),
            price: Some(&price),
            rating: Some(product.rating),
            stock: Some(product.stock),
            ..Default::default()
        };
        println!("{}", render_template(TEMPLATES.product_line, &line_context));
    }
    println!();
}
