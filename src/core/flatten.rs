use crate::domain::model::{Catalog, OutputRow};

/// Normalize a free-text field before it enters a CSV cell: missing becomes
/// empty, embedded newlines become spaces, carriage returns are dropped.
/// Quote escaping is left to the CSV writer.
pub fn clean_text(text: Option<&str>) -> String {
    match text {
        None => String::new(),
        Some(s) => s.replace('\n', " ").replace('\r', ""),
    }
}

/// Flatten the catalog into one row per sellable unit: a row per variant when
/// a product has variants, otherwise a single row for the product itself.
///
/// Ids are assigned from a running counter starting at 1, in document order.
/// They are never derived from input fields. A variant with an empty name
/// falls back to the product name, same as an unnamed one.
pub fn flatten(catalog: &Catalog) -> Vec<OutputRow> {
    let mut rows = Vec::new();
    let mut next_id: u64 = 1;

    for category in &catalog.categories {
        let category_name = clean_text(category.name.as_deref());
        tracing::info!("📦 Processing category: {}", category_name);

        for product in &category.products {
            let product_name = clean_text(product.name.as_deref());
            let description = clean_text(product.description.as_deref());

            if product.variants.is_empty() {
                rows.push(OutputRow {
                    id: next_id,
                    name: product_name,
                    description,
                    price: product.price.unwrap_or(0.0),
                    category: category_name.clone(),
                    image: String::new(),
                });
                next_id += 1;
            } else {
                for variant in &product.variants {
                    let variant_name = clean_text(variant.name.as_deref());
                    let name = if variant_name.is_empty() {
                        product_name.clone()
                    } else {
                        variant_name
                    };

                    rows.push(OutputRow {
                        id: next_id,
                        name,
                        description: description.clone(),
                        price: variant.price.unwrap_or(0.0),
                        category: category_name.clone(),
                        image: String::new(),
                    });
                    next_id += 1;
                }
            }
        }
    }

    rows
}
