//! Home screen catalog commands.

use serde::Serialize;
use tracing::debug;

use ishop_core::Product;

use crate::catalog::Catalog;
use crate::error::ApiError;

/// A category tile on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
    pub product_count: usize,
}

/// Lists the home screen categories.
pub fn list_categories(catalog: &Catalog) -> Vec<CategorySummary> {
    debug!("list_categories command");
    catalog
        .categories()
        .iter()
        .map(|c| CategorySummary {
            id: c.id().to_string(),
            name: c.name().to_string(),
            image_url: c.image_url().map(str::to_string),
            product_count: c.products().len(),
        })
        .collect()
}

/// Lists the products of one category.
pub fn list_products(catalog: &Catalog, category_id: &str) -> Result<Vec<Product>, ApiError> {
    debug!(category_id = %category_id, "list_products command");
    Ok(catalog.category(category_id)?.products().to_vec())
}

/// Gets a product for the detail screen.
pub fn get_product(catalog: &Catalog, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");
    Ok(catalog.find_product(product_id)?)
}
