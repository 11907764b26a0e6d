//! Mock product catalog backing the home screen.

use ishop_core::{Category, CoreError, CoreResult, Money, Product};

/// Categories and products shown on the home screen.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Catalog { categories }
    }

    /// Built-in demo catalog.
    pub fn mock() -> CoreResult<Self> {
        let men = Category::new("men", "Men")?
            .with_image_url("https://cdn.ishop.example/categories/men.jpg")?
            .with_products(vec![
                Product::new("oxford-shirt", "Oxford Shirt", Money::from_major_minor(29, 99))?
                    .with_description("Slim fit, 100% cotton"),
                Product::new("denim-jacket", "Denim Jacket", Money::from_major_minor(79, 0))?,
            ]);

        let women = Category::new("women", "Women")?
            .with_image_url("https://cdn.ishop.example/categories/women.jpg")?
            .with_products(vec![
                Product::new("summer-dress", "Summer Dress", Money::from_major_minor(49, 50))?,
                Product::new("linen-scarf", "Linen Scarf", Money::from_major_minor(15, 0))?,
            ]);

        let home = Category::new("home", "Home")?.with_products(vec![
            Product::new("stoneware-mug", "Stoneware Mug", Money::from_major_minor(8, 99))?
                .with_description("350ml, dishwasher safe"),
        ]);

        Ok(Catalog::new(vec![men, women, home]))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks a category up by id.
    pub fn category(&self, category_id: &str) -> CoreResult<&Category> {
        self.categories
            .iter()
            .find(|c| c.id() == category_id)
            .ok_or_else(|| CoreError::CategoryNotFound(category_id.to_string()))
    }

    /// Looks a product up across all categories. Returns an owned copy ready
    /// to be added to the cart.
    pub fn find_product(&self, product_id: &str) -> CoreResult<Product> {
        self.categories
            .iter()
            .find_map(|c| c.find_product(product_id))
            .cloned()
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))
    }

    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|c| c.products().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_catalog_builds() {
        let catalog = Catalog::mock().unwrap();
        assert_eq!(catalog.categories().len(), 3);
        assert_eq!(catalog.product_count(), 5);
    }

    #[test]
    fn test_find_product() {
        let catalog = Catalog::mock().unwrap();

        let shirt = catalog.find_product("oxford-shirt").unwrap();
        assert_eq!(shirt.name(), "Oxford Shirt");
        assert_eq!(shirt.price().to_string(), "$29.99");

        let err = catalog.find_product("missing").unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(ref id) if id == "missing"));
    }

    #[test]
    fn test_category_lookup() {
        let catalog = Catalog::mock().unwrap();
        assert_eq!(catalog.category("women").unwrap().products().len(), 2);
        assert!(matches!(
            catalog.category("kids"),
            Err(CoreError::CategoryNotFound(_))
        ));
    }
}
