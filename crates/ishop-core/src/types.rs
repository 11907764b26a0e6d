//! # Domain Types
//!
//! Catalog types used throughout iShop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐         ┌─────────────────┐                       │
//! │  │    Category     │ 1     * │    Product      │                       │
//! │  │  ─────────────  │────────►│  ─────────────  │                       │
//! │  │  id             │         │  id             │                       │
//! │  │  name           │         │  name           │                       │
//! │  │  image_url      │         │  price (Money)  │                       │
//! │  └─────────────────┘         │  description    │                       │
//! │                              │  image_url      │                       │
//! │                              └─────────────────┘                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Immutability
//! Fields are private and only readable through accessors. A product handed
//! to the cart is a value: the cart keeps its own clone and nobody can edit
//! an entry after it was added. Deserialization goes through the same
//! constructors, so a payload with a blank id or a negative price is
//! rejected instead of producing an invalid value.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_id, validate_image_url, validate_name, validate_price};

// =============================================================================
// Product
// =============================================================================

/// A product shown in a category listing and addable to the cart.
///
/// Equality is structural. Adding the same product twice still yields two
/// cart entries; the cart never merges lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "RawProduct")]
#[ts(export)]
pub struct Product {
    id: String,
    name: String,
    price: Money,
    description: Option<String>,
    image_url: Option<String>,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Errors
    /// - `id` blank, too long, or containing characters other than
    ///   letters, digits, `-` and `_`
    /// - `name` blank or longer than `MAX_NAME_LEN`
    /// - negative `price`
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> CoreResult<Self> {
        let id = id.into();
        let name = name.into();

        validate_id(&id)?;
        validate_name("name", &name)?;
        validate_price(price)?;

        Ok(Product {
            id,
            name: name.trim().to_string(),
            price,
            description: None,
            image_url: None,
        })
    }

    /// Creates a product with a fresh UUID v4 identifier.
    pub fn with_generated_id(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        Self::new(Uuid::new_v4().to_string(), name, price)
    }

    /// Attaches a description shown on the detail screen.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    /// Attaches the product image.
    pub fn with_image_url(mut self, url: impl Into<String>) -> CoreResult<Self> {
        let url = url.into();
        validate_image_url(&url)?;
        self.image_url = Some(url);
        Ok(self)
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

/// Wire shape of a [`Product`], validated on conversion.
#[derive(Deserialize)]
struct RawProduct {
    id: String,
    name: String,
    price: Money,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
}

impl TryFrom<RawProduct> for Product {
    type Error = CoreError;

    fn try_from(raw: RawProduct) -> CoreResult<Self> {
        let mut product = Product::new(raw.id, raw.name, raw.price)?;
        if let Some(description) = raw.description {
            product = product.with_description(description);
        }
        match raw.image_url {
            Some(url) => product.with_image_url(url),
            None => Ok(product),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A browsable group of products on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "RawCategory")]
#[ts(export)]
pub struct Category {
    id: String,
    name: String,
    image_url: Option<String>,
    products: Vec<Product>,
}

impl Category {
    /// Creates an empty, validated category.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> CoreResult<Self> {
        let id = id.into();
        let name = name.into();

        validate_id(&id)?;
        validate_name("category", &name)?;

        Ok(Category {
            id,
            name: name.trim().to_string(),
            image_url: None,
            products: Vec::new(),
        })
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> CoreResult<Self> {
        let url = url.into();
        validate_image_url(&url)?;
        self.image_url = Some(url);
        Ok(self)
    }

    /// Appends products to the listing, keeping the given order.
    pub fn with_products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products.extend(products);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Finds a product of this category by id.
    pub fn find_product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == product_id)
    }
}

/// Wire shape of a [`Category`]. Products are validated as they are read.
#[derive(Deserialize)]
struct RawCategory {
    id: String,
    name: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    products: Vec<Product>,
}

impl TryFrom<RawCategory> for Category {
    type Error = CoreError;

    fn try_from(raw: RawCategory) -> CoreResult<Self> {
        let category = Category::new(raw.id, raw.name)?.with_products(raw.products);
        match raw.image_url {
            Some(url) => category.with_image_url(url),
            None => Ok(category),
        }
    }
}
