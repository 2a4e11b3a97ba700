use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Number of products the store always offers.
pub const CATALOG_SIZE: usize = 5;

/// Length of every product id.
pub const PRODUCT_ID_LEN: usize = 3;

lazy_static::lazy_static! {
    static ref PRODUCT_ID_REGEX: Regex = Regex::new(r"^[A-Z0-9]{3}$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Product {
    #[validate(length(equal = 3, message = "Product ID must be exactly 3 characters"))]
    #[validate(regex(
        path = "PRODUCT_ID_REGEX",
        message = "Product ID can only contain uppercase letters and digits"
    ))]
    id: String,

    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    name: String,

    #[validate(custom = "validate_price")]
    price: Decimal,
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("price_negative"));
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl AsRef<Product> for Product {
    fn as_ref(&self) -> &Product {
        self
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog must hold exactly {expected} products, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("Duplicate product ID: {id}")]
    DuplicateId { id: String },

    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] ProductError),
}

/// The fixed list of products on offer. Cart and order entries share the
/// catalog's products instead of copying them.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.len() != CATALOG_SIZE {
            return Err(CatalogError::WrongSize {
                expected: CATALOG_SIZE,
                actual: products.len(),
            });
        }

        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(CatalogError::DuplicateId {
                    id: product.id().to_string(),
                });
            }
        }

        Ok(Self {
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// The store's standard five-item catalog.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(vec![
            Product::new("ABC", "T-Shirt", Decimal::new(49999, 2))?,
            Product::new("CDE", "Pants", Decimal::new(79999, 2))?,
            Product::new("EFG", "Shoes", Decimal::new(149999, 2))?,
            Product::new("GHI", "Windbreaker", Decimal::new(129999, 2))?,
            Product::new("IJK", "Socks", Decimal::new(19999, 2))?,
        ])
    }

    /// Exact, case-sensitive id lookup.
    pub fn find(&self, id: &str) -> Option<Arc<Product>> {
        self.products.iter().find(|p| p.id() == id).cloned()
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }
}
