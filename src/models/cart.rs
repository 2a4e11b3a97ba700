use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::product::Product;
use crate::utils::formatting::{format_cart, EMPTY_CART_MESSAGE};

/// Most entries a cart can hold.
pub const CART_CAPACITY: usize = 5;

/// Allowed quantity per entry.
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub product: Arc<Product>,
    pub quantity: u32,
}

impl CartEntry {
    pub fn subtotal(&self) -> Decimal {
        self.product.price() * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Shopping cart is full!")]
    Full { capacity: usize },

    #[error("Quantity must be between {min} and {max}, got {quantity}")]
    InvalidQuantity { quantity: u32, min: u32, max: u32 },
}

#[derive(Debug, Default)]
pub struct ShoppingCart {
    entries: Vec<CartEntry>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(CART_CAPACITY),
        }
    }

    /// Appends a new entry. The same product may appear in several entries.
    pub fn add_to_cart(&mut self, product: Arc<Product>, quantity: u32) -> Result<(), CartError> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            return Err(CartError::InvalidQuantity {
                quantity,
                min: MIN_QUANTITY,
                max: MAX_QUANTITY,
            });
        }

        if self.entries.len() >= CART_CAPACITY {
            warn!(
                "Cart full, dropping {} x{}",
                product.id(),
                quantity
            );
            return Err(CartError::Full {
                capacity: CART_CAPACITY,
            });
        }

        info!("Adding {} x{} to cart", product.id(), quantity);
        self.entries.push(CartEntry { product, quantity });
        Ok(())
    }

    pub fn clear(&mut self) {
        debug!("Clearing cart with {} entries", self.entries.len());
        self.entries.clear();
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(CartEntry::subtotal).sum()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= CART_CAPACITY
    }

    pub fn render(&self) -> String {
        if self.is_empty() {
            return EMPTY_CART_MESSAGE.to_string();
        }
        format_cart(&self.entries, self.total())
    }
}
