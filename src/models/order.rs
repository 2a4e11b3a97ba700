use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::models::cart::CartEntry;
use crate::utils::formatting::{format_order, NO_ORDERS_MESSAGE};

/// Most completed orders kept for the session.
pub const ORDER_LOG_CAPACITY: usize = 10;

/// A completed checkout. Never changes once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: u32,
    payment_method: String,
    line_items: Vec<CartEntry>,
    total: Decimal,
}

impl Order {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn line_items(&self) -> &[CartEntry] {
        &self.line_items
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderLogError {
    #[error("Maximum number of orders reached. Cannot store more orders.")]
    Full { capacity: usize },
}

/// Hands out order ids 1, 2, 3, ... for the lifetime of the session.
#[derive(Debug, Default)]
pub struct OrderSequence {
    last: u32,
}

impl OrderSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u32 {
        self.last += 1;
        debug!("Issued order ID {}", self.last);
        self.last
    }

    pub fn last_issued(&self) -> u32 {
        self.last
    }
}

#[derive(Debug, Default)]
pub struct OrderLog {
    orders: Vec<Order>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self {
            orders: Vec::with_capacity(ORDER_LOG_CAPACITY),
        }
    }

    pub fn set_order(
        &mut self,
        id: u32,
        payment_method: impl Into<String>,
        line_items: Vec<CartEntry>,
        total: Decimal,
    ) -> Result<(), OrderLogError> {
        if self.orders.len() >= ORDER_LOG_CAPACITY {
            error!("Order log full, order {} was not stored", id);
            return Err(OrderLogError::Full {
                capacity: ORDER_LOG_CAPACITY,
            });
        }

        let order = Order {
            id,
            payment_method: payment_method.into(),
            line_items,
            total,
        };
        info!(
            "Stored order {} ({} items, total {})",
            order.id,
            order.line_items.len(),
            order.total
        );
        self.orders.push(order);
        Ok(())
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn latest(&self) -> Option<&Order> {
        self.orders.last()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn render(&self) -> String {
        if self.is_empty() {
            return NO_ORDERS_MESSAGE.to_string();
        }
        self.orders
            .iter()
            .map(format_order)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
