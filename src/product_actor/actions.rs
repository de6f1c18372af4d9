//! Custom actions for the Product actor.
//!
//! Both are read-only inventory queries; stock is only changed through a
//! regular update.

use crate::model::Product;

#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Number of products with `quantity <= minQuantity`.
    CountLowStock,
    /// The products at or below their minimum, emptiest first.
    LowStock,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    CountLowStock(i64),
    LowStock(Vec<Product>),
}
