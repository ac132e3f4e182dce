use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Позиция заказа: один товар одного продавца
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    pub order_item_id: String,
    pub seller_id: String,

    // Sums
    pub price: f64,
    pub freight_value: f64,
}

/// Columns the order items file must carry
pub const REQUIRED_COLUMNS: &[&str] = &[
    "order_id",
    "seller_id",
    "price",
    "freight_value",
    "order_item_id",
];

