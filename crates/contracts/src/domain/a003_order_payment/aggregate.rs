use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Платёж по заказу (у заказа может быть несколько платежей)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayment {
    pub order_id: String,
    pub payment_type: String,
    pub payment_value: f64,
}

/// Columns the order payments file must carry
pub const REQUIRED_COLUMNS: &[&str] = &["order_id", "payment_type", "payment_value"];
