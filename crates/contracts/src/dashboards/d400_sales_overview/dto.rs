use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::projections::p900_order_ledger::OrderRecord;
use crate::shared::date_range::{DateRange, EndBound};

/// Request for the sales overview dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOverviewRequest {
    /// Picker range; `None` means the full span of the data
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub end_bound: EndBound,
    /// How many sellers go into the top list
    #[serde(default = "default_top_sellers")]
    pub top_sellers: usize,
    /// ISO currency code used for display strings (e.g. "IDR")
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Include filtered ledger rows in the response
    #[serde(default)]
    pub include_rows: bool,
}

fn default_top_sellers() -> usize {
    10
}

fn default_currency() -> String {
    "IDR".to_string()
}

impl Default for SalesOverviewRequest {
    fn default() -> Self {
        Self {
            date_range: None,
            end_bound: EndBound::default(),
            top_sellers: default_top_sellers(),
            currency: default_currency(),
            include_rows: false,
        }
    }
}

/// Response for the sales overview dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOverviewResponse {
    /// Range actually applied, `None` when the ledger is empty and no range was given
    pub date_range: Option<DateRange>,
    /// Min/max purchase dates present in the ledger
    pub data_bounds: Option<DateRange>,
    pub metrics: OverviewMetrics,
    pub daily_orders: Vec<DailyOrders>,
    /// All sellers, revenue descending
    pub seller_performance: Vec<SellerSummary>,
    /// First `top_sellers` entries of `seller_performance`
    pub top_sellers: Vec<SellerSummary>,
    pub payment_methods: Vec<PaymentSummary>,
    /// Filtered rows, empty unless requested
    #[serde(default)]
    pub rows: Vec<OrderRecord>,
}

/// Итоговые показатели за выбранный период
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewMetrics {
    pub total_orders: usize,
    pub total_revenue: f64,
    /// Localized currency string, e.g. "Rp1.234,50"
    pub total_revenue_display: String,
}

/// Выручка и количество позиций по продавцу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerSummary {
    pub seller_id: String,
    pub total_revenue: f64,
    pub total_items: usize,
}

/// Сумма и количество покупок по способу оплаты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub payment_type: String,
    pub total_purchase_value: f64,
    pub purchase_count: usize,
}

/// Заказы и выручка за один календарный день
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOrders {
    pub order_date: NaiveDate,
    pub order_count: usize,
    pub revenue: f64,
}
