pub mod a001_order;
pub mod a002_order_item;
pub mod a003_order_payment;
