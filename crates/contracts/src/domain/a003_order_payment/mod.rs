pub mod aggregate;

pub use aggregate::OrderPayment;
