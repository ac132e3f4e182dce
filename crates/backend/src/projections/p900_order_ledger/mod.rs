pub mod projection_builder;
pub mod service;

pub use projection_builder::OrderLedger;
