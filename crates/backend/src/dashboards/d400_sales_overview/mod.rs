pub mod aggregation;
pub mod render;
pub mod service;
