pub mod csv_source;
pub mod error;

pub use error::LoadError;
