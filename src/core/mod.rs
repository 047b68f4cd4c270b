//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod history;
pub mod log;

// Re-export main types for cleaner imports
pub use currency::{DisplayRate, RateProvider, RateTable, convert, display_table, load_rates};
pub use error::{ConvertError, FetchError};
pub use history::{ConversionHistory, ConversionRecord};
