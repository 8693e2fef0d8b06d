//! Core business logic abstractions

pub mod config;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod history;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use conversion::{ConversionRecord, convert, parse_amount};
pub use error::ConvertError;
pub use history::{HISTORY_LIMIT, HistoryRepository, HistoryStore, KeyValueStorage};
pub use rates::{ExchangeRateSnapshot, RateProvider};
