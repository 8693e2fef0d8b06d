//! Error taxonomy for rate fetching and conversion.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Failures a conversion request can resolve to. None of these are fatal;
/// the presentation layer renders them as a message.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Please enter a valid amount (got '{0}')")]
    InvalidAmount(String),

    #[error("Failed to fetch exchange rates. Please try again later.")]
    RateFetch {
        #[source]
        source: anyhow::Error,
    },

    #[error("Currency {0} not found")]
    UnknownCurrency(String),

    #[error("Invalid currency code: '{0}'")]
    InvalidCurrencyCode(String),
}

impl ConvertError {
    pub fn rate_fetch(source: impl Into<anyhow::Error>) -> Self {
        ConvertError::RateFetch {
            source: source.into(),
        }
    }
}
