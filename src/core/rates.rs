//! Exchange rate abstractions

use crate::core::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Returned by [`RateProvider::supported_currencies`] when rates can't be fetched.
pub const FALLBACK_CURRENCIES: [&str; 10] = [
    "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "INR", "MXN",
];

/// Currencies shown in the quick reference listing.
pub const POPULAR_CURRENCIES: [&str; 6] = ["USD", "EUR", "GBP", "JPY", "AUD", "CAD"];

/// One fetched set of rates. `rates[code]` is the value of one unit of
/// `base` expressed in `code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateSnapshot {
    pub base: String,
    pub date: NaiveDate,
    pub rates: BTreeMap<String, f64>,
}

impl ExchangeRateSnapshot {
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Currency codes in the snapshot, ascending.
    pub fn currencies(&self) -> Vec<String> {
        self.rates.keys().cloned().collect()
    }

    /// `1 BASE = r.rrrr CODE`, or `None` if `code` has no rate.
    pub fn quick_rate(&self, code: &str) -> Option<String> {
        self.rate(code)
            .map(|rate| format!("1 {} = {rate:.4} {code}", self.base))
    }
}

/// Fetches latest rates relative to a base currency.
///
/// Every call is a fresh request: no retries, no caching. An in-flight fetch
/// cannot be cancelled, and no timeout is applied here.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self, base: &str) -> Result<ExchangeRateSnapshot>;

    /// All codes the service knows about, derived from a USD snapshot.
    /// Falls back to [`FALLBACK_CURRENCIES`] instead of failing.
    async fn supported_currencies(&self) -> Vec<String> {
        match self.fetch_rates("USD").await {
            Ok(snapshot) => snapshot.currencies(),
            Err(e) => {
                warn!(error = %e, "Using fallback currency list");
                FALLBACK_CURRENCIES.iter().map(|c| c.to_string()).collect()
            }
        }
    }
}
