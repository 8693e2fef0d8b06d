//! Converts an amount between two currencies using a fetched snapshot.
use crate::core::error::{ConvertError, Result};
use crate::core::rates::RateProvider;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One completed conversion.
///
/// `timestamp` is empty when produced by [`convert`] and is stamped when the
/// record is appended to history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub converted_amount: f64,
    pub rate: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ConversionRecord {
    pub fn involves(&self, code: &str) -> bool {
        self.from == code || self.to == code
    }

    /// `1 FROM = r.rrrr TO`
    pub fn rate_display(&self) -> String {
        format!("1 {} = {:.4} {}", self.from, self.rate, self.to)
    }
}

fn validate_amount(amount: f64) -> Result<f64> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(ConvertError::InvalidAmount(amount.to_string()))
    }
}

/// Parses user input into a positive, finite amount.
pub fn parse_amount(input: &str) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ConvertError::InvalidAmount(input.to_string()))
        .and_then(validate_amount)
}

/// Converts `amount` of `from` into `to`.
///
/// The amount is validated before any request is made. The result is not
/// rounded and is not persisted; callers append it to history themselves.
pub async fn convert(
    provider: &dyn RateProvider,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<ConversionRecord> {
    let amount = validate_amount(amount)?;

    let snapshot = provider.fetch_rates(from).await?;
    let rate = snapshot
        .rate(to)
        .ok_or_else(|| ConvertError::UnknownCurrency(to.to_string()))?;

    let converted_amount = amount * rate;
    debug!(from, to, amount, rate, converted_amount, "Converted amount");

    Ok(ConversionRecord {
        from: from.to_string(),
        to: to.to_string(),
        amount,
        converted_amount,
        rate,
        date: snapshot.date,
        timestamp: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::ExchangeRateSnapshot;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockRateProvider {
        rates: BTreeMap<String, f64>,
        fail: bool,
        call_count: AtomicUsize,
        last_base: Mutex<Option<String>>,
    }

    impl MockRateProvider {
        fn new(rates: &[(&str, f64)]) -> Self {
            Self {
                rates: rates.iter().map(|(c, r)| (c.to_string(), *r)).collect(),
                fail: false,
                call_count: AtomicUsize::new(0),
                last_base: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(&[])
            }
        }

        fn calls(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateProvider for MockRateProvider {
        async fn fetch_rates(&self, base: &str) -> Result<ExchangeRateSnapshot> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            *self.last_base.lock().unwrap() = Some(base.to_string());
            if self.fail {
                return Err(ConvertError::rate_fetch(anyhow!("service down")));
            }
            Ok(ExchangeRateSnapshot {
                base: base.to_string(),
                date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                rates: self.rates.clone(),
            })
        }
    }

    #[tokio::test]
    async fn test_convert_multiplies_by_rate() {
        let provider = MockRateProvider::new(&[("EUR", 0.925), ("USD", 1.0)]);

        for amount in [1.0, 100.0, 0.01, 12345.678] {
            let record = convert(&provider, amount, "USD", "EUR").await.unwrap();
            assert!((record.converted_amount - amount * 0.925).abs() < f64::EPSILON * amount);
            assert_eq!(record.rate, 0.925);
            assert_eq!(record.amount, amount);
        }
        assert_eq!(provider.last_base.lock().unwrap().as_deref(), Some("USD"));
    }

    #[tokio::test]
    async fn test_convert_populates_record() {
        let provider = MockRateProvider::new(&[("JPY", 150.0)]);
        let record = convert(&provider, 2.0, "USD", "JPY").await.unwrap();

        assert_eq!(record.from, "USD");
        assert_eq!(record.to, "JPY");
        assert_eq!(record.converted_amount, 300.0);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert!(record.timestamp.is_none());
        assert_eq!(record.rate_display(), "1 USD = 150.0000 JPY");
    }

    #[tokio::test]
    async fn test_convert_rejects_invalid_amount_without_fetching() {
        let provider = MockRateProvider::new(&[("EUR", 0.9)]);

        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = convert(&provider, amount, "USD", "EUR").await;
            assert!(matches!(result, Err(ConvertError::InvalidAmount(_))));
        }
        assert_eq!(provider.calls(), 0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
        for input in ["abc", "", "0", "-5", "NaN", "inf"] {
            assert!(
                matches!(parse_amount(input), Err(ConvertError::InvalidAmount(_))),
                "{input} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn test_convert_unknown_target_currency() {
        let provider = MockRateProvider::new(&[("EUR", 0.9)]);
        let err = convert(&provider, 10.0, "USD", "XYZ").await.unwrap_err();

        match &err {
            ConvertError::UnknownCurrency(code) => assert_eq!(code, "XYZ"),
            other => panic!("Expected UnknownCurrency, got {other:?}"),
        }
        assert!(err.to_string().contains("XYZ"));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_convert_propagates_fetch_error() {
        let provider = MockRateProvider::failing();
        let result = convert(&provider, 10.0, "USD", "EUR").await;
        assert!(matches!(result, Err(ConvertError::RateFetch { .. })));
    }

    #[test]
    fn test_record_json_shape() {
        let record = ConversionRecord {
            from: "USD".to_string(),
            to: "EUR".to_string(),
            amount: 100.0,
            converted_amount: 92.5,
            rate: 0.925,
            date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            timestamp: None,
        };
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(json["convertedAmount"], 92.5);
        assert_eq!(json["date"], "2025-07-01");
        assert!(json.get("timestamp").is_none());
    }
}
