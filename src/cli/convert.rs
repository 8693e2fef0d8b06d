use super::{history::history_table, ui};
use crate::core::currency::format_amount;
use crate::core::{ConversionRecord, HistoryRepository, RateProvider, convert, parse_amount};
use anyhow::Result;

/// Renders a conversion as a result card.
pub fn render_result(record: &ConversionRecord) -> String {
    let mut output = format!(
        "{}\n\n",
        ui::style_text("Conversion Result", ui::StyleType::Title)
    );
    output.push_str(&format!(
        "{}   {} {}\n",
        ui::style_text("From", ui::StyleType::Label),
        format_amount(record.amount, &record.from),
        record.from
    ));
    output.push_str(&format!(
        "{}     {}\n\n",
        ui::style_text("To", ui::StyleType::Label),
        ui::style_text(
            &format!(
                "{} {}",
                format_amount(record.converted_amount, &record.to),
                record.to
            ),
            ui::StyleType::Highlight
        )
    ));
    output.push_str(&format!("Exchange Rate: {}\n", record.rate_display()));
    output.push_str(&ui::style_text(
        &format!("Last updated: {}", record.date.format("%Y-%m-%d")),
        ui::StyleType::Subtle,
    ));
    output
}

/// Number of past conversions listed after a conversion.
pub const RECENT_COUNT: usize = 10;

/// Renders the most recent conversions, or nothing when there are none.
pub fn render_recent(records: &[ConversionRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }
    format!(
        "{}\n\n{}",
        ui::style_text("Recent Conversions", ui::StyleType::Title),
        history_table(records)
    )
}

pub async fn run(
    provider: &dyn RateProvider,
    history: &dyn HistoryRepository,
    amount: &str,
    from: &str,
    to: &str,
) -> Result<()> {
    let amount = parse_amount(amount)?;

    let pb = ui::new_spinner("Fetching exchange rates...");
    let result = convert(provider, amount, from, to).await;
    pb.finish_and_clear();

    let record = result?;
    println!("{}", render_result(&record));
    history.append(record);

    let recent = history.recent(RECENT_COUNT);
    if !recent.is_empty() {
        println!("\n{}", render_recent(&recent));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HistoryStore;
    use crate::core::rates::ExchangeRateSnapshot;
    use crate::store::memory::MemoryStorage;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    fn record(to: &str, amount: f64) -> ConversionRecord {
        ConversionRecord {
            from: "USD".to_string(),
            to: to.to_string(),
            amount,
            converted_amount: amount * 0.925,
            rate: 0.925,
            date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            timestamp: None,
        }
    }

    struct FixedRates;

    #[async_trait]
    impl RateProvider for FixedRates {
        async fn fetch_rates(
            &self,
            base: &str,
        ) -> crate::core::error::Result<ExchangeRateSnapshot> {
            Ok(ExchangeRateSnapshot {
                base: base.to_string(),
                date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                rates: BTreeMap::from([("EUR".to_string(), 0.925)]),
            })
        }
    }

    #[test]
    fn test_render_result() {
        let record = record("EUR", 100.0);

        let output = console::strip_ansi_codes(&render_result(&record)).to_string();
        assert!(output.contains("$100.00 USD"));
        assert!(output.contains("€92.50 EUR"));
        assert!(output.contains("Exchange Rate: 1 USD = 0.9250 EUR"));
        assert!(output.contains("Last updated: 2025-07-01"));
    }

    #[test]
    fn test_render_recent() {
        assert!(render_recent(&[]).is_empty());

        let records = vec![record("EUR", 100.0), record("GBP", 5.0)];
        let output = console::strip_ansi_codes(&render_recent(&records)).to_string();
        assert!(output.contains("Recent Conversions"));
        assert!(output.contains("$100.00"));
        assert!(output.contains("€92.50"));
        assert!(output.contains("1 USD = 0.9250 GBP"));
    }

    #[tokio::test]
    async fn test_run_appends_to_history() {
        let history = HistoryStore::new(Arc::new(MemoryStorage::new()));
        for _ in 0..12 {
            run(&FixedRates, &history, "100", "USD", "EUR").await.unwrap();
        }

        assert_eq!(history.list().len(), 12);
        assert_eq!(history.recent(RECENT_COUNT).len(), RECENT_COUNT);
        assert!(run(&FixedRates, &history, "abc", "USD", "EUR").await.is_err());
        assert_eq!(history.list().len(), 12);
    }
}
