use super::ui;
use crate::core::RateProvider;
use crate::core::currency::name_of;
use crate::core::rates::{ExchangeRateSnapshot, POPULAR_CURRENCIES};
use anyhow::Result;
use comfy_table::Cell;

/// Quick reference rates for popular currencies, excluding the base itself.
pub fn render_quick_rates(snapshot: &ExchangeRateSnapshot) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Name"),
        ui::header_cell("Rate"),
    ]);

    for code in POPULAR_CURRENCIES
        .iter()
        .filter(|c| **c != snapshot.base.as_str())
    {
        let rate = snapshot
            .quick_rate(code)
            .map_or_else(ui::na_cell, ui::amount_cell);
        table.add_row(vec![Cell::new(code), Cell::new(name_of(code)), rate]);
    }

    format!(
        "Quick Reference Rates (Base: {})\n\n{}\n\n{}",
        ui::style_text(&snapshot.base, ui::StyleType::Title),
        table,
        ui::style_text(
            &format!("Last updated: {}", snapshot.date.format("%Y-%m-%d")),
            ui::StyleType::Subtle
        )
    )
}

pub async fn run(provider: &dyn RateProvider, base: &str) -> Result<()> {
    let pb = ui::new_spinner("Fetching exchange rates...");
    let result = provider.fetch_rates(base).await;
    pb.finish_and_clear();

    println!("{}", render_quick_rates(&result?));
    Ok(())
}
