use super::ui;
use crate::core::currency::format_amount;
use crate::core::history::currencies_used;
use crate::core::{ConversionRecord, HistoryRepository};
use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, Table};

/// One row per record: time, both sides of the conversion and the rate.
pub fn history_table(records: &[ConversionRecord]) -> Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Time"),
        ui::header_cell("From"),
        ui::header_cell("Amount"),
        ui::header_cell("To"),
        ui::header_cell("Converted"),
        ui::header_cell("Rate"),
    ]);

    for record in records {
        let time = record.timestamp.map_or_else(
            || "N/A".to_string(),
            |ts| ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        );
        table.add_row(vec![
            Cell::new(time),
            Cell::new(&record.from),
            ui::amount_cell(format_amount(record.amount, &record.from)),
            Cell::new(&record.to),
            ui::highlight_cell(format_amount(record.converted_amount, &record.to)),
            ui::amount_cell(record.rate_display()),
        ]);
    }
    table
}

/// Renders `records` as a table, followed by statistics over `all`.
pub fn render_history(records: &[ConversionRecord], all: &[ConversionRecord]) -> String {
    let title = ui::style_text("Conversion History", ui::StyleType::Title);

    if records.is_empty() {
        return format!(
            "{title}\n\n{}\n{}",
            ui::style_text("No Conversion History", ui::StyleType::Label),
            ui::style_text(
                "Your conversion history will appear here after you convert currencies.",
                ui::StyleType::Subtle
            )
        );
    }

    let table = history_table(records);

    format!(
        "{title}\n\n{table}\n\n{}: {}    {}: {}",
        ui::style_text("Total Conversions", ui::StyleType::Label),
        all.len(),
        ui::style_text("Currencies Used", ui::StyleType::Label),
        currencies_used(all).len()
    )
}

pub fn run(
    history: &dyn HistoryRepository,
    currency: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let all = history.list();
    let mut records = match currency {
        Some(code) => history.filter_by_currency(code),
        None => all.clone(),
    };
    if let Some(limit) = limit {
        records.truncate(limit);
    }

    println!("{}", render_history(&records, &all));
    Ok(())
}

pub fn clear(history: &dyn HistoryRepository) -> Result<()> {
    history.clear();
    println!(
        "{}",
        ui::style_text("Conversion history cleared", ui::StyleType::Subtle)
    );
    Ok(())
}
