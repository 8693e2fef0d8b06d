use super::ui;
use crate::core::RateProvider;
use crate::core::currency::{name_of, symbol_of};
use anyhow::Result;
use comfy_table::Cell;

pub fn render_currencies(codes: &[String]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Symbol"),
        ui::header_cell("Name"),
    ]);
    for code in codes {
        table.add_row(vec![
            Cell::new(code),
            Cell::new(symbol_of(code)),
            Cell::new(name_of(code)),
        ]);
    }
    format!(
        "{}\n\n{}\n\n{} currencies",
        ui::style_text("Supported Currencies", ui::StyleType::Title),
        table,
        codes.len()
    )
}

pub async fn run(provider: &dyn RateProvider) -> Result<()> {
    let pb = ui::new_spinner("Fetching supported currencies...");
    let codes = provider.supported_currencies().await;
    pb.finish_and_clear();

    println!("{}", render_currencies(&codes));
    Ok(())
}
