//! Static currency metadata used for labels and amount formatting.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyMetadataEntry {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

const fn entry(
    code: &'static str,
    symbol: &'static str,
    name: &'static str,
) -> CurrencyMetadataEntry {
    CurrencyMetadataEntry { code, symbol, name }
}

static CURRENCIES: [CurrencyMetadataEntry; 20] = [
    entry("USD", "$", "US Dollar"),
    entry("EUR", "€", "Euro"),
    entry("GBP", "£", "British Pound"),
    entry("JPY", "¥", "Japanese Yen"),
    entry("AUD", "A$", "Australian Dollar"),
    entry("CAD", "C$", "Canadian Dollar"),
    entry("CHF", "Fr", "Swiss Franc"),
    entry("CNY", "¥", "Chinese Yuan"),
    entry("INR", "₹", "Indian Rupee"),
    entry("MXN", "$", "Mexican Peso"),
    entry("BRL", "R$", "Brazilian Real"),
    entry("ZAR", "R", "South African Rand"),
    entry("RUB", "₽", "Russian Ruble"),
    entry("KRW", "₩", "South Korean Won"),
    entry("SGD", "S$", "Singapore Dollar"),
    entry("NZD", "NZ$", "New Zealand Dollar"),
    entry("TRY", "₺", "Turkish Lira"),
    entry("HKD", "HK$", "Hong Kong Dollar"),
    entry("NOK", "kr", "Norwegian Krone"),
    entry("SEK", "kr", "Swedish Krona"),
];

/// All known currencies, in display order.
pub fn all() -> &'static [CurrencyMetadataEntry] {
    &CURRENCIES
}

pub fn lookup(code: &str) -> Option<&'static CurrencyMetadataEntry> {
    all().iter().find(|c| c.code == code)
}

/// Display symbol for `code`, or an empty string when unmapped.
pub fn symbol_of(code: &str) -> &'static str {
    lookup(code).map_or("", |c| c.symbol)
}

/// Human readable name for `code`. Unmapped codes display as themselves.
pub fn name_of(code: &str) -> &str {
    lookup(code).map_or(code, |c| c.name)
}

/// Formats `amount` to two decimals, prefixed with the currency symbol.
pub fn format_amount(amount: f64, code: &str) -> String {
    format!("{}{amount:.2}", symbol_of(code))
}
