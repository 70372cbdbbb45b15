//! Baseline currency set.
//!
//! Codes outside this table must be supplied through
//! [`ConfigurableCurrency`](crate::ConfigurableCurrency).

use crate::currency::Currency;
use crate::rounding::{Rounding, RoundingType};
use rd_core::Integer;

/// (name, code, numeric code, symbol, fraction symbol, fractions per unit, decimals)
type Row = (&'static str, &'static str, Integer, &'static str, &'static str, Integer, Integer);

const BASELINE: &[Row] = &[
    ("U.S. Dollar", "USD", 840, "$", "¢", 100, 2),
    ("Euro", "EUR", 978, "€", "c", 100, 2),
    ("British Pound", "GBP", 826, "£", "p", 100, 2),
    ("Japanese Yen", "JPY", 392, "¥", "", 1, 0),
    ("Swiss Franc", "CHF", 756, "Fr", "c", 100, 2),
    ("Canadian Dollar", "CAD", 124, "CA$", "¢", 100, 2),
    ("Australian Dollar", "AUD", 36, "A$", "¢", 100, 2),
    ("New Zealand Dollar", "NZD", 554, "NZ$", "¢", 100, 2),
    ("Hong Kong Dollar", "HKD", 344, "HK$", "¢", 100, 2),
    ("Singapore Dollar", "SGD", 702, "S$", "c", 100, 2),
    ("Norwegian Krone", "NOK", 578, "kr", "øre", 100, 2),
    ("Swedish Krona", "SEK", 752, "kr", "öre", 100, 2),
    ("Danish Krone", "DKK", 208, "kr", "øre", 100, 2),
    ("Polish Zloty", "PLN", 985, "zł", "gr", 100, 2),
    ("Czech Koruna", "CZK", 203, "Kč", "h", 100, 2),
    ("Hungarian Forint", "HUF", 348, "Ft", "", 1, 0),
    ("South African Rand", "ZAR", 710, "R", "c", 100, 2),
    ("Israeli Shekel", "ILS", 376, "₪", "agorot", 100, 2),
    ("Kuwaiti Dinar", "KWD", 414, "KD", "fils", 1000, 3),
    ("Chinese Yuan", "CNY", 156, "¥", "fen", 100, 2),
    ("Indian Rupee", "INR", 356, "₹", "p", 100, 2),
    ("South Korean Won", "KRW", 410, "₩", "", 100, 0),
    ("Brazilian Real", "BRL", 986, "R$", "centavo", 100, 2),
    ("Mexican Peso", "MXN", 484, "Mex$", "¢", 100, 2),
    ("Turkish Lira", "TRY", 949, "₺", "kuruş", 100, 2),
];

fn from_row(row: &Row) -> Currency {
    let (name, code, numeric_code, symbol, fraction_symbol, fractions_per_unit, decimals) = *row;
    Currency::from_parts(
        name,
        code,
        numeric_code,
        symbol,
        fraction_symbol,
        fractions_per_unit,
        Rounding::with_precision(RoundingType::Closest, decimals),
        format!("%3% %1$.{decimals}f"),
    )
}

/// Look up a baseline currency by ISO code.
pub fn baseline_currency(code: &str) -> Option<Currency> {
    BASELINE.iter().find(|row| row.1 == code).map(from_row)
}

/// Every baseline currency, in table order.
pub fn baseline_currencies() -> Vec<Currency> {
    BASELINE.iter().map(from_row).collect()
}
