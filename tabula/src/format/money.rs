//! Money formatting

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::config::CurrencyPlacement;
use super::config::Locale;

/// Marker used for currency codes without a known symbol.
pub const GENERIC_CURRENCY: &str = "¤";

/// Returns the display marker for an ISO 4217 currency code.
pub fn currency_symbol(code: &str) -> &'static str {
    match code.trim().to_ascii_uppercase().as_str() {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "SEK" | "NOK" | "DKK" | "ISK" => "kr",
        "CHF" => "CHF",
        "PLN" => "zł",
        "INR" => "₹",
        _ => GENERIC_CURRENCY,
    }
}

pub(super) fn format_amount(locale: &Locale, amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let number = format!(
        "{}{}{}",
        group_digits(int_part, &locale.group_separator),
        locale.decimal_separator,
        frac_part
    );

    let symbol = currency_symbol(currency);
    match locale.currency_placement {
        CurrencyPlacement::Prefix if symbol.chars().all(char::is_alphabetic) => {
            format!("{sign}{symbol} {number}")
        }
        CurrencyPlacement::Prefix => format!("{sign}{symbol}{number}"),
        CurrencyPlacement::Suffix => format!("{sign}{number} {symbol}"),
    }
}

/// Inserts `separator` between groups of three digits, counting from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
