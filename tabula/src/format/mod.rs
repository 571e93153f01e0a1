//! Formatter registry
//!
//! Pure functions turning raw [`Value`]s into display strings. None of them
//! fail: unparseable input produces a sentinel string so a render pass is
//! never aborted by formatting.

mod config;
mod date;
mod money;

pub use config::*;
pub use date::parse_iso;
pub use money::GENERIC_CURRENCY;
pub use money::currency_symbol;

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::model::Money;
use crate::model::Value;

/// Selects a formatter for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatKey {
    Money,
    Date,
    DateTime,
    Boolean,
}

impl FormatKey {
    /// The key as written in declarations (`money`, `date`, `dateTime`, `boolean`).
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKey::Money => "money",
            FormatKey::Date => "date",
            FormatKey::DateTime => "dateTime",
            FormatKey::Boolean => "boolean",
        }
    }
}

impl FromStr for FormatKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "money" => Ok(FormatKey::Money),
            "date" => Ok(FormatKey::Date),
            "dateTime" | "datetime" | "date_time" => Ok(FormatKey::DateTime),
            "boolean" | "bool" => Ok(FormatKey::Boolean),
            other => Err(format!("unknown format key '{other}'")),
        }
    }
}

impl std::fmt::Display for FormatKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The formatter registry handed to a table at mount.
///
/// # Example
///
/// ```
/// use tabula::format::{FormatConfig, FormatKey, Formatters, Locale};
/// use tabula::model::Value;
///
/// let formatters = Formatters::new(FormatConfig::default().with_locale(Locale::fi_fi()));
/// assert_eq!(formatters.boolean(true), "Kyllä");
/// assert_eq!(formatters.format(FormatKey::Date, &Value::from("2024-01-31")), "31.1.2024");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatters {
    config: FormatConfig,
}

impl Formatters {
    /// Creates a registry from a configuration.
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Formats a money value with grouping, two decimals and a currency marker.
    pub fn money(&self, money: &Money) -> String {
        self.amount(money.amount, &money.currency)
    }

    /// Formats a bare amount in the given currency.
    pub fn amount(&self, amount: Decimal, currency: &str) -> String {
        money::format_amount(&self.config.locale, amount, currency)
    }

    /// Formats the date part of an ISO-8601 string.
    pub fn date(&self, iso: &str) -> String {
        self.render_iso(iso, &self.config.locale.date_pattern)
    }

    /// Formats an ISO-8601 string including time of day.
    pub fn date_time(&self, iso: &str) -> String {
        self.render_iso(iso, &self.config.locale.date_time_pattern)
    }

    /// Maps a boolean to the locale's yes/no label.
    pub fn boolean(&self, value: bool) -> String {
        let locale = &self.config.locale;
        if value { locale.yes.clone() } else { locale.no.clone() }
    }

    /// Maps a field name to a label. Unknown keys pass through unchanged.
    pub fn translate(&self, key: &str) -> String {
        self.config
            .translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Applies the formatter selected by `key` to a raw value.
    ///
    /// Null renders empty under every key. Values of the wrong type fall back
    /// to plain string coercion, except for dates, which show the
    /// invalid-date sentinel.
    pub fn format(&self, key: FormatKey, value: &Value) -> String {
        if value.is_null() {
            return String::new();
        }

        match (key, value) {
            (FormatKey::Money, Value::Money(money)) => self.money(money),
            (FormatKey::Money, other) => match other.as_decimal() {
                Some(amount) => self.amount(amount, &self.config.locale.default_currency),
                None => self.coerce(key, other),
            },
            (FormatKey::Date | FormatKey::DateTime, Value::DateTime(dt)) => {
                self.render_naive(&dt.naive_local(), self.pattern(key))
            }
            (FormatKey::Date | FormatKey::DateTime, Value::String(iso)) => {
                self.render_iso(iso, self.pattern(key))
            }
            (FormatKey::Date | FormatKey::DateTime, other) => {
                log::trace!("{key} format applied to {} value", other.type_name());
                self.config.locale.invalid_date.clone()
            }
            (FormatKey::Boolean, Value::Bool(b)) => self.boolean(*b),
            (FormatKey::Boolean, Value::String(s)) => match s.trim() {
                "true" => self.boolean(true),
                "false" => self.boolean(false),
                _ => self.coerce(key, value),
            },
            (FormatKey::Boolean, other) => self.coerce(key, other),
        }
    }

    fn pattern(&self, key: FormatKey) -> &str {
        match key {
            FormatKey::DateTime => &self.config.locale.date_time_pattern,
            _ => &self.config.locale.date_pattern,
        }
    }

    fn render_iso(&self, iso: &str, pattern: &str) -> String {
        match date::parse_iso(iso) {
            Some(value) => self.render_naive(&value, pattern),
            None => {
                log::trace!("Unparseable date '{iso}'");
                self.config.locale.invalid_date.clone()
            }
        }
    }

    fn render_naive(&self, value: &chrono::NaiveDateTime, pattern: &str) -> String {
        date::render(value, pattern).unwrap_or_else(|| {
            log::warn!("Invalid date pattern '{pattern}'");
            self.config.locale.invalid_date.clone()
        })
    }

    fn coerce(&self, key: FormatKey, value: &Value) -> String {
        log::trace!("{key} format applied to {} value, using plain text", value.type_name());
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;

    fn en() -> Formatters {
        Formatters::default()
    }

    fn fi() -> Formatters {
        Formatters::new(FormatConfig::default().with_locale(Locale::fi_fi()))
    }

    #[test]
    fn test_money_structure() {
        let money = Money::new(Decimal::new(1_234_5, 1), "EUR");

        for formatters in [en(), fi()] {
            let text = formatters.money(&money);
            assert!(
                text.contains("1,234") || text.contains("1 234"),
                "grouped integer part in {text}"
            );
            assert!(text.contains("50"), "two decimals in {text}");
            assert!(text.contains('€'), "currency marker in {text}");
        }
    }

    #[test]
    fn test_money_from_plain_number_uses_default_currency() {
        assert_eq!(en().format(FormatKey::Money, &Value::Int(3)), "$3.00");
        assert_eq!(fi().format(FormatKey::Money, &Value::Float(0.5)), "0,50 €");
        assert_eq!(en().format(FormatKey::Money, &Value::from("n/a")), "n/a");
    }

    #[test]
    fn test_date_and_date_time() {
        let f = en();
        assert_eq!(f.date("2024-01-31T13:05:00Z"), "01/31/2024");
        assert_eq!(f.date_time("2024-01-31T13:05:00Z"), "01/31/2024, 01:05 PM");
        assert_eq!(fi().date_time("2024-01-31T13:05:00Z"), "31.1.2024 klo 13.05");
    }

    #[test]
    fn test_invalid_date_is_sentinel() {
        let f = en();
        assert_eq!(f.date("not a date"), "Invalid date");
        assert_eq!(f.format(FormatKey::DateTime, &Value::Bool(true)), "Invalid date");
    }

    #[test]
    fn test_datetime_value() {
        let dt = DateTime::parse_from_rfc3339("2024-03-01T09:00:00+02:00").unwrap();
        assert_eq!(en().format(FormatKey::Date, &Value::from(dt)), "03/01/2024");
    }

    #[test]
    fn test_bad_configured_pattern_degrades() {
        let mut locale = Locale::en_us();
        locale.date_pattern = "%Q".into();
        let f = Formatters::new(FormatConfig::default().with_locale(locale));
        assert_eq!(f.date("2024-01-31"), "Invalid date");
    }

    #[test]
    fn test_boolean_labels_are_distinct() {
        for f in [en(), fi()] {
            let yes = f.boolean(true);
            let no = f.boolean(false);
            assert!(!yes.is_empty());
            assert!(!no.is_empty());
            assert_ne!(yes, no);
        }
        assert_eq!(en().format(FormatKey::Boolean, &Value::from("false")), "No");
    }

    #[test]
    fn test_null_is_empty_for_every_key() {
        for key in [FormatKey::Money, FormatKey::Date, FormatKey::DateTime, FormatKey::Boolean] {
            assert_eq!(en().format(key, &Value::Null), "");
        }
    }

    #[test]
    fn test_translate_identity_fallback() {
        let f = Formatters::new(FormatConfig::default().with_translation("qty", "Quantity"));
        assert_eq!(f.translate("qty"), "Quantity");
        assert_eq!(f.translate("supplier"), "supplier");
    }

    #[test]
    fn test_format_key_names() {
        assert_eq!("dateTime".parse::<FormatKey>(), Ok(FormatKey::DateTime));
        assert_eq!(FormatKey::Money.to_string(), "money");
        assert!("currency".parse::<FormatKey>().is_err());
    }
}
