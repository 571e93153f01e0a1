//! Format configuration

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// Where the currency marker goes relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPlacement {
    /// `€1,234.50`
    #[default]
    Prefix,
    /// `1 234,50 €`
    Suffix,
}

/// Locale-dependent display rules used by the formatters.
///
/// Date patterns use chrono `strftime` syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    /// Separator between groups of three integer digits.
    pub group_separator: String,
    /// Separator between the integer and fractional part.
    pub decimal_separator: String,
    /// Currency marker placement.
    pub currency_placement: CurrencyPlacement,
    /// Currency used when a money format is applied to a plain number.
    pub default_currency: String,
    /// Pattern for `date`.
    pub date_pattern: String,
    /// Pattern for `dateTime`.
    pub date_time_pattern: String,
    /// Label for `true`.
    pub yes: String,
    /// Label for `false`.
    pub no: String,
    /// Shown instead of an unparseable date.
    pub invalid_date: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English: `$1,234.50`, `01/31/2024`.
    pub fn en_us() -> Self {
        Self {
            group_separator: ",".into(),
            decimal_separator: ".".into(),
            currency_placement: CurrencyPlacement::Prefix,
            default_currency: "USD".into(),
            date_pattern: "%m/%d/%Y".into(),
            date_time_pattern: "%m/%d/%Y, %I:%M %p".into(),
            yes: "Yes".into(),
            no: "No".into(),
            invalid_date: "Invalid date".into(),
        }
    }

    /// Finnish: `1 234,50 €`, `31.1.2024`.
    pub fn fi_fi() -> Self {
        Self {
            group_separator: " ".into(),
            decimal_separator: ",".into(),
            currency_placement: CurrencyPlacement::Suffix,
            default_currency: "EUR".into(),
            date_pattern: "%-d.%-m.%Y".into(),
            date_time_pattern: "%-d.%-m.%Y klo %H.%M".into(),
            yes: "Kyllä".into(),
            no: "Ei".into(),
            invalid_date: "Virheellinen päivämäärä".into(),
        }
    }

    /// Looks up a preset by a short language tag (`en`, `en-US`, `fi`, `fi-FI`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Some(Self::en_us()),
            "fi" | "fi-fi" => Some(Self::fi_fi()),
            _ => None,
        }
    }
}

/// Configuration injected into [`Formatters`](super::Formatters).
///
/// # Example
///
/// ```
/// use tabula::format::{FormatConfig, Locale};
///
/// let config = FormatConfig::default()
///     .with_locale(Locale::fi_fi())
///     .with_translation("qty", "Quantity");
/// assert_eq!(config.translations["qty"], "Quantity");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Display rules.
    pub locale: Locale,
    /// Field name to header label.
    pub translations: BTreeMap<String, String>,
}

impl FormatConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Adds a translation for a field name.
    pub fn with_translation(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.translations.insert(key.into(), label.into());
        self
    }

    /// Adds several translations.
    pub fn with_translations<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.translations
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Parses a config from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FormatConfig::from_json(
            r#"{ "locale": { "yes": "Oui" }, "translations": { "qty": "Qté" } }"#,
        )
        .unwrap();

        assert_eq!(config.locale.yes, "Oui");
        assert_eq!(config.locale.no, "No");
        assert_eq!(config.locale.decimal_separator, ".");
        assert_eq!(config.translations["qty"], "Qté");
    }

    #[test]
    fn test_currency_placement_is_lowercase() {
        let config =
            FormatConfig::from_json(r#"{ "locale": { "currency_placement": "suffix" } }"#).unwrap();
        assert_eq!(config.locale.currency_placement, CurrencyPlacement::Suffix);
    }

    #[test]
    fn test_translations_extend_and_override() {
        let config = FormatConfig::new()
            .with_translation("qty", "Quantity")
            .with_translations([("qty", "Qty"), ("inStock", "In stock")]);

        assert_eq!(config.translations.len(), 2);
        assert_eq!(config.translations["qty"], "Qty");
        assert_eq!(config.translations["inStock"], "In stock");
    }

    #[test]
    fn test_invalid_json() {
        let err = FormatConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = FormatConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_locale_tags() {
        assert_eq!(Locale::from_tag("fi_FI"), Some(Locale::fi_fi()));
        assert_eq!(Locale::from_tag("EN"), Some(Locale::en_us()));
        assert_eq!(Locale::from_tag("xx"), None);
    }
}
