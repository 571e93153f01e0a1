//! Money type

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

/// A monetary amount together with its ISO 4217 currency code.
///
/// # Example
///
/// ```
/// use tabula::model::Money;
/// use rust_decimal::Decimal;
///
/// let price = Money::new(Decimal::new(1999, 2), "EUR"); // 19.99 €
/// assert_eq!(price.currency(), "EUR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// The amount in whole currency units.
    pub amount: Decimal,
    /// ISO 4217 currency code, e.g. `"EUR"`.
    pub currency: String,
}

impl Money {
    /// Creates a new Money value.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Returns the amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns this amount multiplied by a quantity, keeping the currency.
    /// `None` on overflow.
    pub fn checked_times(&self, quantity: impl Into<Decimal>) -> Option<Self> {
        let amount = self.amount.checked_mul(quantity.into())?;
        Some(Self::new(amount, self.currency.clone()))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
