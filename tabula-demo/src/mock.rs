//! Sample order data.

use serde::Deserialize;
use tabula::model::Money;
use tabula::model::TableRecord;
use tabula::model::Value;

const ORDERS: &str = include_str!("../data/orders.json");

/// One order line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// ISO-8601, not validated.
    pub date: String,
    pub item: String,
    pub qty: u32,
    pub price: Money,
    pub additional_data: Details,
}

/// Product details shown in the expanded subrow.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    pub description: String,
    pub category: String,
    pub supplier: String,
    pub in_stock: bool,
    pub rating: f64,
}

impl Order {
    /// Quantity times unit price. `None` if the product overflows.
    pub fn row_total(&self) -> Option<Money> {
        let total = self.price.checked_times(self.qty);
        if total.is_none() {
            log::warn!("Row total of order '{}' overflows", self.id);
        }
        total
    }
}

impl TableRecord for Order {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.as_str().into(),
            "date" => self.date.as_str().into(),
            "item" => self.item.as_str().into(),
            "qty" => self.qty.into(),
            "price" => self.price.clone().into(),
            _ => Value::Null,
        }
    }
}

impl TableRecord for Details {
    fn id(&self) -> String {
        self.description.clone()
    }

    fn field(&self, name: &str) -> Value {
        match name {
            "description" => self.description.as_str().into(),
            "category" => self.category.as_str().into(),
            "supplier" => self.supplier.as_str().into(),
            "inStock" => self.in_stock.into(),
            "rating" => self.rating.into(),
            _ => Value::Null,
        }
    }
}

/// Loads the bundled orders.
pub fn orders() -> Result<Vec<Order>, serde_json::Error> {
    serde_json::from_str(ORDERS)
}
