//! Row access

use std::collections::BTreeMap;

use super::Value;

/// A record that can be displayed as a table row.
///
/// Accessors are field names; [`field`](TableRecord::field) maps a name to
/// the raw [`Value`]. Unknown or absent fields return [`Value::Null`], which
/// renders as an empty cell.
///
/// # Example
///
/// ```
/// use tabula::model::{TableRecord, Value};
///
/// struct Product {
///     sku: String,
///     name: String,
/// }
///
/// impl TableRecord for Product {
///     fn id(&self) -> String {
///         self.sku.clone()
///     }
///
///     fn field(&self, name: &str) -> Value {
///         match name {
///             "sku" => self.sku.as_str().into(),
///             "name" => self.name.as_str().into(),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait TableRecord {
    /// Identity of this row, unique within a data set.
    ///
    /// Expansion state is keyed by this value.
    fn id(&self) -> String;

    /// Raw value of the named field.
    fn field(&self, name: &str) -> Value;
}

impl<R: TableRecord + ?Sized> TableRecord for &R {
    fn id(&self) -> String {
        (**self).id()
    }

    fn field(&self, name: &str) -> Value {
        (**self).field(name)
    }
}

/// A dynamic row holding its fields by name.
///
/// # Example
///
/// ```
/// use tabula::model::{Record, TableRecord, Value};
///
/// let record = Record::new("Row 1")
///     .set("item", "Coffee")
///     .set("qty", 2i64);
///
/// assert_eq!(record.field("item"), Value::from("Coffee"));
/// assert_eq!(record.field("missing"), Value::Null);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    id: String,
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a new empty record with the given identity.
    ///
    /// The identity is also readable as the `id` field.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Sets a field value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

impl TableRecord for Record {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Value {
        match self.fields.get(name) {
            Some(value) => value.clone(),
            None if name == "id" => Value::String(self.id.clone()),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_insert() {
        let mut record = Record::new("Row 1").set("item", "Coffee");
        record.insert("qty", 2);

        assert_eq!(record.get("item"), Some(&Value::from("Coffee")));
        assert_eq!(record.get("qty"), Some(&Value::Int(2)));
        assert_eq!(record.get("price"), None);
    }

    #[test]
    fn test_id_field_falls_back_to_identity() {
        let record = Record::new("Row 1");
        assert_eq!(record.get("id"), None);
        assert_eq!(record.field("id"), Value::from("Row 1"));

        let shadowed = Record::new("Row 1").set("id", 7);
        assert_eq!(shadowed.field("id"), Value::Int(7));
    }
}
