//! Alignment and footer types for column display.

use serde::Deserialize;
use serde::Serialize;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Footer of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Footer {
    /// Static text shown in this column's footer slot.
    Text(String),
    /// A single cell merging `col_span` leading footer slots.
    ///
    /// Used for labels like "Total:" that sit to the left of a computed
    /// total. `alignment` defaults to the column's own alignment.
    Span {
        value: String,
        col_span: usize,
        alignment: Option<Alignment>,
    },
}

impl Footer {
    /// The footer text.
    pub fn value(&self) -> &str {
        match self {
            Footer::Text(value) | Footer::Span { value, .. } => value,
        }
    }

    /// Returns `true` if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    /// Number of slots this footer occupies when it spans.
    pub fn col_span(&self) -> Option<usize> {
        match self {
            Footer::Span { col_span, .. } => Some(*col_span),
            Footer::Text(_) => None,
        }
    }
}

impl From<&str> for Footer {
    fn from(value: &str) -> Self {
        Footer::Text(value.to_string())
    }
}

impl From<String> for Footer {
    fn from(value: String) -> Self {
        Footer::Text(value)
    }
}
