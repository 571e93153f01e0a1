//! Table construction and dispatch errors

use crate::expansion::SubrowKind;

/// Errors raised while mounting a table or driving its expansion state.
///
/// Configuration errors abort construction entirely; a table is never
/// partially rendered from an invalid column set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The table was declared without any columns.
    #[error("Table declares no columns")]
    NoColumns,

    /// More than one column claims the same subrow trigger.
    #[error("Columns {first} and {second} both declare a {kind} trigger")]
    DuplicateTrigger {
        /// Which subrow slot is claimed twice.
        kind: SubrowKind,
        /// Index of the first claiming column.
        first: usize,
        /// Index of the second claiming column.
        second: usize,
    },

    /// A spanning footer declares a span of zero columns.
    #[error("Footer of column {column} spans zero columns")]
    ZeroColSpan { column: usize },

    /// Two rows in the data set share an identity.
    #[error("Duplicate row id '{id}' in data set")]
    DuplicateRowId { id: String },

    /// An action addressed a row that is not in the data set.
    #[error("Row '{id}' not found")]
    UnknownRow { id: String },

    /// A toggle addressed a subrow kind that no column triggers.
    #[error("No column declares a {kind} trigger")]
    NoTrigger { kind: SubrowKind },
}

impl TableError {
    /// Creates a new unknown row error.
    pub fn unknown_row(id: impl Into<String>) -> Self {
        Self::UnknownRow { id: id.into() }
    }

    /// Returns `true` for errors caused by the column declarations.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::NoColumns | Self::DuplicateTrigger { .. } | Self::ZeroColSpan { .. }
        )
    }
}
