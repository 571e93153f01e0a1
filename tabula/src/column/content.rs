//! Cell content produced by render functions.

use crate::expansion::ExpansionState;
use crate::expansion::SubrowKind;
use crate::expansion::TableAction;
use crate::model::Value;

/// What a render function returns for a cell or subrow.
///
/// Whether content is already formatted is stated by the variant rather than
/// guessed: only [`CellContent::Value`] goes through the column's formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent<N> {
    /// Nothing to show.
    Empty,
    /// Display-ready text, shown verbatim.
    Text(String),
    /// A raw value, formatted with the column's `format` if it has one.
    Value(Value),
    /// Several display-ready values stacked in one cell.
    Lines(Vec<String>),
    /// A node already built for the target backend, e.g. a nested table.
    Node(N),
}

impl<N> CellContent<N> {
    /// Creates text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates raw value content.
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }
}

impl<N> Default for CellContent<N> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<N> From<String> for CellContent<N> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<N> From<&str> for CellContent<N> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<N> From<Value> for CellContent<N> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Resolved cell content as handed to a backend.
#[derive(Debug, Clone, PartialEq)]
pub enum CellBody<N> {
    Empty,
    Text(String),
    Lines(Vec<String>),
    Node(N),
}

impl<N> CellBody<N> {
    /// Returns `true` if the cell shows nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            CellBody::Empty => true,
            CellBody::Text(text) => text.is_empty(),
            CellBody::Lines(lines) => lines.iter().all(String::is_empty),
            CellBody::Node(_) => false,
        }
    }

    /// Text of the cell, lines joined with `\n`. Nodes have no text.
    pub fn text(&self) -> Option<String> {
        match self {
            CellBody::Empty => Some(String::new()),
            CellBody::Text(text) => Some(text.clone()),
            CellBody::Lines(lines) => Some(lines.join("\n")),
            CellBody::Node(_) => None,
        }
    }
}

/// Row-scoped handles passed to render functions.
///
/// A subrow renderer embeds [`close_subrow`](RowControls::close_subrow) in
/// its controls (e.g. the confirm and cancel buttons of a delete
/// confirmation) so the host can close the subrow once the user acts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowControls {
    row_id: String,
    state: ExpansionState,
}

impl RowControls {
    pub(crate) fn new(row_id: impl Into<String>, state: ExpansionState) -> Self {
        Self {
            row_id: row_id.into(),
            state,
        }
    }

    /// Identity of the row being rendered.
    pub fn row_id(&self) -> &str {
        &self.row_id
    }

    /// Expansion state of the row at the time of rendering.
    pub fn state(&self) -> ExpansionState {
        self.state
    }

    /// Action that closes this row's subrow.
    pub fn close_subrow(&self) -> TableAction {
        TableAction::close(&self.row_id)
    }

    /// Action that activates the `kind` trigger of this row.
    pub fn toggle(&self, kind: SubrowKind) -> TableAction {
        TableAction::toggle(&self.row_id, kind)
    }
}
