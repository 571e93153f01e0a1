//! The capability set a host supplies to render tables.

use super::CaptionAlignment;
use crate::column::Alignment;
use crate::column::CellBody;
use crate::expansion::TableAction;

/// Primitive layout constructors the table renders through.
///
/// The table never builds visual primitives itself; it calls these in column
/// order and nests the results. Implementations decide what a node is: a
/// widget, a markup string, or a plain data tree like
/// [`TreeBackend`](super::TreeBackend).
pub trait RenderBackend {
    /// The node type produced by this backend.
    type Node;

    /// Assembles the whole table.
    fn table(&mut self, parts: TableParts<Self::Node>) -> Self::Node;

    /// Caption text.
    fn caption(&mut self, text: &str, alignment: CaptionAlignment) -> Self::Node;

    /// Header section holding the header row.
    fn header_section(&mut self, rows: Vec<Self::Node>) -> Self::Node;

    /// One header cell. Structural columns pass no labels; multi-value
    /// columns pass one label per stacked value.
    fn head_cell(&mut self, labels: Vec<String>, props: HeadCellProps) -> Self::Node;

    /// Body section holding data rows and their subrows.
    fn body_section(&mut self, rows: Vec<Self::Node>) -> Self::Node;

    /// A row of cells.
    fn row(&mut self, cells: Vec<Self::Node>, props: RowProps) -> Self::Node;

    /// A body, subrow or footer cell.
    fn cell(&mut self, body: CellBody<Self::Node>, props: CellProps) -> Self::Node;

    /// Footer section holding the footer row.
    fn footer_section(&mut self, rows: Vec<Self::Node>) -> Self::Node;

    /// The control in a trigger cell. Activating it should hand `on_toggle`
    /// back to the table.
    fn expand_toggle(&mut self, is_open: bool, on_toggle: TableAction) -> Self::Node;

    /// Default delete-confirmation view, used when the delete trigger column
    /// has no render function. Confirming or cancelling should hand
    /// `on_close` back to the table.
    fn confirm_delete(&mut self, row_id: &str, on_close: TableAction) -> Self::Node;

    /// Placeholder shown instead of the body while loading.
    fn loading(&mut self, column_count: usize) -> Self::Node;
}

/// The sections of a table, handed to [`RenderBackend::table`].
#[derive(Debug, Clone, PartialEq)]
pub struct TableParts<N> {
    pub caption: Option<N>,
    pub caption_alignment: CaptionAlignment,
    pub header: Option<N>,
    pub body: N,
    pub footer: Option<N>,
    pub column_count: usize,
}

/// Display hints for a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeadCellProps {
    pub alignment: Alignment,
    /// Set on every cell when any column stacks several values.
    pub is_multi_value: bool,
    /// Relative width hint, unitless.
    pub col_width: Option<u16>,
}

/// Display hints for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellProps {
    pub alignment: Alignment,
    pub is_multi_value: bool,
    /// The cell hosts an expand toggle.
    pub is_expand_trigger: bool,
    /// Number of column slots this cell covers.
    pub col_span: usize,
}

impl Default for CellProps {
    fn default() -> Self {
        Self {
            alignment: Alignment::Left,
            is_multi_value: false,
            is_expand_trigger: false,
            col_span: 1,
        }
    }
}

/// What a row is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Header,
    Body,
    Subrow,
    Footer,
}

/// Display hints for a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowProps {
    pub kind: RowKind,
    /// Identity of the data row, for body rows and subrows.
    pub row_id: Option<String>,
}

impl RowProps {
    pub fn header() -> Self {
        Self {
            kind: RowKind::Header,
            row_id: None,
        }
    }

    pub fn body(row_id: impl Into<String>) -> Self {
        Self {
            kind: RowKind::Body,
            row_id: Some(row_id.into()),
        }
    }

    pub fn subrow(row_id: impl Into<String>) -> Self {
        Self {
            kind: RowKind::Subrow,
            row_id: Some(row_id.into()),
        }
    }

    pub fn footer() -> Self {
        Self {
            kind: RowKind::Footer,
            row_id: None,
        }
    }
}
