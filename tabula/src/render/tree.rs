//! A backend producing a plain layout tree.

use super::CaptionAlignment;
use super::CellProps;
use super::HeadCellProps;
use super::RenderBackend;
use super::RowKind;
use super::RowProps;
use super::TableParts;
use crate::column::CellBody;
use crate::expansion::TableAction;

/// A node of the layout tree built by [`TreeBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Table {
        caption: Option<Box<LayoutNode>>,
        caption_alignment: CaptionAlignment,
        header: Option<Box<LayoutNode>>,
        body: Box<LayoutNode>,
        footer: Option<Box<LayoutNode>>,
        column_count: usize,
    },
    Caption {
        text: String,
        alignment: CaptionAlignment,
    },
    Header {
        rows: Vec<LayoutNode>,
    },
    HeadCell {
        labels: Vec<String>,
        props: HeadCellProps,
    },
    Body {
        rows: Vec<LayoutNode>,
    },
    Row {
        cells: Vec<LayoutNode>,
        props: RowProps,
    },
    Cell {
        body: Box<CellBody<LayoutNode>>,
        props: CellProps,
    },
    Footer {
        rows: Vec<LayoutNode>,
    },
    ExpandToggle {
        is_open: bool,
        on_toggle: TableAction,
    },
    ConfirmDelete {
        row_id: String,
        on_close: TableAction,
    },
    Loading {
        column_count: usize,
    },
}

/// Builds [`LayoutNode`] trees.
#[derive(Debug, Clone, Default)]
pub struct TreeBackend {
    nodes: usize,
}

impl TreeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes built so far.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    fn built(&mut self, node: LayoutNode) -> LayoutNode {
        self.nodes += 1;
        node
    }
}

impl RenderBackend for TreeBackend {
    type Node = LayoutNode;

    fn table(&mut self, parts: TableParts<LayoutNode>) -> LayoutNode {
        self.built(LayoutNode::Table {
            caption: parts.caption.map(Box::new),
            caption_alignment: parts.caption_alignment,
            header: parts.header.map(Box::new),
            body: Box::new(parts.body),
            footer: parts.footer.map(Box::new),
            column_count: parts.column_count,
        })
    }

    fn caption(&mut self, text: &str, alignment: CaptionAlignment) -> LayoutNode {
        self.built(LayoutNode::Caption {
            text: text.to_string(),
            alignment,
        })
    }

    fn header_section(&mut self, rows: Vec<LayoutNode>) -> LayoutNode {
        self.built(LayoutNode::Header { rows })
    }

    fn head_cell(&mut self, labels: Vec<String>, props: HeadCellProps) -> LayoutNode {
        self.built(LayoutNode::HeadCell { labels, props })
    }

    fn body_section(&mut self, rows: Vec<LayoutNode>) -> LayoutNode {
        self.built(LayoutNode::Body { rows })
    }

    fn row(&mut self, cells: Vec<LayoutNode>, props: RowProps) -> LayoutNode {
        self.built(LayoutNode::Row { cells, props })
    }

    fn cell(&mut self, body: CellBody<LayoutNode>, props: CellProps) -> LayoutNode {
        self.built(LayoutNode::Cell {
            body: Box::new(body),
            props,
        })
    }

    fn footer_section(&mut self, rows: Vec<LayoutNode>) -> LayoutNode {
        self.built(LayoutNode::Footer { rows })
    }

    fn expand_toggle(&mut self, is_open: bool, on_toggle: TableAction) -> LayoutNode {
        self.built(LayoutNode::ExpandToggle { is_open, on_toggle })
    }

    fn confirm_delete(&mut self, row_id: &str, on_close: TableAction) -> LayoutNode {
        self.built(LayoutNode::ConfirmDelete {
            row_id: row_id.to_string(),
            on_close,
        })
    }

    fn loading(&mut self, column_count: usize) -> LayoutNode {
        self.built(LayoutNode::Loading { column_count })
    }
}

// =============================================================================
// Queries
// =============================================================================

impl LayoutNode {
    /// Child nodes of sections and rows, and the node inside a cell.
    pub fn children(&self) -> Vec<&LayoutNode> {
        match self {
            LayoutNode::Table {
                caption,
                header,
                body,
                footer,
                ..
            } => caption
                .iter()
                .chain(header.iter())
                .chain(std::iter::once(body))
                .chain(footer.iter())
                .map(|node| &**node)
                .collect(),
            LayoutNode::Header { rows }
            | LayoutNode::Body { rows }
            | LayoutNode::Footer { rows } => rows.iter().collect(),
            LayoutNode::Row { cells, .. } => cells.iter().collect(),
            LayoutNode::Cell { body, .. } => match body.as_ref() {
                CellBody::Node(node) => vec![node],
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Depth-first search, this node included.
    pub fn find(&self, predicate: &dyn Fn(&LayoutNode) -> bool) -> Option<&LayoutNode> {
        if predicate(self) {
            return Some(self);
        }
        self.children()
            .into_iter()
            .find_map(|child| child.find(predicate))
    }

    /// Caption node of a table.
    pub fn caption(&self) -> Option<&LayoutNode> {
        match self {
            LayoutNode::Table { caption, .. } => caption.as_deref(),
            _ => None,
        }
    }

    /// Caption text of a table.
    pub fn caption_text(&self) -> Option<&str> {
        match self.caption() {
            Some(LayoutNode::Caption { text, .. }) => Some(text),
            _ => None,
        }
    }

    /// Header row of a table.
    pub fn header_row(&self) -> Option<&LayoutNode> {
        match self {
            LayoutNode::Table {
                header: Some(header),
                ..
            } => match header.as_ref() {
                LayoutNode::Header { rows } => rows.first(),
                _ => None,
            },
            _ => None,
        }
    }

    /// Header labels, one entry per column, multi-value labels joined by `/`.
    pub fn header_labels(&self) -> Vec<String> {
        self.header_row()
            .map(|row| {
                row.cells()
                    .iter()
                    .map(|cell| match cell {
                        LayoutNode::HeadCell { labels, .. } => labels.join("/"),
                        _ => String::new(),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All rows of a table body, subrows included, in order.
    pub fn body_rows(&self) -> Vec<&LayoutNode> {
        match self {
            LayoutNode::Table { body, .. } => match body.as_ref() {
                LayoutNode::Body { rows } => rows.iter().collect(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Body rows that show data.
    pub fn data_rows(&self) -> Vec<&LayoutNode> {
        self.body_rows()
            .into_iter()
            .filter(|row| row.row_kind() == Some(RowKind::Body))
            .collect()
    }

    /// Body rows that are subrows.
    pub fn subrows(&self) -> Vec<&LayoutNode> {
        self.body_rows()
            .into_iter()
            .filter(|row| row.row_kind() == Some(RowKind::Subrow))
            .collect()
    }

    /// Footer row of a table.
    pub fn footer_row(&self) -> Option<&LayoutNode> {
        match self {
            LayoutNode::Table {
                footer: Some(footer),
                ..
            } => match footer.as_ref() {
                LayoutNode::Footer { rows } => rows.first(),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns `true` for a table showing the loading placeholder.
    pub fn is_loading(&self) -> bool {
        match self {
            LayoutNode::Table { body, .. } => matches!(body.as_ref(), LayoutNode::Loading { .. }),
            _ => false,
        }
    }

    /// Kind of a row.
    pub fn row_kind(&self) -> Option<RowKind> {
        match self {
            LayoutNode::Row { props, .. } => Some(props.kind),
            _ => None,
        }
    }

    /// Row id of a body row or subrow.
    pub fn row_id(&self) -> Option<&str> {
        match self {
            LayoutNode::Row { props, .. } => props.row_id.as_deref(),
            _ => None,
        }
    }

    /// Cells of a row.
    pub fn cells(&self) -> &[LayoutNode] {
        match self {
            LayoutNode::Row { cells, .. } => cells,
            _ => &[],
        }
    }

    /// Column slots covered by a row: the sum of its cells' spans.
    pub fn slot_count(&self) -> usize {
        self.cells()
            .iter()
            .map(|cell| match cell {
                LayoutNode::Cell { props, .. } => props.col_span,
                _ => 1,
            })
            .sum()
    }

    /// Text of a cell; lines of multi-value cells joined with `\n`.
    pub fn text(&self) -> Option<String> {
        match self {
            LayoutNode::Cell { body, .. } => body.text(),
            LayoutNode::Caption { text, .. } => Some(text.clone()),
            LayoutNode::HeadCell { labels, .. } => Some(labels.join("\n")),
            _ => None,
        }
    }

    /// Texts of a row's cells.
    pub fn texts(&self) -> Vec<String> {
        self.cells()
            .iter()
            .map(|cell| cell.text().unwrap_or_default())
            .collect()
    }

    /// Display props of a cell.
    pub fn cell_props(&self) -> Option<&CellProps> {
        match self {
            LayoutNode::Cell { props, .. } => Some(props),
            _ => None,
        }
    }

    /// Node held by a cell.
    pub fn cell_node(&self) -> Option<&LayoutNode> {
        match self {
            LayoutNode::Cell { body, .. } => match body.as_ref() {
                CellBody::Node(node) => Some(node),
                _ => None,
            },
            _ => None,
        }
    }

    /// Toggle actions reachable from this node, in order.
    pub fn toggles(&self) -> Vec<(&TableAction, bool)> {
        let mut out = Vec::new();
        self.collect_toggles(&mut out);
        out
    }

    fn collect_toggles<'a>(&'a self, out: &mut Vec<(&'a TableAction, bool)>) {
        if let LayoutNode::ExpandToggle { is_open, on_toggle } = self {
            out.push((on_toggle, *is_open));
        }
        for child in self.children() {
            child.collect_toggles(out);
        }
    }
}
