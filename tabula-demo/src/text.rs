//! Plain text rendering of layout trees.

use tabula::column::Alignment;
use tabula::column::CellBody;
use tabula::expansion::SubrowKind;
use tabula::expansion::TableAction;
use tabula::render::LayoutNode;
use tabula::render::RowKind;
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " │ ";
const SUBROW_INDENT: &str = "  ┆ ";
const RULE: &str = "─";

/// Renders a layout tree as lines of terminal text.
pub fn render(node: &LayoutNode) -> String {
    node_lines(node).join("\n")
}

struct GridCell {
    span: usize,
    alignment: Alignment,
    lines: Vec<String>,
}

enum Block {
    Row(Vec<GridCell>),
    Rule,
    Indented(Vec<String>),
    Plain(Vec<String>),
}

fn node_lines(node: &LayoutNode) -> Vec<String> {
    match node {
        LayoutNode::Table { .. } => table_lines(node),
        LayoutNode::Caption { text, .. } => vec![text.clone()],
        LayoutNode::ExpandToggle { is_open, on_toggle } => {
            vec![toggle_symbol(*is_open, on_toggle).to_string()]
        }
        LayoutNode::ConfirmDelete { row_id, .. } => {
            vec![format!("Delete {row_id}? [Confirm] [Cancel]")]
        }
        LayoutNode::Loading { .. } => vec!["Loading…".into()],
        LayoutNode::Cell { body, .. } => body_lines(body),
        _ => Vec::new(),
    }
}

fn toggle_symbol(is_open: bool, action: &TableAction) -> &'static str {
    let kind = match action {
        TableAction::Toggle { kind, .. } => *kind,
        TableAction::Close { .. } => SubrowKind::Content,
    };
    match (kind, is_open) {
        (SubrowKind::Content, false) => "▸",
        (SubrowKind::Content, true) => "▾",
        (SubrowKind::Delete, false) => "✗",
        (SubrowKind::Delete, true) => "✘",
    }
}

fn body_lines(body: &CellBody<LayoutNode>) -> Vec<String> {
    match body {
        CellBody::Empty => vec![String::new()],
        CellBody::Text(text) => text.lines().map(str::to_string).collect(),
        CellBody::Lines(lines) if lines.is_empty() => vec![String::new()],
        CellBody::Lines(lines) => lines.clone(),
        CellBody::Node(node) => node_lines(node),
    }
}

fn grid_cell(cell: &LayoutNode) -> GridCell {
    match cell {
        LayoutNode::HeadCell { labels, props } => GridCell {
            span: 1,
            alignment: props.alignment,
            lines: labels.clone(),
        },
        LayoutNode::Cell { body, props } => GridCell {
            span: props.col_span.max(1),
            alignment: props.alignment,
            lines: body_lines(body),
        },
        other => GridCell {
            span: 1,
            alignment: Alignment::Left,
            lines: node_lines(other),
        },
    }
}

fn table_lines(table: &LayoutNode) -> Vec<String> {
    let LayoutNode::Table {
        caption,
        caption_alignment,
        header,
        body,
        footer,
        column_count,
    } = table
    else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    if let Some(header) = header {
        blocks.extend(section_blocks(header));
        blocks.push(Block::Rule);
    }
    blocks.extend(section_blocks(body));
    if let Some(footer) = footer {
        blocks.push(Block::Rule);
        blocks.extend(section_blocks(footer));
    }

    let widths = column_widths(&blocks, *column_count);
    let total = row_width(&widths);

    let mut lines = Vec::new();
    for block in &blocks {
        match block {
            Block::Row(cells) => lines.extend(row_lines(cells, &widths)),
            Block::Rule => lines.push(RULE.repeat(total)),
            Block::Indented(inner) => lines.extend(
                inner
                    .iter()
                    .map(|line| format!("{SUBROW_INDENT}{line}").trim_end().to_string()),
            ),
            Block::Plain(inner) => lines.extend(inner.iter().cloned()),
        }
    }

    if let Some(caption) = caption {
        let text = node_lines(caption).join(" ");
        let width = total.max(text.width());
        let line = pad(&text, width, caption_alignment.horizontal()).trim_end().to_string();
        if caption_alignment.is_top() {
            lines.insert(0, line);
        } else {
            lines.push(line);
        }
    }

    lines
}

fn section_blocks(section: &LayoutNode) -> Vec<Block> {
    match section {
        LayoutNode::Header { rows }
        | LayoutNode::Body { rows }
        | LayoutNode::Footer { rows } => rows
            .iter()
            .map(|row| match row.row_kind() {
                Some(RowKind::Subrow) => {
                    Block::Indented(row.cells().iter().flat_map(node_lines).collect())
                }
                _ => Block::Row(row.cells().iter().map(grid_cell).collect()),
            })
            .collect(),
        other => vec![Block::Plain(node_lines(other))],
    }
}

/// Single-span cells set the widths; a spanning cell that does not fit
/// widens the last column it covers.
fn column_widths(blocks: &[Block], column_count: usize) -> Vec<usize> {
    let mut widths = vec![0; column_count];
    let rows = || {
        blocks.iter().filter_map(|block| match block {
            Block::Row(cells) => Some(cells),
            _ => None,
        })
    };

    for cells in rows() {
        let mut slot = 0;
        for cell in cells {
            if cell.span == 1 && slot < column_count {
                widths[slot] = widths[slot].max(text_width(&cell.lines));
            }
            slot += cell.span;
        }
    }

    for cells in rows() {
        let mut slot = 0;
        for cell in cells {
            let end = (slot + cell.span).min(column_count);
            if cell.span > 1 && slot < end {
                let covered = row_width(&widths[slot..end]);
                let needed = text_width(&cell.lines);
                if needed > covered {
                    widths[end - 1] += needed - covered;
                }
            }
            slot += cell.span;
        }
    }

    widths
}

fn row_lines(cells: &[GridCell], widths: &[usize]) -> Vec<String> {
    let height = cells.iter().map(|cell| cell.lines.len()).max().unwrap_or(0);
    let mut lines = Vec::with_capacity(height);

    for index in 0..height {
        let mut slot = 0;
        let mut parts = Vec::with_capacity(cells.len());
        for cell in cells {
            let end = (slot + cell.span).min(widths.len());
            let width = if slot < end { row_width(&widths[slot..end]) } else { 0 };
            let text = cell.lines.get(index).map(String::as_str).unwrap_or("");
            parts.push(pad(text, width, cell.alignment));
            slot += cell.span;
        }
        lines.push(parts.join(SEPARATOR).trim_end().to_string());
    }

    lines
}

fn text_width(lines: &[String]) -> usize {
    lines.iter().map(|line| line.width()).max().unwrap_or(0)
}

fn row_width(widths: &[usize]) -> usize {
    let gaps = widths.len().saturating_sub(1) * SEPARATOR.width();
    widths.iter().sum::<usize>() + gaps
}

fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    let fill = width.saturating_sub(text.width());
    match alignment {
        Alignment::Left => format!("{text}{}", " ".repeat(fill)),
        Alignment::Right => format!("{}{text}", " ".repeat(fill)),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}
