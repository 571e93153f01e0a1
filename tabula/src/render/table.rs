//! The table renderer.

use std::collections::HashMap;
use std::collections::HashSet;

use super::Caption;
use super::CellProps;
use super::HeadCellProps;
use super::RenderBackend;
use super::RowProps;
use super::TableParts;
use super::footer;
use crate::column::CellBody;
use crate::column::Column;
use crate::column::RowControls;
use crate::error::TableError;
use crate::expansion::ExpansionState;
use crate::expansion::RowExpansion;
use crate::expansion::SubrowKind;
use crate::expansion::TableAction;
use crate::format::Formatters;
use crate::model::TableRecord;

/// A mounted table: column declarations, the current data set and the
/// expansion state of its rows.
///
/// The table exclusively owns its expansion state; it is created at mount,
/// changed only through [`toggle`](Table::toggle), [`close`](Table::close)
/// or [`dispatch`](Table::dispatch), and dropped with the table.
///
/// # Example
///
/// ```
/// use tabula::column::{CellContent, Column};
/// use tabula::expansion::{ExpansionState, SubrowKind};
/// use tabula::model::Record;
/// use tabula::render::{LayoutNode, Table, TreeBackend};
///
/// type RowColumn = Column<Record, LayoutNode>;
///
/// let mut table = Table::builder(vec![
///     RowColumn::expandable(|_, _| CellContent::text("More")),
///     RowColumn::accessor("id"),
/// ])
/// .data(vec![Record::new("a"), Record::new("b")])
/// .mount()
/// .unwrap();
///
/// table.toggle("b", SubrowKind::Content).unwrap();
/// assert_eq!(table.expansion("b"), ExpansionState::OpenContent);
///
/// let tree = table.render(&mut TreeBackend::new());
/// assert_eq!(tree.subrows().len(), 1);
/// ```
pub struct Table<T, N> {
    columns: Vec<Column<T, N>>,
    data: Vec<T>,
    is_loading: bool,
    caption: Option<Caption>,
    formatters: Formatters,
    expansion: RowExpansion,
    content_trigger: Option<usize>,
    delete_trigger: Option<usize>,
    is_multi_value: bool,
}

/// Collects a table declaration before mounting it.
pub struct TableBuilder<T, N> {
    columns: Vec<Column<T, N>>,
    data: Vec<T>,
    is_loading: bool,
    caption: Option<Caption>,
    formatters: Formatters,
}

impl<T: TableRecord, N> TableBuilder<T, N> {
    /// Sets the data set.
    pub fn data(mut self, data: Vec<T>) -> Self {
        self.data = data;
        self
    }

    /// Sets the loading flag.
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Sets the caption.
    pub fn caption(mut self, caption: Caption) -> Self {
        self.caption = Some(caption);
        self
    }

    /// Sets the formatter registry. Defaults to `Formatters::default()`.
    pub fn formatters(mut self, formatters: Formatters) -> Self {
        self.formatters = formatters;
        self
    }

    /// Validates the declaration and seeds expansion state from each row's
    /// `default_expanded` result.
    pub fn mount(self) -> Result<Table<T, N>, TableError> {
        let (content_trigger, delete_trigger) = validate_columns(&self.columns)?;

        for (index, column) in self.columns.iter().enumerate() {
            if column.has_default_expanded() && Some(index) != content_trigger {
                log::warn!("default_expanded on column {index} ignored, not the content trigger");
            }
        }

        let is_multi_value = self.columns.iter().any(Column::is_multi_value);
        let mut table = Table {
            columns: self.columns,
            data: Vec::new(),
            is_loading: self.is_loading,
            caption: self.caption,
            formatters: self.formatters,
            expansion: RowExpansion::new(),
            content_trigger,
            delete_trigger,
            is_multi_value,
        };
        table.set_data(self.data)?;

        log::debug!(
            "Mounted table with {} columns, {} rows, {} expanded",
            table.columns.len(),
            table.data.len(),
            table.expansion.expanded().count()
        );
        Ok(table)
    }
}

/// Checks the column set and returns the content and delete trigger indices.
fn validate_columns<T, N>(
    columns: &[Column<T, N>],
) -> Result<(Option<usize>, Option<usize>), TableError> {
    if columns.is_empty() {
        return Err(TableError::NoColumns);
    }

    let mut content = None;
    let mut delete = None;
    for (index, column) in columns.iter().enumerate() {
        if let Some(kind) = column.trigger() {
            let slot = match kind {
                SubrowKind::Content => &mut content,
                SubrowKind::Delete => &mut delete,
            };
            if let Some(first) = *slot {
                return Err(TableError::DuplicateTrigger {
                    kind,
                    first,
                    second: index,
                });
            }
            *slot = Some(index);
        }

        if column.footer_decl().and_then(|footer| footer.col_span()) == Some(0) {
            return Err(TableError::ZeroColSpan { column: index });
        }
    }

    Ok((content, delete))
}

impl<T: TableRecord, N> Table<T, N> {
    /// Starts a table declaration.
    pub fn builder(columns: Vec<Column<T, N>>) -> TableBuilder<T, N> {
        TableBuilder {
            columns,
            data: Vec::new(),
            is_loading: false,
            caption: None,
            formatters: Formatters::default(),
        }
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    /// Replaces the data set.
    ///
    /// Rows that disappear lose their expansion state. New rows are seeded
    /// from `default_expanded`; rows already present keep their state.
    pub fn set_data(&mut self, data: Vec<T>) -> Result<(), TableError> {
        let ids: Vec<String> = data.iter().map(TableRecord::id).collect();
        let mut seen = HashSet::with_capacity(ids.len());
        if let Some(dup) = ids.iter().find(|id| !seen.insert(id.as_str())) {
            return Err(TableError::DuplicateRowId { id: dup.clone() });
        }

        {
            let content = self.content_trigger.and_then(|i| self.columns.get(i));
            let rows: HashMap<&str, &T> = ids.iter().map(String::as_str).zip(&data).collect();
            self.expansion
                .sync(ids.iter().map(String::as_str), |id| match (content, rows.get(id)) {
                    (Some(column), Some(row)) => column.is_default_expanded(row),
                    _ => false,
                });
        }

        self.data = data;
        Ok(())
    }

    /// Sets the loading flag.
    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    /// Replaces the caption.
    pub fn set_caption(&mut self, caption: Option<Caption>) {
        self.caption = caption;
    }

    /// Activates the `kind` trigger on a row.
    pub fn toggle(&mut self, row_id: &str, kind: SubrowKind) -> Result<ExpansionState, TableError> {
        if self.trigger_column(kind).is_none() {
            return Err(TableError::NoTrigger { kind });
        }
        self.expansion
            .toggle(row_id, kind)
            .ok_or_else(|| TableError::unknown_row(row_id))
    }

    /// Closes whatever subrow is open on a row.
    pub fn close(&mut self, row_id: &str) -> Result<ExpansionState, TableError> {
        self.expansion
            .close(row_id)
            .ok_or_else(|| TableError::unknown_row(row_id))
    }

    /// Applies an action emitted by a rendered control.
    pub fn dispatch(&mut self, action: &TableAction) -> Result<ExpansionState, TableError> {
        match action {
            TableAction::Toggle { row_id, kind } => self.toggle(row_id, *kind),
            TableAction::Close { row_id } => self.close(row_id),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Column declarations, in order.
    pub fn columns(&self) -> &[Column<T, N>] {
        &self.columns
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The current data set.
    pub fn rows(&self) -> &[T] {
        &self.data
    }

    /// Whether the table shows its loading placeholder.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The caption, if any.
    pub fn caption(&self) -> Option<&Caption> {
        self.caption.as_ref()
    }

    /// The formatter registry.
    pub fn formatters(&self) -> &Formatters {
        &self.formatters
    }

    /// Expansion state of a row. Unknown rows are closed.
    pub fn expansion(&self, row_id: &str) -> ExpansionState {
        self.expansion.state(row_id)
    }

    /// The column triggering `kind` subrows.
    pub fn trigger_column(&self, kind: SubrowKind) -> Option<&Column<T, N>> {
        let index = match kind {
            SubrowKind::Content => self.content_trigger,
            SubrowKind::Delete => self.delete_trigger,
        };
        index.and_then(|i| self.columns.get(i))
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Renders the table through `backend`.
    ///
    /// Panics raised by render functions are not caught.
    pub fn render<B>(&self, backend: &mut B) -> N
    where
        B: RenderBackend<Node = N>,
    {
        let column_count = self.columns.len();
        log::trace!(
            "Rendering table: {column_count} columns, {} rows, loading={}",
            self.data.len(),
            self.is_loading
        );

        if self.is_loading {
            let body = backend.loading(column_count);
            return backend.table(TableParts {
                caption: None,
                caption_alignment: Default::default(),
                header: None,
                body,
                footer: None,
                column_count,
            });
        }

        let caption = self
            .caption
            .as_ref()
            .map(|caption| backend.caption(&caption.value, caption.alignment));
        let header = self.render_header(backend);
        let body = self.render_body(backend);
        let footer = self.render_footer(backend);

        backend.table(TableParts {
            caption,
            caption_alignment: self.caption.as_ref().map(|c| c.alignment).unwrap_or_default(),
            header: Some(header),
            body,
            footer,
            column_count,
        })
    }

    fn render_header<B>(&self, backend: &mut B) -> N
    where
        B: RenderBackend<Node = N>,
    {
        let cells = self
            .columns
            .iter()
            .map(|column| {
                let props = HeadCellProps {
                    alignment: column.alignment(),
                    is_multi_value: self.is_multi_value,
                    col_width: column.col_width(),
                };
                backend.head_cell(column.header_labels(&self.formatters), props)
            })
            .collect();
        let row = backend.row(cells, RowProps::header());
        backend.header_section(vec![row])
    }

    fn render_body<B>(&self, backend: &mut B) -> N
    where
        B: RenderBackend<Node = N>,
    {
        let mut rows = Vec::with_capacity(self.data.len());

        for row in &self.data {
            let id = row.id();
            let state = self.expansion.state(&id);
            let controls = RowControls::new(&id, state);

            let cells = self
                .columns
                .iter()
                .map(|column| {
                    let mut props = CellProps {
                        alignment: column.alignment(),
                        is_multi_value: self.is_multi_value,
                        ..CellProps::default()
                    };
                    let body = match column.trigger() {
                        Some(kind) => {
                            props.is_expand_trigger = true;
                            let is_open = state.is_open(kind);
                            CellBody::Node(backend.expand_toggle(is_open, controls.toggle(kind)))
                        }
                        None => column.resolve(row, &controls, &self.formatters),
                    };
                    backend.cell(body, props)
                })
                .collect();
            rows.push(backend.row(cells, RowProps::body(&id)));

            if let Some(kind) = state.open_kind() {
                let body = self.render_subrow(backend, row, &controls, kind);
                let props = CellProps {
                    col_span: self.columns.len(),
                    ..CellProps::default()
                };
                let cell = backend.cell(body, props);
                rows.push(backend.row(vec![cell], RowProps::subrow(&id)));
            }
        }

        backend.body_section(rows)
    }

    fn render_subrow<B>(
        &self,
        backend: &mut B,
        row: &T,
        controls: &RowControls,
        kind: SubrowKind,
    ) -> CellBody<N>
    where
        B: RenderBackend<Node = N>,
    {
        let Some(column) = self.trigger_column(kind) else {
            return CellBody::Empty;
        };

        match column.render_subrow(row, controls) {
            Some(content) => column.finish(content, &self.formatters),
            None if kind == SubrowKind::Delete => {
                CellBody::Node(backend.confirm_delete(controls.row_id(), controls.close_subrow()))
            }
            None => CellBody::Empty,
        }
    }

    fn render_footer<B>(&self, backend: &mut B) -> Option<N>
    where
        B: RenderBackend<Node = N>,
    {
        if !footer::has_footer(&self.columns) {
            return None;
        }

        let cells = footer::layout(&self.columns)
            .into_iter()
            .map(|cell| {
                let props = CellProps {
                    alignment: cell.alignment,
                    is_multi_value: self.is_multi_value,
                    is_expand_trigger: false,
                    col_span: cell.col_span,
                };
                let body = if cell.text.is_empty() {
                    CellBody::Empty
                } else {
                    CellBody::Text(cell.text.to_string())
                };
                backend.cell(body, props)
            })
            .collect();
        let row = backend.row(cells, RowProps::footer());
        Some(backend.footer_section(vec![row]))
    }
}

impl<T, N> std::fmt::Debug for Table<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("rows", &self.data.len())
            .field("is_loading", &self.is_loading)
            .field("caption", &self.caption)
            .field("expansion", &self.expansion)
            .finish()
    }
}
