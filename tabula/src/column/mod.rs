//! Column declarations.
//!
//! A [`Column`] says where a cell's value comes from (one or more accessors,
//! or a render function), how it is formatted and aligned, and what role the
//! column plays: an ordinary data column, or the trigger for a row's content
//! or delete-confirmation subrow.
//!
//! # Example
//!
//! ```
//! use tabula::column::{Alignment, CellContent, Column};
//! use tabula::format::FormatKey;
//! use tabula::model::{Record, TableRecord};
//! use tabula::render::LayoutNode;
//!
//! type OrderColumn = Column<Record, LayoutNode>;
//!
//! let columns = vec![
//!     OrderColumn::expandable(|row, _| CellContent::text(format!("Details of {}", row.id())))
//!         .default_expanded(|row| row.id() == "Row 2")
//!         .width(1),
//!     OrderColumn::accessor("id"),
//!     OrderColumn::accessor("date").format(FormatKey::DateTime),
//!     OrderColumn::accessor("price")
//!         .format(FormatKey::Money)
//!         .align(Alignment::Right)
//!         .footer_span("Total:", 3, Some(Alignment::Right)),
//!     OrderColumn::delete().width(1),
//! ];
//! # let _ = columns;
//! ```

mod content;
mod item;

pub use content::*;
pub use item::*;

use crate::expansion::SubrowKind;
use crate::format::FormatKey;
use crate::format::Formatters;
use crate::model::TableRecord;
use crate::model::Value;

/// Renders a cell (or, on trigger columns, a subrow) for a row.
pub type RenderFn<T, N> = Box<dyn Fn(&T, &RowControls) -> CellContent<N>>;

/// Decides per row whether the content subrow starts open.
pub type RowPredicate<T> = Box<dyn Fn(&T) -> bool>;

/// One logical column of a table.
pub struct Column<T, N> {
    accessors: Vec<String>,
    render: Option<RenderFn<T, N>>,
    format: Option<FormatKey>,
    alignment: Alignment,
    header: Option<String>,
    footer: Option<Footer>,
    width: Option<u16>,
    trigger: Option<SubrowKind>,
    default_expanded: Option<RowPredicate<T>>,
}

impl<T, N> Column<T, N> {
    fn empty() -> Self {
        Self {
            accessors: Vec::new(),
            render: None,
            format: None,
            alignment: Alignment::Left,
            header: None,
            footer: None,
            width: None,
            trigger: None,
            default_expanded: None,
        }
    }

    /// A column showing one field of the row.
    pub fn accessor(key: impl Into<String>) -> Self {
        Self {
            accessors: vec![key.into()],
            ..Self::empty()
        }
    }

    /// A multi-value column showing several fields stacked in one cell.
    pub fn accessors<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accessors: keys.into_iter().map(Into::into).collect(),
            ..Self::empty()
        }
    }

    /// A column whose cells are computed by `render`.
    pub fn render(render: impl Fn(&T, &RowControls) -> CellContent<N> + 'static) -> Self {
        Self {
            render: Some(Box::new(render)),
            ..Self::empty()
        }
    }

    /// The trigger column for the content subrow. `subrow` renders the
    /// content shown beneath an expanded row.
    pub fn expandable(subrow: impl Fn(&T, &RowControls) -> CellContent<N> + 'static) -> Self {
        Self {
            render: Some(Box::new(subrow)),
            trigger: Some(SubrowKind::Content),
            ..Self::empty()
        }
    }

    /// The trigger column for the delete-confirmation subrow, rendered by the
    /// backend's confirmation view.
    pub fn delete() -> Self {
        Self {
            trigger: Some(SubrowKind::Delete),
            ..Self::empty()
        }
    }

    /// The trigger column for a delete-confirmation subrow rendered by
    /// `confirm`.
    pub fn delete_with(confirm: impl Fn(&T, &RowControls) -> CellContent<N> + 'static) -> Self {
        Self {
            render: Some(Box::new(confirm)),
            trigger: Some(SubrowKind::Delete),
            ..Self::empty()
        }
    }

    /// Computes cells with `render`, taking precedence over the accessor.
    pub fn with_render(
        mut self,
        render: impl Fn(&T, &RowControls) -> CellContent<N> + 'static,
    ) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Formats raw values with the given formatter.
    pub fn format(mut self, format: FormatKey) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the column alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Overrides the header label.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Sets static footer text.
    pub fn footer(mut self, footer: impl Into<Footer>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Sets a footer cell that merges `col_span` leading footer slots.
    pub fn footer_span(
        mut self,
        value: impl Into<String>,
        col_span: usize,
        alignment: Option<Alignment>,
    ) -> Self {
        self.footer = Some(Footer::Span {
            value: value.into(),
            col_span,
            alignment,
        });
        self
    }

    /// Sets a relative width hint, passed through to the backend.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Seeds the content subrow open for rows matching `predicate` when the
    /// row first appears in the table.
    pub fn default_expanded(mut self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        self.default_expanded = Some(Box::new(predicate));
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns `true` if the column stacks several values per cell.
    pub fn is_multi_value(&self) -> bool {
        self.accessors.len() > 1
    }

    /// The formatter applied to raw values.
    pub fn format_key(&self) -> Option<FormatKey> {
        self.format
    }

    /// Horizontal alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Relative width hint.
    pub fn col_width(&self) -> Option<u16> {
        self.width
    }

    /// The footer, if one is declared.
    pub fn footer_decl(&self) -> Option<&Footer> {
        self.footer.as_ref()
    }

    /// The subrow kind this column triggers, if it is a trigger column.
    pub fn trigger(&self) -> Option<SubrowKind> {
        self.trigger
    }

    pub(crate) fn has_default_expanded(&self) -> bool {
        self.default_expanded.is_some()
    }

    /// Evaluates the `default_expanded` predicate. `false` if none is set.
    pub fn is_default_expanded(&self, row: &T) -> bool {
        self.default_expanded
            .as_ref()
            .is_some_and(|predicate| predicate(row))
    }

    /// Header labels: the override if set, otherwise each accessor translated.
    ///
    /// Structural columns without accessors have no labels.
    pub fn header_labels(&self, formatters: &Formatters) -> Vec<String> {
        match &self.header {
            Some(header) => vec![header.clone()],
            None => self
                .accessors
                .iter()
                .map(|key| formatters.translate(key))
                .collect(),
        }
    }

    /// Turns render output into backend content, formatting raw values.
    pub(crate) fn finish(&self, content: CellContent<N>, formatters: &Formatters) -> CellBody<N> {
        match content {
            CellContent::Empty => CellBody::Empty,
            CellContent::Text(text) => CellBody::Text(text),
            CellContent::Value(value) => self.display(&value, formatters),
            CellContent::Lines(lines) => CellBody::Lines(lines),
            CellContent::Node(node) => CellBody::Node(node),
        }
    }

    fn display(&self, value: &Value, formatters: &Formatters) -> CellBody<N> {
        if value.is_null() {
            return CellBody::Empty;
        }
        CellBody::Text(self.format_value(value, formatters))
    }

    fn format_value(&self, value: &Value, formatters: &Formatters) -> String {
        match self.format {
            Some(key) => formatters.format(key, value),
            None => value.to_string(),
        }
    }

    /// Runs the render function for a subrow. `None` if the column has none.
    pub(crate) fn render_subrow(&self, row: &T, controls: &RowControls) -> Option<CellContent<N>> {
        self.render.as_ref().map(|render| render(row, controls))
    }
}

impl<T: TableRecord, N> Column<T, N> {
    /// Resolves the display content of this column's cell for `row`.
    ///
    /// Trigger columns have no cell content of their own; the table renders
    /// their toggle control instead.
    pub fn resolve(&self, row: &T, controls: &RowControls, formatters: &Formatters) -> CellBody<N> {
        if self.trigger.is_some() {
            return CellBody::Empty;
        }

        if let Some(render) = &self.render {
            return self.finish(render(row, controls), formatters);
        }

        match self.accessors.as_slice() {
            [] => CellBody::Empty,
            [key] => self.display(&row.field(key), formatters),
            keys => CellBody::Lines(
                keys.iter()
                    .map(|key| self.format_value(&row.field(key), formatters))
                    .collect(),
            ),
        }
    }
}

impl<T, N> std::fmt::Debug for Column<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("accessors", &self.accessors)
            .field("render", &self.render.is_some())
            .field("format", &self.format)
            .field("alignment", &self.alignment)
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("width", &self.width)
            .field("trigger", &self.trigger)
            .field("default_expanded", &self.default_expanded.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::expansion::ExpansionState;
    use crate::format::FormatConfig;
    use crate::model::Money;
    use crate::model::Record;

    type TestColumn = Column<Record, String>;

    fn controls() -> RowControls {
        RowControls::new("Row 1", ExpansionState::Closed)
    }

    fn row() -> Record {
        Record::new("Row 1")
            .set("item", "Coffee")
            .set("qty", 2i64)
            .set("price", Money::new(Decimal::new(450, 2), "USD"))
            .set("inStock", true)
    }

    #[test]
    fn test_accessor_without_format_is_string_coercion() {
        let f = Formatters::default();
        let cell = TestColumn::accessor("qty").resolve(&row(), &controls(), &f);
        assert_eq!(cell, CellBody::Text("2".into()));
    }

    #[test]
    fn test_accessor_with_format() {
        let f = Formatters::default();
        let price = TestColumn::accessor("price").format(FormatKey::Money);
        assert_eq!(price.resolve(&row(), &controls(), &f), CellBody::Text("$4.50".into()));

        let stock = TestColumn::accessor("inStock").format(FormatKey::Boolean);
        assert_eq!(stock.resolve(&row(), &controls(), &f), CellBody::Text("Yes".into()));
    }

    #[test]
    fn test_missing_field_is_empty() {
        let f = Formatters::default();
        let cell = TestColumn::accessor("supplier")
            .format(FormatKey::Date)
            .resolve(&row(), &controls(), &f);
        assert_eq!(cell, CellBody::Empty);
    }

    #[test]
    fn test_render_takes_precedence_and_text_is_verbatim() {
        let f = Formatters::default();
        let column = TestColumn::accessor("qty")
            .format(FormatKey::Money)
            .with_render(|row, _| CellContent::text(format!("{} pcs", row.field("qty"))));
        assert_eq!(column.resolve(&row(), &controls(), &f), CellBody::Text("2 pcs".into()));
    }

    #[test]
    fn test_render_value_is_formatted() {
        let f = Formatters::default();
        let column = TestColumn::render(|row, _| {
            let qty = row.field("qty").as_decimal().unwrap_or_default();
            match row.field("price") {
                Value::Money(price) => CellContent::value(price.checked_times(qty)),
                _ => CellContent::Empty,
            }
        })
        .format(FormatKey::Money);
        assert_eq!(column.resolve(&row(), &controls(), &f), CellBody::Text("$9.00".into()));
    }

    #[test]
    fn test_render_receives_controls() {
        let f = Formatters::default();
        let column = TestColumn::render(|_, controls| CellContent::text(controls.row_id()));
        assert_eq!(column.resolve(&row(), &controls(), &f), CellBody::Text("Row 1".into()));
    }

    #[test]
    fn test_multi_value() {
        let f = Formatters::default();
        let column = TestColumn::accessors(["item", "qty"]);
        assert!(column.is_multi_value());
        assert_eq!(
            column.resolve(&row(), &controls(), &f),
            CellBody::Lines(vec!["Coffee".into(), "2".into()])
        );
        assert_eq!(column.header_labels(&f), ["item", "qty"]);
    }

    #[test]
    fn test_structural_columns_have_no_content() {
        let f = Formatters::default();
        let expand = TestColumn::expandable(|_, _| CellContent::text("details"));
        assert_eq!(expand.resolve(&row(), &controls(), &f), CellBody::Empty);
        assert!(expand.header_labels(&f).is_empty());
        assert_eq!(TestColumn::delete().trigger(), Some(SubrowKind::Delete));
    }

    #[test]
    fn test_header_override_and_translation() {
        let f = Formatters::new(FormatConfig::default().with_translation("qty", "Quantity"));
        assert_eq!(TestColumn::accessor("qty").header_labels(&f), ["Quantity"]);
        assert_eq!(TestColumn::accessor("item").header_labels(&f), ["item"]);
        assert_eq!(
            TestColumn::accessor("inStock").header("In stock").header_labels(&f),
            ["In stock"]
        );
    }

    #[test]
    fn test_default_expanded_predicate() {
        let column = TestColumn::expandable(|_, _| CellContent::Empty)
            .default_expanded(|row| row.id() == "Row 1");
        assert!(column.is_default_expanded(&row()));
        assert!(!TestColumn::accessor("id").is_default_expanded(&row()));
    }
}
