//! Footer slot layout

use crate::column::Alignment;
use crate::column::Column;
use crate::column::Footer;

/// One cell of the footer row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FooterCell<'a> {
    /// Column that declared the cell's content.
    pub column: usize,
    pub text: &'a str,
    pub alignment: Alignment,
    pub col_span: usize,
}

/// Returns `true` if any column declares visible footer text.
pub(crate) fn has_footer<T, N>(columns: &[Column<T, N>]) -> bool {
    columns
        .iter()
        .any(|column| column.footer_decl().is_some_and(|footer| !footer.is_empty()))
}

/// Lays out the footer row so that its cells cover exactly `columns.len()`
/// slots.
///
/// Spanning footers claim leading slots in declaration order: the first one
/// starts at slot 0, each following one right after the previous. The
/// remaining slots carry each column's own text footer, or nothing.
pub(crate) fn layout<T, N>(columns: &[Column<T, N>]) -> Vec<FooterCell<'_>> {
    let count = columns.len();
    let mut cells = Vec::with_capacity(count);
    let mut claimed = 0;

    for (index, column) in columns.iter().enumerate() {
        let Some(Footer::Span {
            value,
            col_span,
            alignment,
        }) = column.footer_decl()
        else {
            continue;
        };

        if claimed == count {
            log::warn!("Footer span of column {index} has no free slots left, dropped");
            continue;
        }
        let end = (claimed + col_span).min(count);
        if end - claimed < *col_span {
            log::warn!(
                "Footer span of column {index} clamped from {col_span} to {} slots",
                end - claimed
            );
        }

        cells.push(FooterCell {
            column: index,
            text: value,
            alignment: alignment.unwrap_or(column.alignment()),
            col_span: end - claimed,
        });
        claimed = end;
    }

    for (slot, column) in columns.iter().enumerate().take(claimed) {
        if let Some(Footer::Text(text)) = column.footer_decl() {
            if !text.is_empty() {
                log::warn!("Footer '{text}' of column {slot} is covered by a span, dropped");
            }
        }
    }

    for (slot, column) in columns.iter().enumerate().skip(claimed) {
        let text = match column.footer_decl() {
            Some(Footer::Text(text)) => text.as_str(),
            _ => "",
        };
        cells.push(FooterCell {
            column: slot,
            text,
            alignment: column.alignment(),
            col_span: 1,
        });
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    type TestColumn = Column<Record, ()>;

    fn spans<'a>(cells: &[FooterCell<'a>]) -> Vec<(usize, &'a str, usize)> {
        cells
            .iter()
            .map(|cell| (cell.column, cell.text, cell.col_span))
            .collect()
    }

    #[test]
    fn test_no_footer() {
        let columns = vec![TestColumn::accessor("a"), TestColumn::accessor("b").footer("")];
        assert!(!has_footer(&columns));
    }

    #[test]
    fn test_total_label_spans_leading_columns() {
        let columns = vec![
            TestColumn::accessor("a"),
            TestColumn::accessor("b"),
            TestColumn::accessor("c"),
            TestColumn::accessor("price").footer_span("Total:", 3, Some(Alignment::Right)),
            TestColumn::accessor("total").footer("9.00"),
            TestColumn::delete(),
        ];
        assert!(has_footer(&columns));

        let cells = layout(&columns);
        assert_eq!(
            spans(&cells),
            [(3, "Total:", 3), (3, "", 1), (4, "9.00", 1), (5, "", 1)]
        );
        assert_eq!(cells[0].alignment, Alignment::Right);
        assert_eq!(cells.iter().map(|c| c.col_span).sum::<usize>(), columns.len());
    }

    #[test]
    fn test_span_over_all_columns() {
        let columns: Vec<TestColumn> = (0..5)
            .map(|i| TestColumn::accessor(format!("c{i}")))
            .chain([TestColumn::accessor("price").footer_span("Total:", 6, None)])
            .collect();

        let cells = layout(&columns);
        assert_eq!(spans(&cells), [(5, "Total:", 6)]);
    }

    #[test]
    fn test_oversized_span_is_clamped() {
        let columns = vec![
            TestColumn::accessor("a").footer_span("All", 10, None),
            TestColumn::accessor("b").footer_span("Late", 1, None),
        ];
        let cells = layout(&columns);
        assert_eq!(spans(&cells), [(0, "All", 2)]);
    }

    #[test]
    fn test_consecutive_spans() {
        let columns = vec![
            TestColumn::accessor("a"),
            TestColumn::accessor("b").footer_span("First", 2, None),
            TestColumn::accessor("c").footer_span("Second", 1, None),
            TestColumn::accessor("d").footer("d"),
        ];
        let cells = layout(&columns);
        assert_eq!(spans(&cells), [(1, "First", 2), (2, "Second", 1), (3, "d", 1)]);
    }

    #[test]
    fn test_covered_text_footer_is_dropped() {
        let columns = vec![
            TestColumn::accessor("a").footer("hidden"),
            TestColumn::accessor("b").footer_span("Sum", 1, None),
            TestColumn::accessor("c").footer("shown"),
        ];
        let cells = layout(&columns);
        assert_eq!(spans(&cells), [(1, "Sum", 1), (1, "", 1), (2, "shown", 1)]);
    }
}
