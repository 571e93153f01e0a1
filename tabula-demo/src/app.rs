//! The order table and its nested detail table.

use rust_decimal::Decimal;
use tabula::TableError;
use tabula::column::Alignment;
use tabula::column::CellContent;
use tabula::column::Column;
use tabula::format::FormatKey;
use tabula::format::Formatters;
use tabula::render::Caption;
use tabula::render::CaptionAlignment;
use tabula::render::LayoutNode;
use tabula::render::Table;
use tabula::render::TreeBackend;

use crate::mock::Details;
use crate::mock::Order;

type OrderColumn = Column<Order, LayoutNode>;
type DetailColumn = Column<Details, LayoutNode>;

pub type OrderTable = Table<Order, LayoutNode>;

const INITIALLY_OPEN: &[&str] = &["Row 2", "Row 4"];

/// Mounts the order table.
pub fn orders_table(orders: Vec<Order>, formatters: Formatters) -> Result<OrderTable, TableError> {
    let total = grand_total(&orders, &formatters);
    let detail_formatters = formatters.clone();

    Table::builder(vec![
        OrderColumn::expandable(move |order, _| {
            details_table(&order.additional_data, &detail_formatters)
        })
            .default_expanded(|order| INITIALLY_OPEN.contains(&order.id.as_str()))
            .width(1),
        OrderColumn::accessor("id"),
        OrderColumn::accessor("date").format(FormatKey::DateTime),
        OrderColumn::accessor("item"),
        OrderColumn::accessor("qty").align(Alignment::Center),
        OrderColumn::accessor("price")
            .format(FormatKey::Money)
            .align(Alignment::Right)
            .footer_span("Total:", 6, Some(Alignment::Right))
            .width(10),
        OrderColumn::render(|order, _| CellContent::value(order.row_total()))
            .format(FormatKey::Money)
            .header("Row total")
            .align(Alignment::Right)
            .width(10)
            .footer(total),
        OrderColumn::delete().width(1),
    ])
    .data(orders)
    .formatters(formatters)
    .caption(
        Caption::new("Example table rendering with a plain text backend")
            .align(CaptionAlignment::TopLeft),
    )
    .mount()
}

/// Mounts the table again for a new data set, keeping the expansion state
/// of rows that survive. The footer total is recomputed.
pub fn remount(
    old: &OrderTable,
    orders: Vec<Order>,
    formatters: Formatters,
) -> Result<OrderTable, TableError> {
    let ids: Vec<String> = orders.iter().map(|order| order.id.clone()).collect();
    let mut table = orders_table(orders, formatters)?;
    for id in &ids {
        let state = old.expansion(id);
        table.close(id)?;
        if let Some(kind) = state.open_kind() {
            table.toggle(id, kind)?;
        }
    }
    Ok(table)
}

fn details_table(details: &Details, formatters: &Formatters) -> CellContent<LayoutNode> {
    let table = Table::builder(vec![
        DetailColumn::accessor("description"),
        DetailColumn::accessor("category"),
        DetailColumn::accessor("supplier"),
        DetailColumn::accessor("inStock")
            .format(FormatKey::Boolean)
            .align(Alignment::Center)
            .header("In stock"),
        DetailColumn::accessor("rating").align(Alignment::Right),
    ])
    .data(vec![details.clone()])
    .formatters(formatters.clone())
    .mount();

    match table {
        Ok(table) => CellContent::Node(table.render(&mut TreeBackend::new())),
        Err(e) => {
            log::error!("Detail table failed to mount: {}", e);
            CellContent::text(e.to_string())
        }
    }
}

/// Sum of row totals in the first row's currency.
fn grand_total(orders: &[Order], formatters: &Formatters) -> String {
    let Some(first) = orders.first() else {
        return String::new();
    };
    let currency = first.price.currency();

    let mut sum = Decimal::ZERO;
    for order in orders {
        if order.price.currency() != currency {
            log::warn!(
                "Order '{}' in {} left out of the {} total",
                order.id,
                order.price.currency(),
                currency
            );
            continue;
        }
        let next = order
            .row_total()
            .and_then(|total| sum.checked_add(total.amount()));
        match next {
            Some(next) => sum = next,
            None => log::warn!("Order '{}' left out of the total, sum overflows", order.id),
        }
    }
    formatters.amount(sum, currency)
}
