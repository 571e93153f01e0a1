//! Declarative table rendering
//!
//! Describe a table as an ordered set of typed columns, hand it a data set and
//! render it through any [`RenderBackend`](render::RenderBackend). The engine
//! resolves cell values, formats them, tracks which rows have an open subrow
//! and emits header, body, subrow, footer and caption layout in column order.
//!
//! # Example
//!
//! ```
//! use tabula::column::{Alignment, Column};
//! use tabula::format::FormatKey;
//! use tabula::model::{Money, Record};
//! use tabula::render::{Table, TreeBackend};
//! use rust_decimal::Decimal;
//!
//! let rows = vec![
//!     Record::new("Row 1")
//!         .set("item", "Coffee")
//!         .set("price", Money::new(Decimal::new(450, 2), "USD")),
//! ];
//!
//! let mut table = Table::builder(vec![
//!     Column::accessor("item"),
//!     Column::accessor("price")
//!         .format(FormatKey::Money)
//!         .align(Alignment::Right),
//! ])
//! .data(rows)
//! .mount()
//! .unwrap();
//!
//! let tree = table.render(&mut TreeBackend::new());
//! assert_eq!(tree.body_rows().len(), 1);
//! ```

pub mod column;
pub mod error;
pub mod expansion;
pub mod format;
pub mod model;
pub mod render;

pub use error::ConfigError;
pub use error::TableError;
