//! Table rendering
//!
//! [`Table`] walks columns × rows and emits layout through a
//! [`RenderBackend`]. [`TreeBackend`] is a backend producing a plain
//! [`LayoutNode`] tree, useful for tests and for hosts that lay out text
//! themselves.

mod backend;
mod caption;
mod footer;
mod table;
mod tree;

pub use backend::*;
pub use caption::*;
pub use table::*;
pub use tree::*;
