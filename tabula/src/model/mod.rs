//! Row and cell value model

mod money;
mod record;
mod value;

pub use money::*;
pub use record::*;
pub use value::*;
