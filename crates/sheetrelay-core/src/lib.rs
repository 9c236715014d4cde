pub mod error;
pub mod range;
pub mod value;

pub use error::RangeError;
pub use range::{column_index, column_letter, grid_range};
pub use value::{CellGrid, CellValue};
