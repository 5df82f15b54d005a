//! Cell-related types and utilities
//!
//! This module contains:
//! - [`Cell`] - One cell handed to the writer
//! - [`DataType`] - The declared type that drives serialization
//! - [`CellValue`] - The raw value stored in a cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A range of cells (e.g., "A1:B10")

mod address;
mod data;
mod data_type;
mod value;

pub use address::{CellAddress, CellRange};
pub use data::Cell;
pub use data_type::DataType;
pub use value::{CellError, CellValue, SharedString};
