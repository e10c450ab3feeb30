//! Input row parsing.
//!
//! Turns delimited text lines into note descriptors.

pub mod number;
pub mod row;

// Re-export commonly used items
pub use number::{parse_lenient, parse_strict};
pub use row::{ParsedRow, RowParser, DEFAULT_DELIMITER};
