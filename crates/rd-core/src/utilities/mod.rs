//! Scalar parsing and formatting helpers shared by every document reader.

pub mod data_formatters;
pub mod data_parsers;

pub use data_formatters::{format_bool, format_real};
pub use data_parsers::{parse_bool, parse_integer, parse_real};
