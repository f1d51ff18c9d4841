//! Small text helpers shared by the formatter and the parser.

pub mod data_formatters;
pub mod data_parsers;
