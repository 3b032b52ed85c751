pub mod columns;

pub use columns::{parse_columns, parse_line};
