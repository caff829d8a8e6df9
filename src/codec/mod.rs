//! Codec for file interchange
//!
//! Converts between in-memory expense records and their flat textual form:
//!
//! - `amount`: currency amounts (`$1,234.56`)
//! - `date`: calendar dates (`2024/1/31`)
//! - `row`: five-field CSV rows and whole files of them

pub mod amount;
pub mod date;
pub mod row;

pub use amount::{format_amount, parse_amount};
pub use date::{
    format_date, format_date_with, parse_date, parse_date_range, validate_date_format,
};
pub use row::{from_row, read_rows, to_row, write_rows, ROW_WIDTH};
