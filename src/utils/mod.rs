pub mod formatter;

pub use formatter::{format_date, format_size};
