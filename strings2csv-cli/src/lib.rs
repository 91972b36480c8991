//! CLI library for testing purposes

pub mod convert;
pub mod logging;

pub use convert::{ConvertArgs, parse_delimiter, run_convert_command};
