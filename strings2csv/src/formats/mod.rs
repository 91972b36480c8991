//! Input and output formats handled by strings2csv.
//!
//! [`android_strings`] reads `strings.xml` into an element tree and [`csv`]
//! writes scraped rows as a CSV table.

pub mod android_strings;
pub mod csv;

pub use self::android_strings::{Document, Element};
pub use self::csv::{HEADER, to_csv_bytes, write_rows};
