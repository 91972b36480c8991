#![forbid(unsafe_code)]
//! Flatten Android `strings.xml` resources into a CSV table for translators.
//!
//! Every `string`, `string-array` and `plurals` resource becomes one row, and each
//! `<item>` of an array or plural becomes a row of its own that inherits the
//! container's name and `translatable` flag.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use strings2csv::{ConvertOptions, convert};
//!
//! let summary = convert(
//!     "app/src/main/res/values/strings.xml",
//!     &ConvertOptions::new().with_output("strings.csv"),
//! )?;
//! println!("wrote {} rows", summary.rows);
//! # Ok::<(), strings2csv::Error>(())
//! ```
//!
//! # Output
//!
//! The CSV always starts with `Tag,Id,Translatable,Text,Quantity`:
//!
//! ```text
//! Tag,Id,Translatable,Text,Quantity
//! string,hello_id,true,Hello,
//! plurals,days,true,,
//! item,days,true,1 day,one
//! item,days,true,%d days,other
//! ```

pub mod converter;
pub mod error;
pub mod formats;
pub mod options;
pub mod scraper;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    converter::{ConversionSummary, convert, convert_str, scrape_file},
    error::Error,
    formats::{Document, Element},
    options::{ConvertOptions, CsvOptions},
    scraper::scrape,
    types::{ResourceKind, Row, RowTag},
};
