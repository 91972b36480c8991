//! All error types for the strings2csv crate.
//!
//! Every fallible operation (path validation, parsing, scraping, writing) returns
//! this error. Nothing is retried or recovered; the first error aborts the run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid file name `{0}`: the filename should end with .xml")]
    InvalidFileName(String),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("`{tag}` element is missing required attribute `{attribute}`")]
    MissingAttribute {
        tag: String,
        attribute: &'static str,
    },

    #[error("`{0}` element has no items; only string-array and plurals can be expanded")]
    NotAContainer(String),

    #[error("unsupported resource tag `{0}`")]
    UnsupportedTag(String),

    #[error("CSV write error: {0}")]
    CsvWrite(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a missing-attribute error for the given element tag.
    pub fn missing_attribute(tag: impl Into<String>, attribute: &'static str) -> Self {
        Error::MissingAttribute {
            tag: tag.into(),
            attribute,
        }
    }
}
