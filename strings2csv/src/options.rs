//! Options controlling where and how a conversion writes its CSV output.

use std::path::PathBuf;

/// File written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "strings.csv";

/// CSV dialect knobs for [`crate::formats::csv::write_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter byte, `,` by default.
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Behavior options for [`crate::converter::convert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Destination CSV file. Replaced atomically on success.
    pub output: PathBuf,
    pub csv: CsvOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            csv: CsvOptions::default(),
        }
    }
}

impl ConvertOptions {
    /// Creates default convert options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the destination path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the CSV field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.csv = self.csv.with_delimiter(delimiter);
        self
    }
}
