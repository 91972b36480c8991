//! End-to-end conversion of a `strings.xml` file into a CSV table.
//!
//! The CSV is rendered fully in memory before anything touches the
//! destination, and the destination is replaced through a temporary file in
//! the same directory. A failed run therefore never leaves partial output.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    error::Error,
    formats::{android_strings::Document, csv::to_csv_bytes},
    options::ConvertOptions,
    scraper::scrape,
    traits::Parser,
    types::Row,
};

/// Outcome of a successful [`convert`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Where the CSV was written.
    pub output: PathBuf,
    /// Number of top-level resource elements scraped.
    pub resources: usize,
    /// Number of CSV records written, header excluded.
    pub rows: usize,
}

/// Reject any input path that does not end with `.xml`.
///
/// # Example
/// ```rust
/// use strings2csv::converter::validate_input_path;
/// assert!(validate_input_path("res/values/strings.xml").is_ok());
/// assert!(validate_input_path("strings.txt").is_err());
/// ```
pub fn validate_input_path<P: AsRef<Path>>(path: P) -> Result<(), Error> {
    let display = path.as_ref().to_string_lossy();
    if display.ends_with(".xml") {
        Ok(())
    } else {
        Err(Error::InvalidFileName(display.into_owned()))
    }
}

/// Validate, parse and scrape one file into rows.
pub fn scrape_file<P: AsRef<Path>>(path: P) -> Result<Vec<Row>, Error> {
    Ok(read_and_scrape(path.as_ref())?.1)
}

/// Run the whole pipeline on an XML string and return the CSV text.
///
/// # Example
/// ```rust
/// use strings2csv::{ConvertOptions, converter::convert_str};
/// let csv = convert_str(
///     r#"<resources><string name="hello">Hello</string></resources>"#,
///     &ConvertOptions::default(),
/// )?;
/// assert_eq!(csv, "Tag,Id,Translatable,Text,Quantity\nstring,hello,true,Hello,\n");
/// # Ok::<(), strings2csv::Error>(())
/// ```
pub fn convert_str(xml: &str, options: &ConvertOptions) -> Result<String, Error> {
    let document = Document::from_str(xml)?;
    let rows = scrape(&document.root)?;
    let bytes = to_csv_bytes(&rows, &options.csv)?;
    // Every field came from a `&str`, so the buffer is valid UTF-8.
    String::from_utf8(bytes).map_err(|e| Error::InvalidDocument(e.to_string()))
}

/// Convert `input` into a CSV file at `options.output`.
///
/// # Errors
///
/// Returns [`Error::InvalidFileName`] before any I/O when `input` does not end
/// with `.xml`, and otherwise the first parse, scrape or write error. On error
/// the destination is left untouched.
///
/// # Example
///
/// ```rust,no_run
/// use strings2csv::{ConvertOptions, convert};
/// let summary = convert("res/values/strings.xml", &ConvertOptions::new().with_output("strings.csv"))?;
/// println!("{} rows", summary.rows);
/// # Ok::<(), strings2csv::Error>(())
/// ```
pub fn convert<P: AsRef<Path>>(input: P, options: &ConvertOptions) -> Result<ConversionSummary, Error> {
    let input = input.as_ref();
    info!(input = %input.display(), output = %options.output.display(), "converting");

    let (resources, rows) = read_and_scrape(input)?;
    let bytes = to_csv_bytes(&rows, &options.csv)?;
    debug!(bytes = bytes.len(), "rendered csv");

    write_atomically(&options.output, &bytes)?;
    info!(rows = rows.len(), output = %options.output.display(), "wrote csv");

    Ok(ConversionSummary {
        output: options.output.clone(),
        resources,
        rows: rows.len(),
    })
}

fn read_and_scrape(path: &Path) -> Result<(usize, Vec<Row>), Error> {
    validate_input_path(path)?;
    let document = Document::read_from(path)?;
    let resources = document.root.children.len();
    debug!(resources, "parsed document");
    let rows = scrape(&document.root)?;
    Ok((resources, rows))
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // New files get 0o666 minus the umask, like a plain `File::create`.
        builder.permissions(
            existing
                .clone()
                .unwrap_or_else(|| fs::Permissions::from_mode(0o666)),
        );
    }

    let mut tmp = builder.tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;

    // The umask may have narrowed the temp file; restore the exact old mode.
    if let Some(permissions) = existing {
        fs::set_permissions(path, permissions)?;
    }
    Ok(())
}
