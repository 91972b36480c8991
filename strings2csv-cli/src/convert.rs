use std::path::PathBuf;

use strings2csv::{ConvertOptions, Error, convert};
use tracing::debug;

/// Arguments of a single conversion run.
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub delimiter: u8,
}

/// Parse a `--delimiter` value: exactly one ASCII character, or `\t` for tab.
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => {
                    Ok(c as u8)
                }
                _ => Err(format!(
                    "delimiter must be a single ASCII character other than a quote or newline, got `{}`",
                    value
                )),
            }
        }
    }
}

/// Run one conversion and report the outcome. Returns the row count.
pub fn run_convert_command(args: ConvertArgs) -> Result<usize, Error> {
    let options = ConvertOptions::new()
        .with_output(args.output)
        .with_delimiter(args.delimiter);

    match convert(&args.input, &options) {
        Ok(summary) => {
            println!(
                "✅ Wrote {} rows to {}",
                summary.rows,
                summary.output.display()
            );
            Ok(summary.rows)
        }
        Err(e) => {
            debug!(input = %args.input.display(), "conversion failed: {}", e);
            Err(e)
        }
    }
}
