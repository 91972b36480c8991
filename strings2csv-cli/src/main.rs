use std::path::PathBuf;

use clap::Parser;
use strings2csv::options::DEFAULT_OUTPUT;
use strings2csv_cli::{ConvertArgs, logging, parse_delimiter, run_convert_command};

/// Convert an Android strings.xml file into a CSV table for translators.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The strings.xml file to convert (must end with .xml)
    input: PathBuf,

    /// The CSV file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Field delimiter, a single ASCII character (use \t for tab)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let result = run_convert_command(ConvertArgs {
        input: args.input,
        output: args.output,
        delimiter: args.delimiter,
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
