//! CSV output for scraped rows.
//!
//! Every file starts with the fixed header `Tag,Id,Translatable,Text,Quantity`,
//! followed by one record per [`Row`] in scrape order. Quoting follows the
//! standard CSV dialect of the `csv` crate.

use std::io::Write;

use crate::{error::Error, options::CsvOptions, types::Row};

/// Column names, in output order.
pub const HEADER: [&str; 5] = ["Tag", "Id", "Translatable", "Text", "Quantity"];

/// Write the header and all rows to any writer (file, memory, etc.).
pub fn write_rows<W: Write>(rows: &[Row], writer: W, options: &CsvOptions) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render rows into an in-memory CSV buffer.
pub fn to_csv_bytes(rows: &[Row], options: &CsvOptions) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    write_rows(rows, &mut out, options)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RowTag;

    fn row(tag: RowTag, name: &str, text: &str, quantity: &str) -> Row {
        Row {
            tag,
            name: name.to_string(),
            translatable: "true".to_string(),
            text: text.to_string(),
            quantity: quantity.to_string(),
        }
    }

    fn render(rows: &[Row]) -> String {
        String::from_utf8(to_csv_bytes(rows, &CsvOptions::default()).unwrap()).unwrap()
    }

    #[test]
    fn test_header_only_for_no_rows() {
        assert_eq!(render(&[]), "Tag,Id,Translatable,Text,Quantity\n");
    }

    #[test]
    fn test_rows_in_column_order() {
        let rows = vec![
            row(RowTag::Plurals, "days", "", ""),
            row(RowTag::Item, "days", "1 day", "one"),
        ];
        assert_eq!(
            render(&rows),
            "Tag,Id,Translatable,Text,Quantity\nplurals,days,true,,\nitem,days,true,1 day,one\n"
        );
    }

    #[test]
    fn test_special_characters_are_quoted() {
        let rows = vec![
            row(RowTag::String, "comma", "alpha, beta", ""),
            row(RowTag::String, "quote", "say \"hi\"", ""),
            row(RowTag::String, "newline", "line one\nline two", ""),
        ];
        let out = render(&rows);
        assert!(out.contains("string,comma,true,\"alpha, beta\",\n"));
        assert!(out.contains("string,quote,true,\"say \"\"hi\"\"\",\n"));
        assert!(out.contains("string,newline,true,\"line one\nline two\",\n"));
    }

    #[test]
    fn test_custom_delimiter() {
        let rows = vec![row(RowTag::String, "hello", "Hello; world", "")];
        let options = CsvOptions::default().with_delimiter(b';');
        let out = String::from_utf8(to_csv_bytes(&rows, &options).unwrap()).unwrap();
        assert_eq!(
            out,
            "Tag;Id;Translatable;Text;Quantity\nstring;hello;true;\"Hello; world\";\n"
        );
    }

    #[test]
    fn test_output_parses_back_with_csv_reader() {
        let rows = vec![
            row(RowTag::StringArray, "colors", "", ""),
            row(RowTag::Item, "colors", "red, green", ""),
        ];
        let bytes = to_csv_bytes(&rows, &CsvOptions::default()).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            HEADER.to_vec()
        );
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][3], "red, green");
    }
}
