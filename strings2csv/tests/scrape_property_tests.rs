use proptest::prelude::*;
use strings2csv::{ConvertOptions, Element, RowTag, convert_str, scraper::scrape_resource};

fn name_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,15}").expect("valid name regex")
}

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _\\-\\.,!\\?%\"]{0,30}").expect("valid text regex")
}

fn quantity_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("zero".to_string()),
        Just("one".to_string()),
        Just("two".to_string()),
        Just("few".to_string()),
        Just("many".to_string()),
        Just("other".to_string()),
    ]
}

/// An item (`Some(quantity, text)`) or an unrelated child element (`None`).
fn child_strategy() -> impl Strategy<Value = Option<(String, String)>> {
    prop_oneof![
        4 => (quantity_strategy(), text_strategy()).prop_map(Some),
        1 => Just(None),
    ]
}

fn build_container(tag: &str, name: &str, children: &[Option<(String, String)>]) -> Element {
    children
        .iter()
        .fold(Element::new(tag).with_attribute("name", name), |el, child| {
            match child {
                Some((quantity, text)) => el.with_child(
                    Element::new("item")
                        .with_attribute("quantity", quantity.as_str())
                        .with_text(text.as_str()),
                ),
                None => el.with_child(Element::new("note").with_text("ignored")),
            }
        })
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

proptest! {
    #[test]
    fn container_rows_are_one_plus_items_in_order(
        plurals in any::<bool>(),
        name in name_strategy(),
        children in prop::collection::vec(child_strategy(), 0..10),
    ) {
        let tag = if plurals { "plurals" } else { "string-array" };
        let container = build_container(tag, &name, &children);
        let rows = scrape_resource(&container).unwrap();

        let items: Vec<&(String, String)> = children.iter().flatten().collect();
        prop_assert_eq!(rows.len(), 1 + items.len());
        prop_assert_eq!(rows[0].tag.as_str(), tag);
        prop_assert_eq!(rows[0].text.as_str(), "");
        prop_assert_eq!(rows[0].quantity.as_str(), "");

        for (row, (quantity, text)) in rows[1..].iter().zip(items) {
            prop_assert_eq!(row.tag, RowTag::Item);
            prop_assert_eq!(&row.name, &name);
            prop_assert_eq!(row.translatable.as_str(), "true");
            prop_assert_eq!(&row.text, text);
            if plurals {
                prop_assert_eq!(&row.quantity, quantity);
            } else {
                prop_assert_eq!(row.quantity.as_str(), "");
            }
        }
    }

    #[test]
    fn every_string_becomes_one_csv_record(
        entries in prop::collection::btree_map(name_strategy(), text_strategy(), 0..8),
    ) {
        let body: String = entries
            .iter()
            .map(|(name, text)| format!("<string name=\"{}\">{}</string>", name, escape_xml(text)))
            .collect();
        let xml = format!("<resources>{}</resources>", body);

        let rendered = convert_str(&xml, &ConvertOptions::default()).unwrap();
        let mut reader = csv::Reader::from_reader(rendered.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        prop_assert_eq!(records.len(), entries.len());
        for (record, (name, text)) in records.iter().zip(&entries) {
            prop_assert_eq!(&record[0], "string");
            prop_assert_eq!(&record[1], name.as_str());
            prop_assert_eq!(&record[2], "true");
            prop_assert_eq!(&record[3], text.as_str());
            prop_assert_eq!(&record[4], "");
        }
    }
}
