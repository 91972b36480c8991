//! Flattens the resource elements of a `strings.xml` tree into [`Row`]s.
//!
//! Each direct child of the root is one resource:
//!
//! - `string` becomes a single row carrying its own text.
//! - `string-array` and `plurals` become a container row with empty text,
//!   followed by one `item` row per direct `<item>` child. Item rows inherit
//!   `name` and `translatable` from the container; under `plurals` they also
//!   carry their own `quantity`.
//!
//! Any other tag is rejected rather than skipped.

use tracing::debug;

use crate::{
    error::Error,
    formats::android_strings::Element,
    types::{DEFAULT_TRANSLATABLE, ResourceKind, Row, RowTag},
};

const NAME_ATTR: &str = "name";
const TRANSLATABLE_ATTR: &str = "translatable";
const QUANTITY_ATTR: &str = "quantity";
const ITEM_TAG: &str = "item";

/// Scrape every resource under `root`, in document order.
pub fn scrape(root: &Element) -> Result<Vec<Row>, Error> {
    let mut rows = Vec::new();
    for resource in &root.children {
        rows.extend(scrape_resource(resource)?);
    }
    debug!(
        resources = root.children.len(),
        rows = rows.len(),
        "scraped resources"
    );
    Ok(rows)
}

/// Scrape one `string`, `string-array` or `plurals` element.
pub fn scrape_resource(element: &Element) -> Result<Vec<Row>, Error> {
    let kind: ResourceKind = element.tag.parse()?;
    let name = required_attribute(element, NAME_ATTR)?;
    let translatable = resolve_translatable(element);

    let rows = match kind {
        ResourceKind::String => vec![Row {
            tag: RowTag::String,
            name: name.to_string(),
            translatable,
            text: element.text.clone(),
            quantity: String::new(),
        }],
        ResourceKind::StringArray | ResourceKind::Plurals => {
            let mut rows = vec![Row {
                tag: kind.into(),
                name: name.to_string(),
                translatable,
                text: String::new(),
                quantity: String::new(),
            }];
            rows.extend(scrape_items(element)?);
            rows
        }
    };

    debug!(tag = %kind, id = name, rows = rows.len(), "scraped resource");
    Ok(rows)
}

/// Build one `item` row per direct `<item>` child of a container.
///
/// Fails with [`Error::NotAContainer`] when given a `string` element.
pub fn scrape_items(container: &Element) -> Result<Vec<Row>, Error> {
    let kind: ResourceKind = container.tag.parse()?;
    if !kind.is_container() {
        return Err(Error::NotAContainer(container.tag.clone()));
    }

    let name = required_attribute(container, NAME_ATTR)?;
    let translatable = resolve_translatable(container);

    container
        .children_named(ITEM_TAG)
        .map(|item| -> Result<Row, Error> {
            let quantity = match kind {
                ResourceKind::Plurals => required_attribute(item, QUANTITY_ATTR)?.to_string(),
                _ => String::new(),
            };
            Ok(Row {
                tag: RowTag::Item,
                name: name.to_string(),
                translatable: translatable.clone(),
                text: item.text.clone(),
                quantity,
            })
        })
        .collect()
}

/// The element's `translatable` attribute verbatim, or `"true"` when absent.
pub fn resolve_translatable(element: &Element) -> String {
    element
        .attribute(TRANSLATABLE_ATTR)
        .unwrap_or(DEFAULT_TRANSLATABLE)
        .to_string()
}

fn required_attribute<'a>(element: &'a Element, attribute: &'static str) -> Result<&'a str, Error> {
    element
        .attribute(attribute)
        .ok_or_else(|| Error::missing_attribute(element.tag.clone(), attribute))
}
