//! Support for reading Android `strings.xml` files into an element tree.
//!
//! The whole document is loaded into memory as a tree of [`Element`]s, which the
//! scraper then walks. Parsing is hardened: `<!DOCTYPE>` declarations are
//! rejected, so no custom or external entities can ever be declared, and only
//! the predefined XML entities and character references are expanded.

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use std::io::BufRead;

use crate::{error::Error, traits::Parser};

/// A parsed `strings.xml` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The `<resources>` element (or whatever the single root element is).
    pub root: Element,
}

/// One XML element with its attributes, leading text and child elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    /// Attributes in document order, values unescaped.
    pub attributes: Vec<(String, String)>,
    /// Character data before the first child element. Text that follows a
    /// child element is not part of it.
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Looks up an attribute by its exact (possibly prefixed) name.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct children with the given tag, in document order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.tag == tag)
    }
}

impl Parser for Document {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        // Whitespace is significant inside <string> values.
        xml_reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match xml_reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    ensure_single_root(&root, e)?;
                    stack.push(start_element(e)?);
                }
                Event::Empty(ref e) => {
                    ensure_single_root(&root, e)?;
                    let element = start_element(e)?;
                    close_element(element, &mut stack, &mut root);
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| {
                        Error::InvalidDocument("closing tag without matching start".to_string())
                    })?;
                    close_element(element, &mut stack, &mut root);
                }
                Event::Text(e) => {
                    let text = e.unescape()?;
                    push_text(&mut stack, &text)?;
                }
                Event::CData(e) => {
                    let text = std::str::from_utf8(&e)
                        .map_err(|err| Error::InvalidDocument(err.to_string()))?;
                    push_text(&mut stack, text)?;
                }
                Event::DocType(_) => {
                    return Err(Error::InvalidDocument(
                        "DOCTYPE declarations are not allowed".to_string(),
                    ));
                }
                Event::Eof => break,
                // Declarations, comments and processing instructions carry no resources.
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(Error::InvalidDocument(format!(
                "unexpected end of file inside `<{}>`",
                open.tag
            )));
        }

        let root =
            root.ok_or_else(|| Error::InvalidDocument("document has no root element".to_string()))?;
        Ok(Document { root })
    }
}

fn ensure_single_root(root: &Option<Element>, e: &BytesStart) -> Result<(), Error> {
    if root.is_some() {
        return Err(Error::InvalidDocument(format!(
            "unexpected element `{}` after the root element",
            String::from_utf8_lossy(e.name().as_ref())
        )));
    }
    Ok(())
}

fn start_element(e: &BytesStart) -> Result<Element, Error> {
    let tag = std::str::from_utf8(e.name().as_ref())
        .map_err(|err| Error::InvalidDocument(err.to_string()))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| Error::InvalidDocument(err.to_string()))?
            .to_string();
        let value = attr.unescape_value()?.to_string();
        attributes.push((key, value));
    }

    Ok(Element {
        tag,
        attributes,
        ..Default::default()
    })
}

fn close_element(element: Element, stack: &mut [Element], root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn push_text(stack: &mut [Element], text: &str) -> Result<(), Error> {
    match stack.last_mut() {
        Some(current) if current.children.is_empty() => current.text.push_str(text),
        Some(_) => {}
        None if text.trim().is_empty() => {}
        None => {
            return Err(Error::InvalidDocument(
                "text content outside the root element".to_string(),
            ));
        }
    }
    Ok(())
}
