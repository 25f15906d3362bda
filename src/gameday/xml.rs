//! Generic element/attribute tree for gameday XML.
//!
//! Gameday documents carry all of their data in attributes, so the tree keeps
//! element names, attributes and child elements in document order and drops
//! text content.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::error::GamedayError;

/// An XML element with its attributes and child elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub name: String,
    attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create an element with no attributes or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter (used by tests and fixtures).
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Builder-style child setter.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Parse a document and return its root element.
    pub fn parse(xml: &str) -> Result<Node, GamedayError> {
        Self::parse_document("document", xml)
    }

    /// Parse a document, naming it in any error.
    pub fn parse_document(document: &str, xml: &str) -> Result<Node, GamedayError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let xml_error = |message: String| GamedayError::Xml {
            document: document.to_string(),
            message,
        };

        let mut stack: Vec<Node> = Vec::new();
        let mut root: Option<Node> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => stack.push(element(e)),
                Ok(Event::Empty(ref e)) => {
                    let node = element(e);
                    attach(&mut stack, &mut root, node);
                }
                Ok(Event::End(_)) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| xml_error("unbalanced closing tag".to_string()))?;
                    attach(&mut stack, &mut root, node);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(xml_error(format!(
                        "{} at position {}",
                        e,
                        reader.error_position()
                    )))
                }
            }
        }

        if !stack.is_empty() {
            return Err(xml_error(format!("unclosed <{}>", stack[stack.len() - 1].name)));
        }

        root.ok_or_else(|| GamedayError::EmptyDocument {
            document: document.to_string(),
        })
    }

    /// Attribute value, if present.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute value, or `default` when absent.
    pub fn attr_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.attr(key).unwrap_or(default)
    }

    /// Attribute parsed into `T`; `None` when absent or unparseable.
    pub fn parse_attr<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.attr(key).and_then(|v| v.trim().parse().ok())
    }

    /// Direct children with the given element name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First direct child with the given element name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// First descendant (depth-first, document order) with the given name.
    pub fn find(&self, name: &str) -> Option<&Node> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.find(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants with the given name, in document order.
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect(name, &mut found);
        found
    }

    fn collect<'a>(&'a self, name: &str, found: &mut Vec<&'a Node>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect(name, found);
        }
    }
}

fn element(e: &BytesStart) -> Node {
    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
    let attrs = e
        .attributes()
        .flatten()
        .map(|a| {
            let key = String::from_utf8_lossy(a.key.as_ref()).to_string();
            let raw = String::from_utf8_lossy(&a.value);
            // Malformed or unknown entities stay as written
            let value = match unescape(&raw) {
                Ok(value) => value.into_owned(),
                Err(_) => raw.to_string(),
            };
            (key, value)
        })
        .collect();
    Node {
        name,
        attrs,
        children: Vec::new(),
    }
}

fn attach(stack: &mut [Node], root: &mut Option<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        // Only the first top-level element is kept
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}
