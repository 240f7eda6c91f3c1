//! Owned XML element tree on top of the xml-rs event streams

use std::collections::BTreeMap;
use std::io::{Cursor, Write};

use imgmeta_common::xmp::XML_NS_RDF;
use xml::attribute::OwnedAttribute;
use xml::name::OwnedName;
use xml::reader::XmlEvent;
use xml::writer::{self, EventWriter};
use xml::ParserConfig;

use crate::error::Result;

/// Prefixes that are handled by the XML layer itself
const RESERVED_PREFIXES: [&str; 3] = ["xml", "xmlns", ""];

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Element {
    pub name: OwnedName,
    pub attributes: Vec<OwnedAttribute>,
    pub children: Vec<Node>,
}

pub(crate) struct Document {
    pub roots: Vec<Element>,
    /// All namespace declarations found in the document
    pub namespaces: BTreeMap<String, String>,
}

pub(crate) trait OwnedNameExt {
    fn is_rdf(&self, local_name: &str) -> bool;
    fn namespace_uri(&self) -> Option<&str>;
}

impl OwnedNameExt for OwnedName {
    fn is_rdf(&self, local_name: &str) -> bool {
        self.local_name == local_name && self.namespace_uri() == Some(XML_NS_RDF)
    }

    fn namespace_uri(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl Element {
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|x| match x {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text children
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|x| match x {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    pub fn attribute(&self, namespace: &str, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|x| {
                x.name.local_name == local_name && x.name.namespace.as_deref() == Some(namespace)
            })
            .map(|x| x.value.as_str())
    }

    /// Namespaces used by names in this subtree
    pub fn used_namespaces(&self, namespaces: &mut BTreeMap<String, String>) {
        let names = std::iter::once(&self.name).chain(self.attributes.iter().map(|x| &x.name));
        for name in names {
            if let (Some(prefix), Some(uri)) = (&name.prefix, &name.namespace) {
                if !RESERVED_PREFIXES.contains(&prefix.as_str()) {
                    namespaces.insert(prefix.clone(), uri.clone());
                }
            }
        }

        for element in self.elements() {
            element.used_namespaces(namespaces);
        }
    }

    pub fn write<W: Write>(&self, writer: &mut EventWriter<W>) -> Result<()> {
        let mut start = writer::XmlEvent::start_element(self.name.borrow());
        for attribute in &self.attributes {
            start = start.attr(attribute.name.borrow(), &attribute.value);
        }
        writer.write(start)?;

        for child in &self.children {
            match child {
                Node::Element(element) => element.write(writer)?,
                Node::Text(text) => writer.write(writer::XmlEvent::characters(text))?,
            }
        }

        writer.write(writer::XmlEvent::end_element())?;

        Ok(())
    }
}

pub(crate) fn read(data: &[u8]) -> Result<Document> {
    // Packets in files are sometimes padded with NUL bytes
    let end = data
        .iter()
        .rposition(|x| *x != 0)
        .map_or(0, |x| x.saturating_add(1));
    let data = data.get(..end).unwrap_or_default();

    let parser = ParserConfig::new()
        .ignore_comments(true)
        .cdata_to_characters(true)
        .coalesce_characters(true)
        .create_reader(Cursor::new(data));

    let mut stack: Vec<Element> = Vec::new();
    let mut roots = Vec::new();
    let mut namespaces = BTreeMap::new();

    for event in parser {
        match event? {
            XmlEvent::StartElement {
                name,
                attributes,
                namespace,
            } => {
                for (prefix, uri) in &namespace {
                    if !RESERVED_PREFIXES.contains(&prefix) {
                        namespaces.insert(prefix.to_string(), uri.to_string());
                    }
                }

                stack.push(Element {
                    name,
                    attributes,
                    children: Vec::new(),
                });
            }
            XmlEvent::EndElement { .. } => {
                if let Some(element) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(Node::Element(element)),
                        None => roots.push(element),
                    }
                }
            }
            XmlEvent::Characters(text) => {
                if let Some(element) = stack.last_mut() {
                    element.children.push(Node::Text(text));
                }
            }
            _ => {}
        }
    }

    Ok(Document { roots, namespaces })
}
