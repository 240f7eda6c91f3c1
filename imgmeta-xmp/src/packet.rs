//! RDF/XML packets
//!
//! Properties are read from all `rdf:Description` elements, both in attribute
//! form and element form. Simple values, RDF containers and language
//! alternatives become [`XmpValue`]s. Structures and qualified values are kept
//! as XML and written back unchanged.

use std::collections::BTreeMap;

use imgmeta_common::key::XmpKey;
use imgmeta_common::registry;
use imgmeta_common::xmp::{XML_NS_RDF, XML_NS_X, XML_NS_XML};
use xml::writer::{self, EmitterConfig};

use crate::error::Result;
use crate::tree::{self, Element, OwnedNameExt};
use crate::value::{ArrayKind, XmpValue, X_DEFAULT};

const PACKET_BEGIN: &str = "begin=\"\u{feff}\" id=\"W5M0MpCehiHzreSzNTczkc9d\"";
const PACKET_END: &str = "end=\"w\"";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Property {
    Value(XmpValue),
    /// Kept as XML
    Structure(Element),
}

pub(crate) struct Packet {
    pub properties: Vec<(XmpKey, Property)>,
    /// Namespaces without registry entry by prefix
    pub namespaces: BTreeMap<String, String>,
}

pub(crate) fn parse(data: &[u8]) -> Result<Packet> {
    let document = tree::read(data)?;

    let namespaces: BTreeMap<String, String> = document
        .namespaces
        .into_iter()
        .filter(|(prefix, uri)| {
            !is_builtin_uri(uri)
                && registry::namespace_by_uri(uri).is_none()
                && registry::namespace_by_prefix(prefix).is_none()
        })
        .collect();

    let mut properties = Vec::new();

    let mut rdf = Vec::new();
    for root in &document.roots {
        find_rdf(root, &mut rdf);
    }
    if rdf.is_empty() {
        tracing::info!("XMP packet without rdf:RDF element");
    }

    for description in rdf
        .into_iter()
        .flat_map(Element::elements)
        .filter(|x| x.name.is_rdf("Description"))
    {
        for attribute in &description.attributes {
            let Some(uri) = attribute.name.namespace_uri() else {
                continue;
            };
            if is_builtin_uri(uri) {
                continue;
            }
            if let Some(key) = key(uri, attribute.name.prefix.as_deref(), &attribute.name.local_name) {
                let value = XmpValue::Text(attribute.value.clone());
                push(&mut properties, key, Property::Value(value));
            }
        }

        for element in description.elements() {
            let Some(uri) = element.name.namespace_uri() else {
                tracing::info!("Ignoring property '{}' without namespace", element.name.local_name);
                continue;
            };
            if let Some(key) = key(uri, element.name.prefix.as_deref(), &element.name.local_name) {
                push(&mut properties, key, property(element));
            }
        }
    }

    Ok(Packet {
        properties,
        namespaces,
    })
}

fn find_rdf<'a>(element: &'a Element, rdf: &mut Vec<&'a Element>) {
    if element.name.is_rdf("RDF") {
        rdf.push(element);
    } else {
        for child in element.elements() {
            find_rdf(child, rdf);
        }
    }
}

fn is_builtin_uri(uri: &str) -> bool {
    [XML_NS_RDF, XML_NS_XML, XML_NS_X].contains(&uri)
}

/// Key with the registry prefix for known namespaces
fn key(uri: &str, prefix: Option<&str>, name: &str) -> Option<XmpKey> {
    if let Some(namespace) = registry::namespace_by_uri(uri) {
        return Some(XmpKey::new(namespace.prefix, name));
    }

    match prefix {
        Some(prefix) if registry::namespace_by_prefix(prefix).is_none() => {
            Some(XmpKey::new(prefix, name))
        }
        _ => {
            tracing::info!("Ignoring property '{name}' in namespace '{uri}' with conflicting prefix");
            None
        }
    }
}

fn push(properties: &mut Vec<(XmpKey, Property)>, key: XmpKey, property: Property) {
    if properties.iter().any(|(x, _)| *x == key) {
        tracing::info!("Ignoring duplicate property {key}");
    } else {
        properties.push((key, property));
    }
}

fn property(element: &Element) -> Property {
    if let Some(resource) = element.attribute(XML_NS_RDF, "resource") {
        return Property::Value(XmpValue::Text(resource.to_string()));
    }

    let qualified = element
        .attributes
        .iter()
        .any(|x| x.name.namespace_uri() != Some(XML_NS_XML));
    let children: Vec<&Element> = element.elements().collect();

    match children.as_slice() {
        [] if !qualified => Property::Value(XmpValue::Text(element.text())),
        [container] if !qualified && element.text().trim().is_empty() => container_value(container)
            .map_or_else(|| Property::Structure(element.clone()), Property::Value),
        _ => Property::Structure(element.clone()),
    }
}

fn container_value(container: &Element) -> Option<XmpValue> {
    if container.name.namespace_uri() != Some(XML_NS_RDF) {
        return None;
    }
    let kind = ArrayKind::from_name(&container.name.local_name)?;

    let mut items = Vec::new();
    let mut any_lang = false;
    for li in container.elements() {
        if !li.name.is_rdf("li") || li.elements().next().is_some() {
            return None;
        }
        let lang = li.attribute(XML_NS_XML, "lang");
        any_lang |= lang.is_some();
        items.push((lang.unwrap_or(X_DEFAULT).to_string(), li.text()));
    }

    if kind == ArrayKind::Alt && any_lang {
        Some(XmpValue::lang_alt(items))
    } else {
        Some(XmpValue::Array {
            kind,
            items: items.into_iter().map(|(_, text)| text).collect(),
        })
    }
}

/// Writes a complete packet with `xpacket` wrapper
pub(crate) fn serialize(
    properties: &[(XmpKey, Property)],
    namespaces: &BTreeMap<String, String>,
) -> Result<Vec<u8>> {
    let mut declarations: BTreeMap<String, String> = BTreeMap::new();
    for (key, property) in properties {
        let uri = registry::namespace_by_prefix(&key.prefix)
            .map(|x| x.uri.to_string())
            .or_else(|| namespaces.get(&key.prefix).cloned());
        match uri {
            Some(uri) => {
                declarations.insert(key.prefix.clone(), uri);
            }
            None => tracing::warn!("No namespace for {key}"),
        }
        if let Property::Structure(element) = property {
            element.used_namespaces(&mut declarations);
        }
    }

    let mut output = Vec::new();
    let mut writer = EmitterConfig::new()
        .write_document_declaration(false)
        .perform_indent(true)
        .pad_self_closing(false)
        .create_writer(&mut output);

    writer.write(writer::XmlEvent::processing_instruction(
        "xpacket",
        Some(PACKET_BEGIN),
    ))?;
    writer.write(writer::XmlEvent::start_element("x:xmpmeta").ns("x", XML_NS_X))?;
    writer.write(writer::XmlEvent::start_element("rdf:RDF").ns("rdf", XML_NS_RDF))?;

    let mut description = writer::XmlEvent::start_element("rdf:Description").attr("rdf:about", "");
    for (prefix, uri) in &declarations {
        description = description.ns(prefix.as_str(), uri.as_str());
    }
    writer.write(description)?;

    for (key, property) in properties {
        match property {
            Property::Value(value) => write_value(&mut writer, key, value)?,
            Property::Structure(element) => element.write(&mut writer)?,
        }
    }

    writer.write(writer::XmlEvent::end_element())?;
    writer.write(writer::XmlEvent::end_element())?;
    writer.write(writer::XmlEvent::end_element())?;
    writer.write(writer::XmlEvent::processing_instruction(
        "xpacket",
        Some(PACKET_END),
    ))?;

    Ok(output)
}

fn write_value<W: std::io::Write>(
    writer: &mut writer::EventWriter<W>,
    key: &XmpKey,
    value: &XmpValue,
) -> Result<()> {
    let name = format!("{}:{}", key.prefix, key.property);
    writer.write(writer::XmlEvent::start_element(name.as_str()))?;

    match value {
        XmpValue::Text(text) => {
            writer.write(writer::XmlEvent::characters(text))?;
        }
        XmpValue::Array { kind, items } => {
            let container = format!("rdf:{}", kind.name());
            writer.write(writer::XmlEvent::start_element(container.as_str()))?;
            for item in items {
                writer.write(writer::XmlEvent::start_element("rdf:li"))?;
                writer.write(writer::XmlEvent::characters(item))?;
                writer.write(writer::XmlEvent::end_element())?;
            }
            writer.write(writer::XmlEvent::end_element())?;
        }
        XmpValue::LangAlt(alternatives) => {
            writer.write(writer::XmlEvent::start_element("rdf:Alt"))?;
            for (lang, text) in alternatives {
                writer.write(writer::XmlEvent::start_element("rdf:li").attr("xml:lang", lang))?;
                writer.write(writer::XmlEvent::characters(text))?;
                writer.write(writer::XmlEvent::end_element())?;
            }
            writer.write(writer::XmlEvent::end_element())?;
        }
    }

    writer.write(writer::XmlEvent::end_element())?;

    Ok(())
}
