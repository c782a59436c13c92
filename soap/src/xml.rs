//! Owned XML element tree
//!
//! SOAP payloads are small, so requests are assembled as an [`XmlElement`]
//! tree and responses are parsed into one before being mapped to typed values.
//! Names are kept qualified (`prefix:local`); lookups match on the local part.

use crate::error::SoapError;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;

/// XML Schema instance namespace (`xsi:nil`)
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Namespace alias/URI pair attached to an element
///
/// The element declares `xmlns:<alias>="<uri>"` and its children are
/// qualified with `alias`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix used for the element's children
    pub alias: &'static str,
    /// Namespace URI bound to the prefix
    pub uri: &'static str,
}

impl Namespace {
    /// Create an alias/URI pair
    #[must_use]
    pub const fn new(alias: &'static str, uri: &'static str) -> Self {
        Self { alias, uri }
    }

    /// Qualify a local name with this namespace's alias
    #[must_use]
    pub fn qualify(&self, local: &str) -> String {
        format!("{}:{local}", self.alias)
    }
}

/// A list of elements wrapped in a namespace-qualified container
///
/// The wrapper and every item carry their own [`Namespace`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespacedList<T> {
    /// Namespace declared on the wrapper element
    pub namespace: Namespace,
    /// Items in wire order
    pub items: Vec<T>,
}

impl<T> NamespacedList<T> {
    /// Wrap `items` under `namespace`
    #[must_use]
    pub const fn new(namespace: Namespace, items: Vec<T>) -> Self {
        Self { namespace, items }
    }
}

/// An XML element with attributes, child elements and text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified name as written in the document
    pub name: String,
    /// Attributes in document order (qualified keys)
    pub attributes: Vec<(String, String)>,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
    /// Concatenated, unescaped text content
    pub text: String,
}

impl XmlElement {
    /// Create an empty element
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create an element holding only text
    #[must_use]
    pub fn text_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    /// Builder: Add an attribute
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Builder: Declare `xmlns:<alias>` for `namespace`
    #[must_use]
    pub fn with_namespace(self, namespace: Namespace) -> Self {
        self.with_attribute(format!("xmlns:{}", namespace.alias), namespace.uri)
    }

    /// Builder: Append a child element
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Builder: Append several child elements
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Builder: Set the text content
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Name without its namespace prefix
    #[must_use]
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Namespace prefix, if the name is qualified
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// First child with the given local name
    #[must_use]
    pub fn child(&self, local: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.local_name() == local)
    }

    /// All children with the given local name
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a Self> {
        self.children.iter().filter(move |c| c.local_name() == local)
    }

    /// First child with the given local name, or [`SoapError::MissingElement`]
    ///
    /// # Errors
    ///
    /// Returns `SoapError::MissingElement` if no such child exists
    pub fn require(&self, local: &str) -> Result<&Self, SoapError> {
        self.child(local).ok_or_else(|| SoapError::MissingElement {
            parent: self.local_name().to_string(),
            name: local.to_string(),
        })
    }

    /// Text of a required child
    ///
    /// # Errors
    ///
    /// Returns `SoapError::MissingElement` if no such child exists
    pub fn child_text(&self, local: &str) -> Result<&str, SoapError> {
        self.require(local).map(|c| c.text.as_str())
    }

    /// Attribute value by local name (namespace declarations excluded)
    #[must_use]
    pub fn attr(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .filter(|(key, _)| key != "xmlns" && !key.starts_with("xmlns:"))
            .find(|(key, _)| local_part(key) == local)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the element is marked `xsi:nil="true"`
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.attr("nil") == Some("true")
    }

    /// Parse a document and return its root element
    ///
    /// # Errors
    ///
    /// Returns `SoapError::Xml` if the document is not well-formed
    pub fn parse(xml: &str) -> Result<Self, SoapError> {
        let mut reader = Reader::from_str(xml);

        let mut stack: Vec<Self> = Vec::new();
        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::End(_) => {
                    let mut element = stack
                        .pop()
                        .ok_or_else(|| SoapError::Xml("unexpected closing tag".to_string()))?;
                    // Indentation between child elements; leaf text stays verbatim
                    if !element.children.is_empty() && element.text.trim().is_empty() {
                        element.text.clear();
                    }
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                    }
                }
                Event::Eof => {
                    return Err(SoapError::Xml("unexpected end of document".to_string()));
                }
                _ => {}
            }
        }
    }

    /// Serialize this element (without an XML declaration)
    ///
    /// # Errors
    ///
    /// Returns `SoapError::Xml` if writing fails
    pub fn to_xml(&self) -> Result<String, SoapError> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(|e| SoapError::Xml(e.to_string()))
    }

    /// Write this element and its subtree
    ///
    /// # Errors
    ///
    /// Returns `SoapError::Xml` if writing fails
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), SoapError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() && self.text.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        if !self.text.is_empty() {
            writer.write_event(Event::Text(BytesText::new(&self.text)))?;
        }
        for child in &self.children {
            child.write_to(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, SoapError> {
        let mut element = Self::new(String::from_utf8_lossy(start.name().as_ref()));
        for attribute in start.attributes() {
            let attribute = attribute?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            element.attributes.push((key, value));
        }
        Ok(element)
    }
}

fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let xml = r#"<?xml version="1.0"?>
            <a:Root xmlns:a="urn:a" xmlns:i="http://www.w3.org/2001/XMLSchema-instance">
                <a:Name>Ａ－２ &amp; more</a:Name>
                <a:Empty/>
                <a:List i:nil="true"/>
            </a:Root>"#;

        let root = XmlElement::parse(xml).unwrap();
        assert_eq!(root.local_name(), "Root");
        assert_eq!(root.prefix(), Some("a"));
        assert_eq!(root.child_text("Name").unwrap(), "Ａ－２ & more");
        assert_eq!(root.child_text("Empty").unwrap(), "");
        assert!(root.require("List").unwrap().is_nil());
        assert!(!root.require("Empty").unwrap().is_nil());
    }

    #[test]
    fn test_leaf_text_is_kept_verbatim() {
        let xml = "<a:Result xmlns:a=\"urn:a\">\n  <a:MESSAGE>  padded msg  </a:MESSAGE>\n  <a:KNYKNR_NO> 0123 </a:KNYKNR_NO>\n  <a:Blank>   </a:Blank>\n</a:Result>";

        let root = XmlElement::parse(xml).unwrap();
        assert_eq!(root.text, "");
        assert_eq!(root.children.len(), 3);
        assert_eq!(root.child_text("MESSAGE").unwrap(), "  padded msg  ");
        assert_eq!(root.child_text("KNYKNR_NO").unwrap(), " 0123 ");
        assert_eq!(root.child_text("Blank").unwrap(), "   ");
    }

    #[test]
    fn test_missing_child_reports_parent() {
        let root = XmlElement::parse("<Root><Child/></Root>").unwrap();
        match root.require("Other") {
            Err(SoapError::MissingElement { parent, name }) => {
                assert_eq!(parent, "Root");
                assert_eq!(name, "Other");
            }
            other => unreachable!("unexpected lookup result: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        assert!(matches!(
            XmlElement::parse("<Root><Child></Root>"),
            Err(SoapError::Xml(_))
        ));
        assert!(matches!(XmlElement::parse("<Root>"), Err(SoapError::Xml(_))));
    }

    #[test]
    fn test_attr_ignores_namespace_declarations() {
        let element = XmlElement::new("q1:Item")
            .with_namespace(Namespace::new("tns", "urn:model"))
            .with_attribute("name", "value");

        assert_eq!(element.attr("tns"), None);
        assert_eq!(element.attr("name"), Some("value"));
    }

    #[test]
    fn test_write_escapes_text_and_attributes() {
        let element = XmlElement::new("tns:Value")
            .with_attribute("note", "a\"b")
            .with_child(XmlElement::text_element("tns:Text", "<1 & 2>"))
            .with_child(XmlElement::new("tns:Empty"));

        let xml = element.to_xml().unwrap();
        assert_eq!(
            xml,
            "<tns:Value note=\"a&quot;b\"><tns:Text>&lt;1 &amp; 2&gt;</tns:Text><tns:Empty/></tns:Value>"
        );

        let parsed = XmlElement::parse(&xml).unwrap();
        assert_eq!(parsed.child_text("Text").unwrap(), "<1 & 2>");
        assert_eq!(parsed.attr("note"), Some("a\"b"));
    }

    #[test]
    fn test_namespace_qualifies_children() {
        let namespace = Namespace::new("q1", "urn:model");
        let element = XmlElement::new("tns:list")
            .with_namespace(namespace)
            .with_child(XmlElement::text_element(namespace.qualify("Code"), "A"));

        assert_eq!(
            element.to_xml().unwrap(),
            "<tns:list xmlns:q1=\"urn:model\"><q1:Code>A</q1:Code></tns:list>"
        );
    }
}
