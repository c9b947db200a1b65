//! Attribute-or-element tolerant XML codec
//!
//! Values are written in attribute form (`<Vector2D X="1" Y="2"/>`). The
//! reader also accepts element form (`<Vector2D><X>1</X><Y>2</Y></Vector2D>`)
//! and any mix of the two.

use crate::error::{Result, SpatialError};
use crate::io::text::{format_number, NumberFormat};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::io::Write;
use tracing::trace;

/// A parsed XML element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    /// Local name of the element
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Concatenated text content
    pub text: String,
    /// Child elements in document order
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Add a numeric attribute in invariant, round-trip format
    pub fn with_number(self, name: impl Into<String>, value: f64) -> Self {
        self.with_attribute(name, format_number(value, &NumberFormat::INVARIANT))
    }

    /// Add a child element
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Value of an attribute, falling back to a child element's text
    pub fn attribute_or_element(&self, name: &str) -> Option<&str> {
        self.attribute(name)
            .or_else(|| self.child(name).map(|child| child.text.as_str()))
    }

    /// Read a required number stored as attribute or child element
    pub fn read_number(&self, name: &str) -> Result<f64> {
        let text = self.attribute_or_element(name).ok_or_else(|| {
            SpatialError::Xml(format!("<{}> is missing '{}'", self.name, name))
        })?;
        text.trim().parse::<f64>().map_err(|_| {
            SpatialError::Xml(format!(
                "'{}' of <{}> is not a number: '{}'",
                name, self.name, text
            ))
        })
    }

    /// Fail unless this element has the expected name
    pub fn expect_name(&self, name: &str) -> Result<()> {
        if self.name == name {
            Ok(())
        } else {
            Err(SpatialError::Xml(format!(
                "Expected element <{}>, found <{}>",
                name, self.name
            )))
        }
    }

    /// Parse the root element of a document
    pub fn parse(xml: &str) -> Result<XmlElement> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        loop {
            let finished = match reader.read_event().map_err(xml_error)? {
                Event::Start(start) => {
                    stack.push(element_from_start(&start)?);
                    None
                }
                Event::Empty(start) => attach(&mut stack, element_from_start(&start)?),
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| SpatialError::Xml("Unbalanced end tag".to_string()))?;
                    attach(&mut stack, element)
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text.unescape().map_err(xml_error)?);
                    }
                    None
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&data));
                    }
                    None
                }
                Event::Eof => {
                    return Err(SpatialError::Xml(
                        "Document ended before the root element closed".to_string(),
                    ))
                }
                _ => None,
            };

            if let Some(root) = finished {
                trace!(element = %root.name, "read xml element");
                return Ok(root);
            }
        }
    }

    /// Write this element to a sink
    pub fn write<W: Write>(&self, mut sink: W) -> Result<()> {
        let mut writer = Writer::new(Vec::new());
        self.write_into(&mut writer)?;
        sink.write_all(&writer.into_inner())?;
        Ok(())
    }

    /// Render this element as a string
    pub fn to_xml_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        String::from_utf8(buffer).map_err(xml_error)
    }

    fn write_into<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.text.is_empty() && self.children.is_empty() {
            writer.write_event(Event::Empty(start)).map_err(xml_error)?;
            return Ok(());
        }

        writer
            .write_event(Event::Start(start.borrow()))
            .map_err(xml_error)?;
        if !self.text.is_empty() {
            writer
                .write_event(Event::Text(BytesText::new(&self.text)))
                .map_err(xml_error)?;
        }
        for child in &self.children {
            child.write_into(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(xml_error)?;
        Ok(())
    }
}

/// Push a completed element onto its parent, or return it as the root
fn attach(stack: &mut [XmlElement], element: XmlElement) -> Option<XmlElement> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            None
        }
        None => Some(element),
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut element = XmlElement::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(xml_error)?;
        let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute.unescape_value().map_err(xml_error)?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn xml_error<E: std::fmt::Display>(err: E) -> SpatialError {
    SpatialError::Xml(err.to_string())
}

/// Types with an XML representation
pub trait XmlSerializable: Sized {
    /// Name of the root element
    const ELEMENT_NAME: &'static str;

    /// Build the element tree for this value
    fn to_xml_element(&self) -> XmlElement;

    /// Build a value from an element, without checking its name
    fn from_xml_element(element: &XmlElement) -> Result<Self>;

    /// Write this value as XML to a sink
    fn write_xml<W: Write>(&self, sink: W) -> Result<()> {
        self.to_xml_element().write(sink)
    }

    /// Render this value as an XML string
    fn to_xml_string(&self) -> Result<String> {
        self.to_xml_element().to_xml_string()
    }

    /// Read a value from an XML document whose root is [`Self::ELEMENT_NAME`]
    fn read_xml(xml: &str) -> Result<Self> {
        let element = XmlElement::parse(xml)?;
        element.expect_name(Self::ELEMENT_NAME)?;
        Self::from_xml_element(&element)
    }
}
