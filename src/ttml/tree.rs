use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;

use crate::errors::ExtractError;

// @module: In-memory XML element tree with resolved namespaces

/// A child of an element: either a nested element or character data
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

/// An element with its namespace URI resolved at parse time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    /// Namespace URI, `None` for elements in no namespace
    pub namespace: Option<String>,

    /// Name without prefix
    pub local_name: String,

    /// Attributes in document order, keyed by their qualified name
    pub attributes: Vec<(String, String)>,

    /// Child nodes in document order
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an element with no attributes or children
    pub fn new(namespace: Option<&str>, local_name: &str) -> Self {
        XmlElement {
            namespace: namespace.map(str::to_string),
            local_name: local_name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Parse a complete XML document and return its root element.
    ///
    /// The whole document is read before returning; any syntax error,
    /// mismatched or unclosed tag, undeclared prefix, or content outside
    /// the root element is reported as [`ExtractError::XmlSyntax`].
    pub fn parse(content: &str) -> Result<Self, ExtractError> {
        let mut reader = NsReader::from_str(content);
        reader.config_mut().trim_text(false);
        reader.config_mut().expand_empty_elements = true;

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(e) => {
                    return Err(ExtractError::XmlSyntax(format!(
                        "{} (at byte {})",
                        e,
                        reader.error_position()
                    )));
                }
            };

            match event {
                Event::Start(start) => {
                    if root.is_some() {
                        return Err(ExtractError::XmlSyntax(
                            "content after the root element".to_string(),
                        ));
                    }
                    stack.push(Self::from_start(&reader, &start)?);
                }
                Event::End(_) => {
                    // quick-xml already rejects mismatched end tags
                    let Some(element) = stack.pop() else {
                        return Err(ExtractError::XmlSyntax(format!(
                            "unexpected end tag at byte {}",
                            reader.buffer_position()
                        )));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(XmlNode::Element(element)),
                        None => root = Some(element),
                    }
                }
                Event::Text(text) => {
                    let text = text.unescape().map_err(|e| {
                        ExtractError::XmlSyntax(format!(
                            "{} (at byte {})",
                            e,
                            reader.buffer_position()
                        ))
                    })?;
                    Self::append_text(&mut stack, &text)?;
                }
                Event::CData(cdata) => {
                    let text = reader
                        .decoder()
                        .decode(&cdata)
                        .map_err(|e| ExtractError::XmlSyntax(e.to_string()))?;
                    Self::append_text(&mut stack, &text)?;
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions and doctypes carry no cues
                _ => {}
            }
        }

        if let Some(unclosed) = stack.last() {
            return Err(ExtractError::XmlSyntax(format!(
                "unexpected end of document, <{}> is not closed",
                unclosed.local_name
            )));
        }

        root.ok_or_else(|| ExtractError::XmlSyntax("document has no root element".to_string()))
    }

    fn from_start(reader: &NsReader<&[u8]>, start: &BytesStart) -> Result<Self, ExtractError> {
        let (resolved, local_name) = reader.resolve_element(start.name());
        let namespace = match resolved {
            ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(ExtractError::XmlSyntax(format!(
                    "namespace prefix '{}' is not declared",
                    String::from_utf8_lossy(&prefix)
                )));
            }
        };

        let mut element = XmlElement {
            namespace,
            local_name: String::from_utf8_lossy(local_name.as_ref()).into_owned(),
            attributes: Vec::new(),
            children: Vec::new(),
        };

        for attr in start.attributes() {
            let attr = attr.map_err(|e| ExtractError::XmlSyntax(e.to_string()))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr
                .decode_and_unescape_value(reader.decoder())
                .map_err(|e| ExtractError::XmlSyntax(e.to_string()))?;
            element.attributes.push((key, value.into_owned()));
        }

        Ok(element)
    }

    fn append_text(stack: &mut [XmlElement], text: &str) -> Result<(), ExtractError> {
        let Some(current) = stack.last_mut() else {
            if text.trim().is_empty() {
                return Ok(());
            }
            return Err(ExtractError::XmlSyntax(
                "text outside the root element".to_string(),
            ));
        };

        // Entity and CDATA boundaries split text events; keep one node per run
        match current.children.last_mut() {
            Some(XmlNode::Text(existing)) => existing.push_str(text),
            _ => current.children.push(XmlNode::Text(text.to_string())),
        }
        Ok(())
    }

    /// Check the resolved namespace and local name
    pub fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.local_name == local_name
    }

    /// Value of the attribute with the given qualified name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct child elements in document order
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// First direct child element with the given name
    pub fn find_child(&self, namespace: &str, local_name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|child| child.is(namespace, local_name))
    }

    /// All descendant elements in document order, excluding `self`
    pub fn descendants(&self) -> Vec<&XmlElement> {
        let mut found = Vec::new();
        self.collect_descendants(&mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, found: &mut Vec<&'a XmlElement>) {
        for child in self.child_elements() {
            found.push(child);
            child.collect_descendants(found);
        }
    }
}
