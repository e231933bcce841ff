/*!
 * Read-only view of an EBU-TT document.
 *
 * The extractor only sees these traits: a document with a body, a body
 * with a division, a division with caption nodes, and caption nodes with
 * attributes and text spans. [`TtmlDocument`] implements them over the
 * parsed XML tree; tests can implement them over plain structs.
 */

use std::fs;
use std::path::Path;

use super::tree::{XmlElement, XmlNode};
use crate::errors::ExtractError;

/// Namespace URI shared by TTML and EBU-TT content elements
pub const TTML_NAMESPACE: &str = "http://www.w3.org/ns/ttml";

/// A timed-text document exposing its body container
pub trait TimedTextDocument {
    type Body: TimedTextBody;

    fn body(&self) -> Option<&Self::Body>;
}

/// A body container exposing its division container
pub trait TimedTextBody {
    type Division: CaptionDivision;

    fn division(&self) -> Option<&Self::Division>;
}

/// A division container holding caption nodes in document order
pub trait CaptionDivision {
    type Node: CaptionNode;

    fn caption_nodes(&self) -> impl Iterator<Item = &Self::Node>;
}

/// A single caption node
pub trait CaptionNode {
    /// Raw attribute value, if present
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Text of each inline span in document order; spans without text yield ""
    fn text_spans(&self) -> Vec<String>;
}

/// An EBU-TT document parsed from XML
#[derive(Debug, Clone)]
pub struct TtmlDocument {
    root: XmlElement,
}

impl TtmlDocument {
    /// Parse EBU-TT XML held in memory
    pub fn parse(content: &str) -> Result<Self, ExtractError> {
        Ok(TtmlDocument {
            root: XmlElement::parse(content)?,
        })
    }

    /// Read and parse an EBU-TT file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Root element of the document, normally `tt:tt`
    pub fn root(&self) -> &XmlElement {
        &self.root
    }
}

impl TimedTextDocument for TtmlDocument {
    type Body = XmlElement;

    fn body(&self) -> Option<&XmlElement> {
        self.root.find_child(TTML_NAMESPACE, "body")
    }
}

impl TimedTextBody for XmlElement {
    type Division = XmlElement;

    fn division(&self) -> Option<&XmlElement> {
        self.find_child(TTML_NAMESPACE, "div")
    }
}

impl CaptionDivision for XmlElement {
    type Node = XmlElement;

    fn caption_nodes(&self) -> impl Iterator<Item = &XmlElement> {
        self.child_elements()
    }
}

impl CaptionNode for XmlElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        XmlElement::attribute(self, name)
    }

    fn text_spans(&self) -> Vec<String> {
        self.descendants()
            .into_iter()
            .filter(|element| element.is(TTML_NAMESPACE, "span"))
            .map(span_text)
            .collect()
    }
}

/// Character data directly inside a span, with `tt:br` rendered as a newline.
/// Nested spans are skipped; they are collected as spans of their own.
fn span_text(span: &XmlElement) -> String {
    let mut text = String::new();
    for node in &span.children {
        match node {
            XmlNode::Text(content) => text.push_str(content),
            XmlNode::Element(element) if element.is(TTML_NAMESPACE, "br") => text.push('\n'),
            XmlNode::Element(_) => {}
        }
    }
    text
}
