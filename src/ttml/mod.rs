/*!
 * EBU-TT (TTML) document access.
 *
 * - `tree`: namespace-aware XML element tree built with quick-xml
 * - `view`: the read-only document capabilities used by the extractor
 */

pub mod tree;
pub mod view;

pub use tree::{XmlElement, XmlNode};
pub use view::{
    CaptionDivision, CaptionNode, TTML_NAMESPACE, TimedTextBody, TimedTextDocument, TtmlDocument,
};
