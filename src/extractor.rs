use log::{debug, trace};
use std::path::Path;

use crate::cue::Cue;
use crate::errors::ExtractError;
use crate::timecode::parse_ebutt_timestamp;
use crate::ttml::{
    CaptionDivision, CaptionNode, TimedTextBody, TimedTextDocument, TtmlDocument,
};

// @module: EBU-TT caption extraction

// @const: Timing attribute names on caption nodes
const ATTR_BEGIN: &str = "begin";
const ATTR_END: &str = "end";

/// Read an EBU-TT file and extract its cues
pub fn parse_ebutt_file<P: AsRef<Path>>(path: P) -> Result<Vec<Cue>, ExtractError> {
    let path = path.as_ref();
    debug!("Reading EBU-TT document: {:?}", path);

    let document = TtmlDocument::from_file(path)?;
    extract_cues(&document)
}

/// Parse EBU-TT XML text and extract its cues
pub fn parse_ebutt_str(content: &str) -> Result<Vec<Cue>, ExtractError> {
    let document = TtmlDocument::parse(content)?;
    extract_cues(&document)
}

/// Walk body → division → caption nodes and keep every complete node.
///
/// A missing body or division fails the whole document. Caption nodes
/// lacking a parsable `begin`, a parsable `end`, or any span text are
/// skipped without error; the cues keep document order.
pub fn extract_cues<D: TimedTextDocument>(document: &D) -> Result<Vec<Cue>, ExtractError> {
    let body = document.body().ok_or_else(|| {
        ExtractError::DocumentStructure("no tt:body element below the document root".to_string())
    })?;

    let division = body.division().ok_or_else(|| {
        ExtractError::DocumentStructure("no tt:div element inside tt:body".to_string())
    })?;

    let mut cues = Vec::new();
    let mut node_count = 0;

    for node in division.caption_nodes() {
        node_count += 1;
        match cue_from_node(node) {
            Some(cue) => {
                trace!("Caption node {}: {}", node_count, cue);
                cues.push(cue);
            }
            None => trace!("Caption node {} is missing timing or text, skipped", node_count),
        }
    }

    debug!("Kept {} of {} caption nodes", cues.len(), node_count);

    Ok(cues)
}

/// Derive a cue from one caption node, or `None` if any field is missing
pub fn cue_from_node<N: CaptionNode>(node: &N) -> Option<Cue> {
    let begin = node.attribute(ATTR_BEGIN).and_then(parse_ebutt_timestamp);
    let end = node.attribute(ATTR_END).and_then(parse_ebutt_timestamp);
    let text = join_span_text(node.text_spans());

    Cue::from_parts(begin, end, text)
}

/// Join span texts with newlines, skipping spans without text
fn join_span_text(spans: Vec<String>) -> Option<String> {
    let lines: Vec<String> = spans
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
