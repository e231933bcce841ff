/*!
 * Tests for SRT rendering and file writing
 */

use std::fs;
use chrono::NaiveTime;
use anyhow::Result;
use ebutt2srt::cue::Cue;
use ebutt2srt::errors::OutputError;
use ebutt2srt::extractor::parse_ebutt_str;
use ebutt2srt::srt_writer::{render_srt, write_srt_file};
use crate::common;

fn cue(begin: NaiveTime, end: NaiveTime, text: &str) -> Cue {
    Cue::new(begin, end, text.to_string())
}

fn hms_milli(h: u32, m: u32, s: u32, ms: u32) -> NaiveTime {
    NaiveTime::from_hms_milli_opt(h, m, s, ms).unwrap()
}

/// Test the documented round trip of a single timestamp
#[test]
fn test_renderSrt_withEbuttTimestamp_shouldUseCommaSeparator() {
    let doc = common::ebutt_document(
        r#"<tt:p begin="00:01:02.345" end="00:01:03.000"><tt:span>Hi</tt:span></tt:p>"#,
    );
    let srt = render_srt(&parse_ebutt_str(&doc).unwrap());

    assert!(srt.contains("00:01:02,345 --> 00:01:03,000"));
}

/// Test the full output of the sample document
#[test]
fn test_renderSrt_withSampleDocument_shouldMatchExpectedText() {
    let cues = parse_ebutt_str(&common::sample_ebutt_document()).unwrap();
    assert_eq!(render_srt(&cues), common::SAMPLE_SRT);
}

/// Test that numbering stays contiguous after dropped nodes
#[test]
fn test_renderSrt_afterDroppedNodes_shouldNumberContiguously() {
    let doc = common::ebutt_document(
        r#"<tt:p begin="00:00:01.000"><tt:span>dropped</tt:span></tt:p>
<tt:p begin="00:00:02.000" end="00:00:03.000"><tt:span>first</tt:span></tt:p>
<tt:p begin="00:00:04.000" end="00:00:05.000"></tt:p>
<tt:p begin="00:00:06.000" end="00:00:07.000"><tt:span>second</tt:span></tt:p>"#,
    );
    let srt = render_srt(&parse_ebutt_str(&doc).unwrap());

    assert_eq!(
        srt,
        "1\n00:00:02,000 --> 00:00:03,000\nfirst\n\n2\n00:00:06,000 --> 00:00:07,000\nsecond\n\n"
    );
}

/// Test that sub-millisecond values are rounded, not truncated
#[test]
fn test_renderSrt_withSubMillisecondTimes_shouldRoundToNearest() {
    let begin = NaiveTime::from_hms_micro_opt(0, 0, 1, 999_700).unwrap();
    let end = NaiveTime::from_hms_micro_opt(0, 0, 3, 250_400).unwrap();
    let srt = render_srt(&[cue(begin, end, "Rounded")]);

    assert!(srt.contains("00:00:02,000 --> 00:00:03,250"));
}

/// Test that end before begin is written as given
#[test]
fn test_renderSrt_withEndBeforeBegin_shouldPassThrough() {
    let srt = render_srt(&[cue(hms_milli(0, 0, 5, 0), hms_milli(0, 0, 1, 0), "Backwards")]);
    assert!(srt.contains("00:00:05,000 --> 00:00:01,000"));
}

/// Test that non-ASCII text is written as UTF-8
#[test]
fn test_writeSrtFile_withUnicodeText_shouldWriteUtf8() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("unicode.srt");

    write_srt_file(&[cue(hms_milli(0, 0, 1, 0), hms_milli(0, 0, 2, 0), "Grüße – 字幕")], &path)?;

    let bytes = fs::read(&path)?;
    assert_eq!(
        String::from_utf8(bytes)?,
        "1\n00:00:01,000 --> 00:00:02,000\nGrüße – 字幕\n\n"
    );
    Ok(())
}

/// Test that an unwritable destination is reported with its path
#[test]
fn test_writeSrtFile_withDirectoryAsTarget_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let result = write_srt_file(&[], temp_dir.path());
    match result {
        Err(OutputError::Io { path, .. }) => assert_eq!(path, temp_dir.path()),
        other => panic!("expected an I/O error, got {:?}", other),
    }
    Ok(())
}
