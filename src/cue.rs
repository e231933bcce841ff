use chrono::NaiveTime;
use std::fmt;

use crate::timecode;

// @module: Caption cue model

// @struct: Single caption entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    // @field: Start time of day
    pub begin: NaiveTime,

    // @field: End time of day, not checked against begin
    pub end: NaiveTime,

    // @field: Caption text, lines joined with '\n'
    pub text: String,
}

impl Cue {
    /// Creates a cue from already parsed fields
    pub fn new(begin: NaiveTime, end: NaiveTime, text: String) -> Self {
        Cue { begin, end, text }
    }

    // @creates: Cue only when every field was derived
    // @validates: Begin, end and non-empty text are all present
    pub fn from_parts(
        begin: Option<NaiveTime>,
        end: Option<NaiveTime>,
        text: Option<String>,
    ) -> Option<Self> {
        match (begin, end, text) {
            (Some(begin), Some(end), Some(text)) if !text.is_empty() => {
                Some(Cue { begin, end, text })
            }
            _ => None,
        }
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_begin(&self) -> String {
        timecode::format_srt_timestamp(self.begin)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end(&self) -> String {
        timecode::format_srt_timestamp(self.end)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} --> {} {:?}", self.format_begin(), self.format_end(), self.text)
    }
}
