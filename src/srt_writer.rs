use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::cue::Cue;
use crate::errors::OutputError;

// @module: SubRip serialization

/// One numbered SRT block
pub struct SrtBlock<'a> {
    // @field: 1-based position among written cues
    pub seq_num: usize,

    pub cue: &'a Cue,
}

impl fmt::Display for SrtBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.cue.format_begin(), self.cue.format_end())?;
        writeln!(f, "{}", self.cue.text)?;
        writeln!(f)
    }
}

/// Number the cues from 1 in the given order
pub fn blocks(cues: &[Cue]) -> impl Iterator<Item = SrtBlock<'_>> {
    cues.iter()
        .enumerate()
        .map(|(i, cue)| SrtBlock { seq_num: i + 1, cue })
}

/// Write every cue as an SRT block
pub fn write_srt<W: Write>(cues: &[Cue], writer: &mut W) -> io::Result<()> {
    for block in blocks(cues) {
        write!(writer, "{}", block)?;
    }
    writer.flush()
}

/// Render the whole SRT document into a string
pub fn render_srt(cues: &[Cue]) -> String {
    blocks(cues).map(|block| block.to_string()).collect()
}

/// Write subtitles to an SRT file, creating parent directories as needed
pub fn write_srt_file<P: AsRef<Path>>(cues: &[Cue], path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    let io_error = |source: io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_srt(cues, &mut writer).map_err(io_error)
}
