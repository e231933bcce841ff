/*!
 * # ebutt2srt - EBU-TT to SubRip subtitle converter
 *
 * A Rust library for turning broadcast EBU-TT (TTML) caption documents into
 * SRT files that common players understand.
 *
 * ## Features
 *
 * - Namespace-aware parsing of EBU-TT-D documents
 * - Caption nodes without usable timing or text are skipped, not fatal
 * - Millisecond-rounded SRT timestamps
 * - Output paths that never overwrite an existing file unless asked to
 * - Single-file and folder conversion
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `ttml`: XML element tree and the read-only document view:
 *   - `ttml::tree`: quick-xml based element tree
 *   - `ttml::view`: body / division / caption node capabilities
 * - `timecode`: EBU-TT clock parsing and SRT timestamp formatting
 * - `cue`: The caption cue model
 * - `extractor`: EBU-TT document to ordered cues
 * - `srt_writer`: Cues to SubRip text
 * - `file_utils`: Input resolution and output path selection
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod cue;
pub mod errors;
pub mod extractor;
pub mod file_utils;
pub mod srt_writer;
pub mod timecode;
pub mod ttml;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{ConversionReport, Controller};
pub use cue::Cue;
pub use errors::{AppError, ExtractError, OutputError};
pub use extractor::{extract_cues, parse_ebutt_file, parse_ebutt_str};
pub use srt_writer::{render_srt, write_srt, write_srt_file};
