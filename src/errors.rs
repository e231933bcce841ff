/*!
 * Error types for the ebutt2srt application.
 *
 * This module contains custom error types for the different stages of a
 * conversion run, using the thiserror crate for ergonomic error definitions.
 * Dropping a caption node with missing fields is not an error and has no
 * variant here.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an EBU-TT document into cues
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The document is not well-formed XML
    #[error("XML syntax error: {0}")]
    XmlSyntax(String),

    /// The body or division container is missing
    #[error("Malformed document structure: {0}")]
    DocumentStructure(String),

    /// The input file could not be read
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while choosing or writing the SRT output
#[derive(Error, Debug)]
pub enum OutputError {
    /// Every numbered fallback path is already taken
    #[error("Could not create output file: {} and all {limit} numbered alternatives exist", default_path.display())]
    OutputPathExhausted {
        /// The preferred output path
        default_path: PathBuf,
        /// Highest numeric suffix that was probed
        limit: u32,
    },

    /// The output file could not be created or written
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Destination that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// No input path was given
    #[error("Please provide an EBU-TT encoded xml file as argument")]
    Usage,

    /// The input path does not exist
    #[error("The given input file does not exist: {0:?}")]
    InputNotFound(PathBuf),

    /// Error from document extraction
    #[error("Error parsing file: {0}")]
    Extract(#[from] ExtractError),

    /// Error from output selection or writing
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AppError {
    /// True for errors caused by the document content rather than the environment
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            Self::Extract(ExtractError::XmlSyntax(_) | ExtractError::DocumentStructure(_))
        )
    }
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
