use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::extractor;
use crate::file_utils::FileManager;
use crate::srt_writer;

// @module: Application controller for EBU-TT conversion

// @const: Extension of documents picked up in folder mode
const INPUT_EXTENSION: &str = "xml";

/// Outcome of converting one document
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub cue_count: usize,
}

/// Main application controller for subtitle conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self { config })
    }

    /// Resolve the input argument and convert the file or every document in the folder
    pub fn run(&self, input: Option<PathBuf>, force_overwrite: bool) -> Result<Vec<ConversionReport>, AppError> {
        let input_path = FileManager::resolve_input_path(input.as_deref())?;

        if FileManager::dir_exists(&input_path) {
            self.run_folder(&input_path, force_overwrite)
        } else {
            Ok(vec![self.convert_file(&input_path, force_overwrite)?])
        }
    }

    /// Convert one EBU-TT file to SRT.
    ///
    /// The document is fully parsed before an output path is chosen, so a
    /// parse failure never leaves a partial SRT file behind.
    pub fn convert_file(&self, input_file: &Path, force_overwrite: bool) -> Result<ConversionReport, AppError> {
        let start_time = Instant::now();

        if !FileManager::file_exists(input_file) {
            return Err(AppError::InputNotFound(input_file.to_path_buf()));
        }

        info!("Converting {}", input_file.display());

        let cues = extractor::parse_ebutt_file(input_file)?;
        info!("Found {} subtitles.", cues.len());

        let output_path = FileManager::choose_output_path(input_file, &self.config.output, force_overwrite)?;
        if force_overwrite && output_path.exists() {
            warn!("Overwriting existing file: {}", output_path.display());
        }

        srt_writer::write_srt_file(&cues, &output_path)?;
        info!("Subtitles successfully written to {}", output_path.display());

        debug!("Conversion took {}", Self::format_duration(start_time.elapsed()));

        Ok(ConversionReport {
            input_path: input_file.to_path_buf(),
            output_path,
            cue_count: cues.len(),
        })
    }

    /// Convert every `.xml` document below a directory.
    ///
    /// A file that fails is logged and skipped. The run only fails when
    /// files were found but none of them converted.
    pub fn run_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<Vec<ConversionReport>, AppError> {
        let start_time = Instant::now();

        if !FileManager::dir_exists(input_dir) {
            return Err(AppError::InputNotFound(input_dir.to_path_buf()));
        }

        let files = FileManager::find_files(input_dir, INPUT_EXTENSION)?;
        if files.is_empty() {
            warn!("No .{} files found in {}", INPUT_EXTENSION, input_dir.display());
            return Ok(Vec::new());
        }

        let mut reports = Vec::with_capacity(files.len());
        let mut failures = 0;
        let mut last_error = None;

        for file in &files {
            match self.convert_file(file, force_overwrite) {
                Ok(report) => reports.push(report),
                Err(e) => {
                    if e.is_document_error() {
                        warn!("Skipping {}: {}", file.display(), e);
                    } else {
                        error!("Error processing file {}: {}", file.display(), e);
                    }
                    failures += 1;
                    last_error = Some(e);
                }
            }
        }

        info!(
            "Finished processing {} of {} files in {}",
            reports.len(),
            files.len(),
            Self::format_duration(start_time.elapsed())
        );

        match last_error {
            Some(e) if reports.is_empty() => Err(e),
            _ => {
                if failures > 0 {
                    warn!("{} file(s) could not be converted", failures);
                }
                Ok(reports)
            }
        }
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
