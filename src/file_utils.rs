use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::app_config::OutputConfig;
use crate::errors::{AppError, OutputError};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// Turn the command-line argument into an absolute, existing path
    pub fn resolve_input_path(input: Option<&Path>) -> Result<PathBuf, AppError> {
        let input = match input {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err(AppError::Usage),
        };

        if !input.exists() {
            return Err(AppError::InputNotFound(input.to_path_buf()));
        }

        std::path::absolute(input)
            .map_err(|e| AppError::Unknown(format!("Failed to resolve {:?}: {}", input, e)))
    }

    // @generates: Input path with its extension replaced
    pub fn default_output_path<P: AsRef<Path>>(input_file: P, extension: &str) -> PathBuf {
        input_file.as_ref().with_extension(extension)
    }

    // @generates: Numbered alternative, e.g. clip007.srt
    pub fn numbered_output_path<P: AsRef<Path>>(input_file: P, extension: &str, number: u32) -> PathBuf {
        let base = input_file.as_ref().with_extension("");
        let mut file_name = base.into_os_string();
        file_name.push(format!("{:03}.{}", number, extension));
        PathBuf::from(file_name)
    }

    /// Pick the output path for a converted file.
    ///
    /// Uses the default path when it is free (or when overwriting is
    /// forced), otherwise the first free numbered alternative. Nothing is
    /// locked; a concurrent writer can still claim the path first.
    pub fn choose_output_path<P: AsRef<Path>>(
        input_file: P,
        output: &OutputConfig,
        force_overwrite: bool,
    ) -> Result<PathBuf, OutputError> {
        let input_file = input_file.as_ref();
        let default_path = Self::default_output_path(input_file, &output.extension);

        if force_overwrite || !default_path.exists() {
            return Ok(default_path);
        }

        (1..=output.collision_limit)
            .map(|number| Self::numbered_output_path(input_file, &output.extension, number))
            .find(|candidate| !candidate.exists())
            .ok_or(OutputError::OutputPathExhausted {
                default_path,
                limit: output.collision_limit,
            })
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }
}
