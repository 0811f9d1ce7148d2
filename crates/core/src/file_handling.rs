//! File handling for name-sorter.
//!
//! This module provides the line reader and writer used by the application,
//! the options they share, and the loader for the optional settings file.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, error, info, warn};
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};
use crate::settings::Settings;

/// Options shared by every read and write.
#[derive(Debug, Clone, Default)]
pub struct IoOptions {
    /// Cancelling this token makes pending reads and writes return `None`.
    pub cancellation_token: CancellationToken,
}

impl IoOptions {
    pub fn new(cancellation_token: CancellationToken) -> Self {
        Self { cancellation_token }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }
}

/// Source of raw name entries.
pub trait LineReader {
    /// Reads every line of the file at `path`.
    ///
    /// Returns `Ok(None)` when the read was cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not valid UTF-8.
    fn read_all_lines(&self, path: &Path, options: &IoOptions) -> Result<Option<Vec<String>>>;
}

/// Sink for rendered name entries.
pub trait LineWriter {
    /// Writes `lines` to `path`, replacing any existing content, and returns
    /// the number of lines written.
    ///
    /// Returns `Ok(None)` when the write was cancelled before the file was
    /// touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written to.
    fn write_all_lines(
        &self,
        path: &Path,
        lines: &[String],
        options: &IoOptions,
    ) -> Result<Option<usize>>;
}

/// Reads UTF-8 text files, one entry per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReader;

impl LineReader for FileReader {
    fn read_all_lines(&self, path: &Path, options: &IoOptions) -> Result<Option<Vec<String>>> {
        debug!("Executing read_all_lines");
        if options.is_cancelled() {
            warn!("File read was cancelled.");
            return Ok(None);
        }

        info!("Reading file '{}'.", path.display());
        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Could not read file '{}'. Reason: {}.", path.display(), e);
            Error::io_error("input".to_string(), path.display().to_string(), e)
        })?;

        if options.is_cancelled() {
            warn!("File read was cancelled.");
            return Ok(None);
        }

        let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);
        let lines: Vec<String> = contents.lines().map(ToString::to_string).collect();

        info!("Read {} lines from file '{}'.", lines.len(), path.display());
        Ok(Some(lines))
    }
}

/// Writes UTF-8 text files, each line terminated by `\n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileWriter;

impl FileWriter {
    fn write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for line in lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

impl LineWriter for FileWriter {
    fn write_all_lines(
        &self,
        path: &Path,
        lines: &[String],
        options: &IoOptions,
    ) -> Result<Option<usize>> {
        debug!("Executing write_all_lines");
        if options.is_cancelled() {
            warn!("File write was cancelled.");
            return Ok(None);
        }

        info!("Writing file '{}'.", path.display());
        Self::write_lines(path, lines).map_err(|e| {
            error!("Could not write file '{}'. Reason: {}.", path.display(), e);
            Error::io_error("output".to_string(), path.display().to_string(), e)
        })?;

        info!("Wrote {} lines to file '{}'.", lines.len(), path.display());
        Ok(Some(lines.len()))
    }
}

/// Reads the settings file.
///
/// Returns None if the file doesn't exist.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - The YAML doesn't match the expected structure
pub fn get_settings(settings_path: &str) -> Result<Option<Settings>> {
    if !Path::new(settings_path).exists() {
        debug!("No settings file at `{}`, using defaults", settings_path);
        return Ok(None);
    }

    let reader = File::open(settings_path).map_err(|e| {
        Error::io_error("settings".to_string(), settings_path.to_string(), e)
    })?;

    let settings: Settings = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )
    })?;

    Ok(Some(settings))
}
