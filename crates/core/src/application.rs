//! Reads, sorts and writes a list of names.

use std::path::Path;

use log::{debug, error};

use crate::error::Result;
use crate::file_handling::{IoOptions, LineReader, LineWriter};
use crate::sorter::Sorter;

/// Rendered entries starting with this prefix failed validation.
pub const INVALID_ENTRY_PREFIX: &str = "ERROR";

pub struct Application<S, R, W> {
    sorter: S,
    reader: R,
    writer: W,
    save_invalid_names: bool,
    io_options: IoOptions,
}

impl<S: Sorter, R: LineReader, W: LineWriter> Application<S, R, W> {
    pub fn new(sorter: S, reader: R, writer: W) -> Self {
        Self {
            sorter,
            reader,
            writer,
            save_invalid_names: false,
            io_options: IoOptions::default(),
        }
    }

    /// Whether invalid entries are written to the output file. They are
    /// always part of the returned list.
    #[must_use]
    pub fn with_save_invalid_names(mut self, save_invalid_names: bool) -> Self {
        self.save_invalid_names = save_invalid_names;
        self
    }

    #[must_use]
    pub fn with_io_options(mut self, io_options: IoOptions) -> Self {
        self.io_options = io_options;
        self
    }

    /// Sorts the names in `input_path` and writes them to `output_path`.
    ///
    /// Returns `Ok(None)` when the input has no lines or the read or write was
    /// cancelled; the output file is not written in the first two cases.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input or writing the output fails.
    pub fn sort_names(&self, input_path: &Path, output_path: &Path) -> Result<Option<Vec<String>>> {
        debug!("Executing sort_names");

        let original_names = match self.reader.read_all_lines(input_path, &self.io_options)? {
            Some(names) if !names.is_empty() => names,
            _ => {
                error!("No names found in file '{}'.", input_path.display());
                return Ok(None);
            }
        };

        let sorted_names = self.sorter.sort(&original_names);

        let written = if self.save_invalid_names {
            self.writer
                .write_all_lines(output_path, &sorted_names, &self.io_options)?
        } else {
            let valid_names: Vec<String> = sorted_names
                .iter()
                .filter(|name| !name.starts_with(INVALID_ENTRY_PREFIX))
                .cloned()
                .collect();
            self.writer
                .write_all_lines(output_path, &valid_names, &self.io_options)?
        };

        if written.is_none() {
            return Ok(None);
        }

        Ok(Some(sorted_names))
    }
}
