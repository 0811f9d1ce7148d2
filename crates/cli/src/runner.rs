//! Wiring between the command line and the core application.
//!
//! Command-line flags take precedence over the settings file, which takes
//! precedence over the built-in defaults.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use name_sorter_core::application::Application;
use name_sorter_core::config::{resolve_file_path, DEFAULT_OUTPUT_FILE_NAME};
use name_sorter_core::error::Result;
use name_sorter_core::file_handling::{FileReader, FileWriter, IoOptions};
use name_sorter_core::settings::Settings;
use name_sorter_core::sorter::NameSorter;
use name_sorter_core::validator::NameValidator;

use crate::cli_args::Args;

/// Printed when the run produced no names.
pub const NO_NAMES_FOUND: &str = "No names found.";

/// Fully resolved inputs of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub separator: char,
    pub save_invalid_names: bool,
}

impl SortRequest {
    /// Builds the request from the arguments and settings.
    ///
    /// Bare file names are resolved against `base_directory`. Returns `None`
    /// when no input file was given.
    pub fn from_args(args: &Args, settings: &Settings, base_directory: &Path) -> Option<Self> {
        let input_file_path = args.input_file_path.as_deref()?;
        let output_file_path = args
            .output_file_path
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_FILE_NAME);

        Some(Self {
            input_path: resolve_file_path(input_file_path, base_directory),
            output_path: resolve_file_path(output_file_path, base_directory),
            separator: args.separator.unwrap_or(settings.separator),
            save_invalid_names: if args.save_invalid_names {
                true
            } else if args.no_save_invalid_names {
                false
            } else {
                settings.save_invalid_names
            },
        })
    }
}

/// Sorts the input file into the output file.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be written.
pub fn run(request: &SortRequest, io_options: IoOptions) -> Result<Option<Vec<String>>> {
    debug!("Running with {:?}", request);

    let sorter = NameSorter::new(NameValidator::new()).with_separator(request.separator);
    let application = Application::new(sorter, FileReader, FileWriter)
        .with_save_invalid_names(request.save_invalid_names)
        .with_io_options(io_options);

    application.sort_names(&request.input_path, &request.output_path)
}

/// Prints each sorted name on its own line, or a notice if there are none.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_sorted_names<W: Write>(out: &mut W, sorted_names: Option<&[String]>) -> Result<()> {
    match sorted_names {
        Some(names) if !names.is_empty() => {
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
        _ => writeln!(out, "{NO_NAMES_FOUND}")?,
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn print(sorted_names: Option<&[String]>) -> String {
        let mut out = Vec::new();
        print_sorted_names(&mut out, sorted_names).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_from_args_without_input_is_none() {
        let args = Args::parse_from(["name-sorter"]);
        let request = SortRequest::from_args(&args, &Settings::default(), Path::new("/opt/bin"));
        assert!(request.is_none());
    }

    #[test]
    fn test_from_args_defaults_output_next_to_executable() {
        let args = Args::parse_from(["name-sorter", "unsorted-names-list.txt"]);
        let request =
            SortRequest::from_args(&args, &Settings::default(), Path::new("/opt/bin")).unwrap();

        assert_eq!(
            request,
            SortRequest {
                input_path: PathBuf::from("/opt/bin/unsorted-names-list.txt"),
                output_path: PathBuf::from("/opt/bin/sorted-names-list.txt"),
                separator: ' ',
                save_invalid_names: false,
            }
        );
    }

    #[test]
    fn test_from_args_keeps_paths_with_directories() {
        let args = Args::parse_from(["name-sorter", "./in.txt", "/tmp/out.txt"]);
        let request =
            SortRequest::from_args(&args, &Settings::default(), Path::new("/opt/bin")).unwrap();

        assert_eq!(request.input_path, PathBuf::from("./in.txt"));
        assert_eq!(request.output_path, PathBuf::from("/tmp/out.txt"));
    }

    #[test]
    fn test_from_args_uses_settings() {
        let args = Args::parse_from(["name-sorter", "/tmp/in.txt"]);
        let settings = Settings {
            separator: ';',
            save_invalid_names: true,
        };
        let request = SortRequest::from_args(&args, &settings, Path::new("/opt/bin")).unwrap();

        assert_eq!(request.separator, ';');
        assert!(request.save_invalid_names);
    }

    #[test]
    fn test_from_args_flags_override_settings() {
        let args = Args::parse_from(["name-sorter", "--separator", ",", "-i", "/tmp/in.txt"]);
        let settings = Settings {
            separator: ';',
            save_invalid_names: false,
        };
        let request = SortRequest::from_args(&args, &settings, Path::new("/opt/bin")).unwrap();

        assert_eq!(request.separator, ',');
        assert!(request.save_invalid_names);
    }

    #[test]
    fn test_from_args_can_turn_saving_off() {
        let args = Args::parse_from(["name-sorter", "--no-save-invalid-names", "/tmp/in.txt"]);
        let settings = Settings {
            separator: ' ',
            save_invalid_names: true,
        };
        let request = SortRequest::from_args(&args, &settings, Path::new("/opt/bin")).unwrap();

        assert!(!request.save_invalid_names);
    }

    #[test]
    fn test_print_sorted_names() {
        let names = vec!["Joe Bloggs".to_string(), "Adam Wood".to_string()];
        assert_eq!(print(Some(names.as_slice())), "Joe Bloggs\nAdam Wood\n");
    }

    #[test]
    fn test_print_no_names() {
        assert_eq!(print(None), "No names found.\n");
        assert_eq!(print(Some(&[][..])), "No names found.\n");
    }
}
