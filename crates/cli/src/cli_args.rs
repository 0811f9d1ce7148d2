//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::Parser;

/// Command-line arguments for the name-sorter CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use name_sorter_cli::cli_args::Args;
///
/// let args = Args::parse_from(["name-sorter", "./unsorted-names-list.txt"]);
/// assert_eq!(args.input_file_path.as_deref(), Some("./unsorted-names-list.txt"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.name-sorter/settings.yml`. A missing
    /// file means the built-in defaults are used.
    #[arg(long, short = 's')]
    pub settings_path: Option<String>,

    /// Write names that failed validation to the output file as well.
    ///
    /// Invalid names are always printed to the console.
    #[arg(long, short = 'i', action)]
    pub save_invalid_names: bool,

    /// Keep names that failed validation out of the output file, even if
    /// the settings file enables saving them.
    #[arg(long, action, conflicts_with = "save_invalid_names")]
    pub no_save_invalid_names: bool,

    /// Character separating the parts of a name.
    ///
    /// If not provided, the settings file value or a single space is used.
    #[arg(long)]
    pub separator: Option<char>,

    /// Input file path, one name per line.
    ///
    /// A bare file name is looked up next to the executable.
    pub input_file_path: Option<String>,

    /// Output file path for the sorted names.
    ///
    /// If not provided, defaults to `sorted-names-list.txt` next to the executable.
    pub output_file_path: Option<String>,
}
