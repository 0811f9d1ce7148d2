//! Name Sorter CLI Library
//!
//! This crate provides the command-line interface for name-sorter. It parses
//! arguments, merges them with the optional settings file, runs the core
//! application and prints the sorted names.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`runner`]: Resolving paths and settings, running the sort, printing results
//!
//! # Examples
//!
//! The CLI binary (`name-sorter`) can be used in several ways:
//!
//! ```bash
//! # Sort into sorted-names-list.txt next to the executable
//! name-sorter ./unsorted-names-list.txt
//!
//! # Sort into a chosen output file
//! name-sorter ./unsorted-names-list.txt ./sorted.txt
//!
//! # Keep invalid names in the output file, names separated by commas
//! name-sorter --save-invalid-names --separator , ./names.csv ./sorted.csv
//!
//! # Show diagnostics for every step
//! RUST_LOG=debug name-sorter ./unsorted-names-list.txt
//! ```

pub mod cli_args;
pub mod runner;
