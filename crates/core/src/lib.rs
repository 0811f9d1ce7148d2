//! Name Sorter Core Library
//!
//! This crate provides the core functionality for name-sorter, a batch tool
//! that reads a list of person names, validates them, sorts them by surname
//! then given names, and writes the sorted list back out.
//!
//! # Key Features
//!
//! - **Validation**: Names must be made of two to four tokens
//! - **Sorting**: Case-insensitive ordering by surname, given names and the raw line
//! - **Invalid Entries**: Kept in the sorted list with an error marker
//! - **File Handling**: Cancellable line reader and writer, plus a YAML settings file
//! - **Error Handling**: Error types for every whole-run failure
//!
//! # Examples
//!
//! Sorting a list of names in memory:
//!
//! ```
//! use name_sorter_core::sorter::{NameSorter, Sorter};
//! use name_sorter_core::validator::NameValidator;
//!
//! let sorter = NameSorter::new(NameValidator::new());
//! let names = vec!["Adam Wood".to_string(), "B".to_string(), "Joe Bloggs".to_string()];
//!
//! assert_eq!(
//!     sorter.sort(&names),
//!     vec!["ERROR: Invalid Name format (B)", "Joe Bloggs", "Adam Wood"]
//! );
//! ```
//!
//! Sorting a file:
//!
//! ```no_run
//! use std::path::Path;
//! use name_sorter_core::application::Application;
//! use name_sorter_core::file_handling::{FileReader, FileWriter};
//! use name_sorter_core::sorter::NameSorter;
//! use name_sorter_core::validator::NameValidator;
//!
//! let application = Application::new(
//!     NameSorter::new(NameValidator::new()),
//!     FileReader,
//!     FileWriter,
//! );
//! let sorted = application.sort_names(
//!     Path::new("unsorted-names-list.txt"),
//!     Path::new("sorted-names-list.txt"),
//! )?;
//! # Ok::<(), name_sorter_core::error::Error>(())
//! ```

pub mod application;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod name;
pub mod settings;
pub mod sorter;
pub mod validator;
