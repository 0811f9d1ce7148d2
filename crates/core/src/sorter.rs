//! Parsing and ordering of name entries.
//!
//! Each raw line is split into tokens, classified by a [`Validator`], turned
//! into a [`ParsedName`] and ordered by surname, then given names. Invalid
//! entries are kept in the output, rendered with their error message.

use itertools::Itertools;
use log::{debug, warn};

use crate::name::ParsedName;
use crate::validator::{NameValidator, Validator};

/// Separator used between name tokens when none is configured.
pub const DEFAULT_SEPARATOR: char = ' ';

/// Orders a sequence of raw name entries.
pub trait Sorter {
    /// Returns one rendered entry per input line, in sorted order.
    fn sort(&self, names: &[String]) -> Vec<String>;
}

#[derive(Debug, Clone)]
pub struct NameSorter<V = NameValidator> {
    separator: char,
    validator: V,
}

impl Default for NameSorter<NameValidator> {
    fn default() -> Self {
        Self::new(NameValidator::new())
    }
}

impl<V: Validator> NameSorter<V> {
    pub fn new(validator: V) -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            validator,
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Splits a line on the separator after trimming, dropping empty tokens.
    pub fn tokenize<'a>(&self, name: &'a str) -> Vec<&'a str> {
        name.trim()
            .split(self.separator)
            .filter(|word| !word.is_empty())
            .collect()
    }

    /// Builds the record used to order and render a single line.
    pub fn parse(&self, name: &str) -> ParsedName {
        let words = self.tokenize(name);

        if let Some(error_message) = self.validator.is_valid_name(&words) {
            let parsed = ParsedName::invalid(name, error_message);
            warn!("{}", parsed);
            return parsed;
        }

        match words.split_last() {
            Some((surname, given_names)) if !given_names.is_empty() => ParsedName::valid(
                name,
                given_names.join(self.separator.to_string().as_str()),
                (*surname).to_string(),
            ),
            // Only reachable with a validator that accepts single tokens.
            Some((only, _)) => ParsedName::valid(name, (*only).to_string(), String::new()),
            None => ParsedName::valid(name, String::new(), String::new()),
        }
    }
}

impl<V: Validator> Sorter for NameSorter<V> {
    fn sort(&self, names: &[String]) -> Vec<String> {
        debug!("Sorting {} names", names.len());
        if names.is_empty() {
            return Vec::new();
        }

        names
            .iter()
            .map(|name| self.parse(name))
            .sorted_by(ParsedName::compare)
            .map(|name| name.to_string())
            .collect()
    }
}
