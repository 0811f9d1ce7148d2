//! The parsed name record and its ordering.
//!
//! A [`ParsedName`] is built for every input line while sorting. It carries
//! either the derived name parts of a valid entry or the error marker of an
//! invalid one, alongside the untouched input line.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Rendered in place of the full name when an invalid entry has no text at all.
pub const NO_NAME_PLACEHOLDER: &str = "** No Name **";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedName {
    /// The input line, untouched.
    pub full_name: String,
    /// Every token but the last, joined by the separator. Empty when invalid.
    pub first_name: String,
    /// The last token. Empty when invalid.
    pub surname: String,
    /// Empty when valid, otherwise the validator's error marker.
    pub error_message: String,
}

impl ParsedName {
    /// Builds a valid entry from its name parts.
    pub fn valid(full_name: &str, first_name: String, surname: String) -> Self {
        Self {
            full_name: full_name.to_string(),
            first_name,
            surname,
            error_message: String::new(),
        }
    }

    /// Builds an invalid entry; the name parts are left empty.
    pub fn invalid(full_name: &str, error_message: String) -> Self {
        Self {
            full_name: full_name.to_string(),
            first_name: String::new(),
            surname: String::new(),
            error_message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error_message.is_empty()
    }

    /// Orders by surname, given names, error message and finally the full
    /// line, each compared ignoring case.
    pub fn compare(&self, other: &Self) -> Ordering {
        compare_ignore_case(&self.surname, &other.surname)
            .then_with(|| compare_ignore_case(&self.first_name, &other.first_name))
            .then_with(|| compare_ignore_case(&self.error_message, &other.error_message))
            .then_with(|| compare_ignore_case(&self.full_name, &other.full_name))
    }
}

impl Display for ParsedName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            return formatter.write_str(&self.full_name);
        }

        let full_name = if self.full_name.is_empty() {
            NO_NAME_PLACEHOLDER
        } else {
            &self.full_name
        };

        write!(formatter, "{} ({})", self.error_message, full_name)
    }
}

/// Ordinal comparison on the simple uppercase mapping of each character.
///
/// `"wood"` equals `"Wood"` and `"apple"` sorts before `"Banana"`. This is
/// not locale-aware collation, accented letters sort by code point.
pub fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    left.chars()
        .map(simple_uppercase)
        .cmp(right.chars().map(simple_uppercase))
}

/// One-to-one uppercase mapping; characters whose uppercase form expands to
/// several characters (`ß` -> `SS`) are left unchanged.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
