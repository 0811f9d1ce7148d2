//! Token-count validation of name entries.

use log::trace;

/// Marker attached to entries that fail validation.
pub const INVALID_NAME_FORMAT: &str = "ERROR: Invalid Name format";
pub const MINIMUM_NAME_COUNT: usize = 2;
pub const MAXIMUM_NAME_COUNT: usize = 4;

/// Classifies the tokens of a name entry.
pub trait Validator {
    /// Returns `None` for a valid name, otherwise the error message to attach
    /// to the entry. Never fails; every token slice is classified.
    fn is_valid_name(&self, names: &[&str]) -> Option<String>;
}

/// Accepts names made of `MINIMUM_NAME_COUNT..=MAXIMUM_NAME_COUNT` tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameValidator;

impl NameValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for NameValidator {
    fn is_valid_name(&self, names: &[&str]) -> Option<String> {
        let name_count = names.len();
        trace!("Validating name with {} tokens", name_count);

        if (MINIMUM_NAME_COUNT..=MAXIMUM_NAME_COUNT).contains(&name_count) {
            return None;
        }

        Some(INVALID_NAME_FORMAT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_token_counts() {
        let validator = NameValidator::new();
        assert_eq!(validator.is_valid_name(&["Joe", "Bloggs"]), None);
        assert_eq!(validator.is_valid_name(&["Mary", "Jane", "Bloggs"]), None);
        assert_eq!(
            validator.is_valid_name(&["Hunter", "Uriah", "Mathew", "Clarke"]),
            None
        );
    }

    #[test]
    fn test_too_few_tokens() {
        let validator = NameValidator::new();
        assert_eq!(
            validator.is_valid_name(&[]),
            Some(INVALID_NAME_FORMAT.to_string())
        );
        assert_eq!(
            validator.is_valid_name(&["Bloggs"]),
            Some(INVALID_NAME_FORMAT.to_string())
        );
    }

    #[test]
    fn test_too_many_tokens() {
        let validator = NameValidator::new();
        assert_eq!(
            validator.is_valid_name(&["A", "B", "C", "D", "E"]),
            Some(INVALID_NAME_FORMAT.to_string())
        );
        assert_eq!(
            validator.is_valid_name(&["A", "B", "C", "D", "E", "F", "G"]),
            Some(INVALID_NAME_FORMAT.to_string())
        );
    }
}
