use serde::Deserialize;

use crate::sorter::DEFAULT_SEPARATOR;

/// Contents of the optional YAML settings file.
///
/// Every field may be left out; missing fields take their defaults.
///
/// ```yaml
/// separator: " "
/// save_invalid_names: true
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Character placed between the tokens of a name.
    pub separator: char,
    /// Whether entries that failed validation are written to the output file.
    pub save_invalid_names: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            save_invalid_names: false,
        }
    }
}
