use serde::{Deserialize, Serialize};

use crate::constants::defaults::DEFAULT_COMMENT_SEPARATOR;
use crate::error::IniError;
use crate::parser::line::LineClassifier;

/// Parser settings for an INI document
///
/// Intended to be embedded in a host application's own configuration, every
/// field falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IniSettings {
    /// Character that starts an inline comment
    pub comment_separator: char,
}

impl Default for IniSettings {
    fn default() -> Self {
        IniSettings {
            comment_separator: DEFAULT_COMMENT_SEPARATOR,
        }
    }
}

impl IniSettings {
    pub fn build_classifier(&self) -> Result<LineClassifier, IniError> {
        LineClassifier::new(self.comment_separator)
    }
}
