//! Line classification for INI content
//!
//! A single line is either a section header (`[Name] ; comment`), a key/value
//! assignment (`Key = Value ; comment`) or something else (blank lines,
//! full-line comments, garbage). Both rules are regular expressions built
//! from a template around the configured comment separator.

use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::defaults::DEFAULT_COMMENT_SEPARATOR;
use crate::error::IniError;

const SECTION_TEMPLATE: &str = r"^\s*\[\s*([^\]]+)\]\s*(?:{SEP}(.*))?";
const KEY_VALUE_TEMPLATE: &str = r"^\s*([^=]+?)\s*=\s*([^{SEP}]+)(?:{SEP}(.*))?";

lazy_static! {
    static ref DEFAULT_SECTION_REGEX: Regex =
        build_rule(SECTION_TEMPLATE, DEFAULT_COMMENT_SEPARATOR).unwrap();
    static ref DEFAULT_KEY_VALUE_REGEX: Regex =
        build_rule(KEY_VALUE_TEMPLATE, DEFAULT_COMMENT_SEPARATOR).unwrap();
}

fn build_rule(template: &str, separator: char) -> Result<Regex, regex::Error> {
    let escaped = regex::escape(&separator.to_string());
    Regex::new(&template.replace("{SEP}", &escaped))
}

/// Result of classifying one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Section(String),
    KeyValue { key: String, value: String },
    Other,
}

/// Matches lines against the section and key/value rules
#[derive(Debug, Clone)]
pub struct LineClassifier {
    separator: char,
    section_regex: Regex,
    key_value_regex: Regex,
}

impl Default for LineClassifier {
    fn default() -> Self {
        LineClassifier {
            separator: DEFAULT_COMMENT_SEPARATOR,
            section_regex: DEFAULT_SECTION_REGEX.clone(),
            key_value_regex: DEFAULT_KEY_VALUE_REGEX.clone(),
        }
    }
}

impl LineClassifier {
    /// Create a classifier for the given comment separator
    ///
    /// The separator must not be one of the structural characters `[`, `]`,
    /// `=` and must not be whitespace, otherwise the rules could not tell a
    /// comment from the payload.
    pub fn new(separator: char) -> Result<Self, IniError> {
        if separator == DEFAULT_COMMENT_SEPARATOR {
            return Ok(Self::default());
        }
        if matches!(separator, '[' | ']' | '=') || separator.is_whitespace() {
            return Err(IniError::InvalidSeparator(separator));
        }

        Ok(LineClassifier {
            separator,
            section_regex: build_rule(SECTION_TEMPLATE, separator)?,
            key_value_regex: build_rule(KEY_VALUE_TEMPLATE, separator)?,
        })
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Extract the section name if the line is a section header
    pub fn section(&self, line: &str) -> Option<String> {
        self.section_regex
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extract key and value if the line is an assignment
    pub fn key_value(&self, line: &str) -> Option<(String, String)> {
        let captures = self.key_value_regex.captures(line)?;
        let key = captures.get(1)?.as_str().to_string();
        let value = captures.get(2)?.as_str().to_string();
        Some((key, value))
    }

    /// Classify a line, section rule first
    pub fn classify(&self, line: &str) -> Line {
        if let Some(name) = self.section(line) {
            return Line::Section(name);
        }
        match self.key_value(line) {
            Some((key, value)) => Line::KeyValue { key, value },
            None => Line::Other,
        }
    }
}
