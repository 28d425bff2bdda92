//! In-memory INI document
//!
//! This module holds the document model and everything that moves data in and
//! out of it: loading from lines or files, saving back, and the string and
//! typed accessors.
//!
//! Sections and keys are compared without regard to ASCII case and are always
//! listed and written in case-insensitive alphabetical order. Comments are
//! dropped while loading and never written back.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use log::{debug, warn};

use crate::constants::defaults::DEFAULT_SECTION;
use crate::error::IniError;
use crate::models::caseless::CaseInsensitiveString;
use crate::parser::line::{Line, LineClassifier};
use crate::settings::IniSettings;
use crate::utils::convert::IniValue;
use crate::utils::file::{read_lines, write_lines};

/// Keys and values of a single section
pub type SectionData = BTreeMap<CaseInsensitiveString, String>;

/// An INI document: sections of key/value pairs
///
/// The document is not synchronized. All mutation goes through `&mut self`,
/// so callers sharing one between threads must wrap it in their own lock.
#[derive(Debug, Clone, Default)]
pub struct IniDocument {
    /// Sections with their key/value data
    sections: BTreeMap<CaseInsensitiveString, SectionData>,
    /// Rules used to recognize lines while loading
    classifier: LineClassifier,
}

impl IniDocument {
    /// Create an empty document using `;` as comment separator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with a custom comment separator
    pub fn with_comment_separator(separator: char) -> Result<Self, IniError> {
        Ok(IniDocument {
            sections: BTreeMap::new(),
            classifier: LineClassifier::new(separator)?,
        })
    }

    /// Create an empty document from parser settings
    pub fn with_settings(settings: &IniSettings) -> Result<Self, IniError> {
        Ok(IniDocument {
            sections: BTreeMap::new(),
            classifier: settings.build_classifier()?,
        })
    }

    /// Create a new document and load a file into it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IniError> {
        let mut document = IniDocument::new();
        document.load_file(path)?;
        Ok(document)
    }

    pub fn comment_separator(&self) -> char {
        self.classifier.separator()
    }

    /// Replace the document content with the given lines
    ///
    /// Lines that are neither a section header nor an assignment are skipped.
    /// Keys before the first header go to the unnamed section `""`. Sections
    /// left without keys are removed afterwards.
    pub fn load_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();

        let mut current = CaseInsensitiveString::new(DEFAULT_SECTION);
        self.sections.insert(current.clone(), SectionData::new());

        for line in lines {
            match self.classifier.classify(line.as_ref()) {
                Line::Section(name) => {
                    current = CaseInsensitiveString::new(&name);
                    self.sections.entry(current.clone()).or_default();
                }
                Line::KeyValue { key, value } => {
                    self.sections
                        .entry(current.clone())
                        .or_default()
                        .insert(CaseInsensitiveString::new(&key), value);
                }
                Line::Other => {}
            }
        }

        self.prune_empty_sections();
        debug!("Loaded INI document with {} section(s)", self.sections.len());
    }

    /// Replace the document content with the given text
    pub fn parse(&mut self, content: &str) {
        self.load_lines(content.lines());
    }

    /// Replace the document content with the content of a file
    ///
    /// The document is cleared before the file is opened, so it stays empty
    /// when the file cannot be read.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), IniError> {
        self.clear();

        let path = path.as_ref();
        let lines = read_lines(path).map_err(|e| {
            warn!("Failed to read INI file {}: {}", path.display(), e);
            IniError::io(&path.display().to_string(), e)
        })?;

        debug!("Read {} line(s) from {}", lines.len(), path.display());
        self.load_lines(lines);
        Ok(())
    }

    /// Render the document as lines, ready to be written
    pub fn save_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (section, data) in &self.sections {
            if !section.as_str().is_empty() {
                lines.push(format!("[{}]", section));
            }
            for (key, value) in data {
                lines.push(format!("{}={}", key, value));
            }
        }
        lines
    }

    /// Write the document to a file, replacing its content
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<(), IniError> {
        let path = path.as_ref();
        let lines = self.save_lines();

        write_lines(path, &lines).map_err(|e| {
            warn!("Failed to write INI file {}: {}", path.display(), e);
            IniError::io(&path.display().to_string(), e)
        })?;

        debug!("Wrote {} line(s) to {}", lines.len(), path.display());
        Ok(())
    }

    /// Get a value, or `default` when it is missing or empty
    pub fn get(&self, section: &str, key: &str, default: &str) -> String {
        self.sections
            .get(&CaseInsensitiveString::new(section))
            .and_then(|data| data.get(&CaseInsensitiveString::new(key)))
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Get a typed value, or `default` when it is missing or empty
    ///
    /// Fails if the stored text cannot be converted to `T`.
    pub fn get_value<T: IniValue>(
        &self,
        section: &str,
        key: &str,
        default: T,
    ) -> Result<T, IniError> {
        let raw = self.get(section, key, &default.to_ini_string());
        T::from_ini_str(&raw)
    }

    /// Set a value, creating the section and key when needed
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(CaseInsensitiveString::new(section))
            .or_default()
            .insert(CaseInsensitiveString::new(key), value.to_string());
    }

    /// Set a typed value, creating the section and key when needed
    pub fn set_value<T: IniValue>(&mut self, section: &str, key: &str, value: T) {
        self.set(section, key, &value.to_ini_string());
    }

    /// Empty the value of a key; reads fall back to their default afterwards
    pub fn clear_value(&mut self, section: &str, key: &str) {
        self.set(section, key, "");
    }

    /// Remove a key, and its section once that has no keys left
    pub fn key_delete(&mut self, section: &str, key: &str) {
        let section = CaseInsensitiveString::new(section);
        let Some(data) = self.sections.get_mut(&section) else {
            return;
        };

        data.remove(&CaseInsensitiveString::new(key));
        if data.is_empty() {
            self.sections.remove(&section);
        }
    }

    /// Remove a section with all of its keys
    pub fn section_delete(&mut self, section: &str) {
        self.sections.remove(&CaseInsensitiveString::new(section));
    }

    /// Check whether a section is missing or has no keys
    pub fn section_is_empty(&self, section: &str) -> bool {
        self.sections
            .get(&CaseInsensitiveString::new(section))
            .is_none_or(|data| data.is_empty())
    }

    pub fn section_exists(&self, section: &str) -> bool {
        self.sections.contains_key(&CaseInsensitiveString::new(section))
    }

    pub fn key_exists(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(&CaseInsensitiveString::new(section))
            .is_some_and(|data| data.contains_key(&CaseInsensitiveString::new(key)))
    }

    /// Names of all sections, in case-insensitive order
    pub fn list_sections(&self) -> Vec<String> {
        self.sections.keys().map(|s| s.to_string()).collect()
    }

    /// Names of all keys of a section, in case-insensitive order
    pub fn list_keys(&self, section: &str) -> Vec<String> {
        self.sections
            .get(&CaseInsensitiveString::new(section))
            .map(|data| data.keys().map(|k| k.to_string()).collect())
            .unwrap_or_default()
    }

    /// Drop all content
    pub fn clear(&mut self) {
        for data in self.sections.values_mut() {
            data.clear();
        }
        self.sections.clear();
    }

    fn prune_empty_sections(&mut self) {
        self.sections.retain(|_, data| !data.is_empty());
    }
}

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.save_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
top=level
[General]
api_mode=false ; toggles the API
Default_URL=
enable_insert = true

[Proxy]
; full line comment
test=trojan,example.com,443
garbage line
[Empty]
[general] ; same section, other spelling
port=8080
"#;

    fn sample() -> IniDocument {
        let mut document = IniDocument::new();
        document.parse(SAMPLE);
        document
    }

    #[test]
    fn test_parse_sections_and_keys() {
        let document = sample();
        assert_eq!(document.list_sections(), vec!["", "General", "Proxy"]);
        assert_eq!(
            document.list_keys("GENERAL"),
            vec!["api_mode", "enable_insert", "port"]
        );
        assert_eq!(document.get("", "top", "-"), "level");
        assert_eq!(document.get("General", "api_mode", "-"), "false ");
        assert_eq!(document.get("general", "ENABLE_INSERT", "-"), "true");
        assert_eq!(document.get("Proxy", "test", "-"), "trojan,example.com,443");
    }

    #[test]
    fn test_parse_prunes_empty_sections() {
        let document = sample();
        assert!(!document.section_exists("Empty"));
        assert!(document.section_is_empty("Empty"));

        let mut document = IniDocument::new();
        document.parse("[OnlyHeader]\n");
        assert!(document.list_sections().is_empty());
        assert!(!document.section_exists(""));
    }

    #[test]
    fn test_load_replaces_previous_content() {
        let mut document = sample();
        document.parse("[Other]\nkey=value\n");
        assert_eq!(document.list_sections(), vec!["Other"]);
    }

    #[test]
    fn test_spaced_section_names_share_a_section() {
        let mut document = IniDocument::new();
        document.parse("[ Name ]\nfirst=1\n[Name ]\nsecond=2\n[Name]\nthird=3\n");
        assert_eq!(document.list_sections(), vec!["Name", "Name "]);
        assert_eq!(document.list_keys("Name "), vec!["first", "second"]);
        assert_eq!(document.list_keys("Name"), vec!["third"]);
    }

    #[test]
    fn test_key_with_separator_round_trips() {
        let mut document = IniDocument::new();
        document.set("S", "a;b", "v");
        let saved = document.save_lines();
        assert_eq!(saved, vec!["[S]", "a;b=v"]);

        document.load_lines(&saved);
        assert_eq!(document.list_sections(), vec!["S"]);
        assert_eq!(document.list_keys("S"), vec!["a;b"]);
        assert_eq!(document.get("S", "a;b", "<none>"), "v");
    }

    #[test]
    fn test_char_value_before_comment() {
        let mut document = IniDocument::new();
        document.parse("[SECTION_CHAR]\nKEY_CHAR=Y ; note\n");
        assert_eq!(document.get("SECTION_CHAR", "KEY_CHAR", "-"), "Y ");
        assert_eq!(document.get_value("SECTION_CHAR", "KEY_CHAR", 'N').unwrap(), 'Y');
    }

    #[test]
    fn test_later_assignment_overwrites() {
        let mut document = IniDocument::new();
        document.load_lines(["[S]", "Key=first", "KEY=second"]);
        assert_eq!(document.list_keys("S"), vec!["Key"]);
        assert_eq!(document.get("s", "key", "-"), "second");
    }

    #[test]
    fn test_save_lines_layout() {
        let mut document = IniDocument::new();
        document.set("beta", "b", "2");
        document.set("Alpha", "z", "26");
        document.set("Alpha", "A", "1");
        document.set("", "root", "yes");

        assert_eq!(
            document.save_lines(),
            vec!["root=yes", "[Alpha]", "A=1", "z=26", "[beta]", "b=2"]
        );
        assert_eq!(document.to_string(), "root=yes\n[Alpha]\nA=1\nz=26\n[beta]\nb=2\n");
    }

    #[test]
    fn test_get_default_fallback() {
        let mut document = IniDocument::new();
        document.set("S", "empty", "");
        assert_eq!(document.get("missing", "key", "dflt"), "dflt");
        assert_eq!(document.get("S", "missing", "dflt"), "dflt");
        assert_eq!(document.get("S", "empty", "dflt"), "dflt");
    }

    #[test]
    fn test_case_insensitive_identity() {
        let mut document = IniDocument::new();
        document.set("Foo", "Bar", "v");
        assert_eq!(document.get("foo", "bar", "d"), "v");
        document.set("FOO", "BAR", "w");
        assert_eq!(document.list_sections(), vec!["Foo"]);
        assert_eq!(document.list_keys("foo"), vec!["Bar"]);
        assert_eq!(document.get("Foo", "Bar", "d"), "w");
    }

    #[test]
    fn test_typed_accessors() {
        let mut document = IniDocument::new();
        document.set_value("Types", "flag", true);
        document.set_value("Types", "count", -42i32);
        document.set_value("Types", "ratio", 0.25f64);
        document.set_value("Types", "letter", 'Q');

        assert!(document.get_value("Types", "flag", false).unwrap());
        assert_eq!(document.get_value("Types", "count", 0i32).unwrap(), -42);
        assert_eq!(document.get_value("Types", "ratio", 1.0f64).unwrap(), 0.25);
        assert_eq!(document.get_value("Types", "letter", 'x').unwrap(), 'Q');
        assert_eq!(document.get_value("Types", "missing", 7u16).unwrap(), 7);
        assert_eq!(document.get("Types", "flag", ""), "true");
    }

    #[test]
    fn test_typed_get_surfaces_conversion_errors() {
        let mut document = IniDocument::new();
        document.set("Types", "count", "many");
        assert!(matches!(
            document.get_value("Types", "count", 0u32),
            Err(IniError::Conversion { .. })
        ));
    }

    #[test]
    fn test_clear_value() {
        let mut document = IniDocument::new();
        document.set_value("S", "c", 'Y');
        document.clear_value("S", "c");
        assert!(document.key_exists("S", "c"));
        assert_eq!(document.get_value("S", "c", 'N').unwrap(), 'N');
    }

    #[test]
    fn test_key_delete_collapses_section() {
        let mut document = IniDocument::new();
        document.set("S", "a", "1");
        document.set("S", "b", "2");

        document.key_delete("s", "A");
        assert_eq!(document.list_keys("S"), vec!["b"]);

        document.key_delete("S", "b");
        assert!(!document.section_exists("S"));
        assert!(document.list_sections().is_empty());

        document.key_delete("S", "b");
        document.key_delete("missing", "key");
    }

    #[test]
    fn test_section_delete() {
        let mut document = IniDocument::new();
        document.set("Keep", "k", "v");
        document.set("Drop", "k", "v");
        document.section_delete("DROP");
        document.section_delete("never there");
        assert_eq!(document.list_sections(), vec!["Keep"]);
    }

    #[test]
    fn test_section_is_empty() {
        let mut document = IniDocument::new();
        assert!(document.section_is_empty("S"));
        document.set("S", "k", "v");
        assert!(!document.section_is_empty("s"));
    }

    #[test]
    fn test_list_keys_missing_section() {
        assert!(IniDocument::new().list_keys("nothing").is_empty());
    }

    #[test]
    fn test_clear() {
        let mut document = sample();
        document.clear();
        assert!(document.list_sections().is_empty());
        document.clear();
        assert!(document.list_sections().is_empty());
    }

    #[test]
    fn test_custom_separator_document() {
        let mut document = IniDocument::with_comment_separator('#').unwrap();
        assert_eq!(document.comment_separator(), '#');
        document.parse("[S] # header\nurl=http://a;b # note\n");
        assert_eq!(document.get("S", "url", "-"), "http://a;b ");
    }

    #[test]
    fn test_invalid_separator_rejected() {
        assert!(matches!(
            IniDocument::with_comment_separator('='),
            Err(IniError::InvalidSeparator('='))
        ));
    }
}
