use std::cmp::Ordering;

/// Case-insensitive string for use as ordered map keys
///
/// Equality and ordering compare the ASCII-lowercased bytes, while the
/// original text is kept for display. A map keyed by this type therefore
/// iterates alphabetically regardless of case and keeps the spelling of the
/// first inserted key.
#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveString(String);

impl CaseInsensitiveString {
    pub fn new(s: &str) -> Self {
        CaseInsensitiveString(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b.to_ascii_lowercase())
    }
}

impl std::fmt::Display for CaseInsensitiveString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq for CaseInsensitiveString {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for CaseInsensitiveString {}

impl PartialEq<str> for CaseInsensitiveString {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialOrd for CaseInsensitiveString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CaseInsensitiveString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}
