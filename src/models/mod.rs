//! Data model of an INI document
//!
//! [`IniDocument`] owns all sections; each section is a [`SectionData`] map
//! keyed by [`CaseInsensitiveString`].

pub mod caseless;
pub mod ini_document;

pub use caseless::CaseInsensitiveString;
pub use ini_document::{IniDocument, SectionData};
