//! Yet another INI parser
//!
//! Load INI content into an [`IniDocument`], query and change it with
//! case-insensitive section and key names, and write it back.
//!
//! ```rust
//! use yaip::IniDocument;
//!
//! let mut document = IniDocument::new();
//! document.parse("[General]\napi_mode=false; comment\n");
//! assert_eq!(document.get_value("general", "API_MODE", true).unwrap(), false);
//!
//! document.set_value("General", "port", 8080u16);
//! assert_eq!(document.save_lines(), vec!["[General]", "api_mode=false", "port=8080"]);
//! ```

pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the main document types for easier access
pub use error::IniError;
pub use models::{IniDocument, SectionData};
pub use settings::IniSettings;
pub use utils::IniValue;
