pub mod convert;
pub mod file;

// Re-export common utilities
pub use convert::IniValue;
pub use file::{file_delete, file_exists, read_lines, write_lines};
