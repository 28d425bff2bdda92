//! Error types for INI documents

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IniError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot convert '{value}' to {target}")]
    Conversion { value: String, target: &'static str },

    #[error("Invalid comment separator: {0:?}")]
    InvalidSeparator(char),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl IniError {
    pub(crate) fn io(path: &str, source: io::Error) -> Self {
        IniError::Io {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn conversion<T>(value: &str) -> Self {
        IniError::Conversion {
            value: value.to_string(),
            target: std::any::type_name::<T>(),
        }
    }
}
