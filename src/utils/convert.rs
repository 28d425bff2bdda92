//! Conversion between typed values and their INI string form

use crate::constants::defaults::{STRING_FALSE, STRING_TRUE};
use crate::error::IniError;

/// A value that can be stored in an INI document
///
/// Values are always kept as text inside the document; implementors define how
/// they are written and how they are read back.
pub trait IniValue: Sized {
    fn to_ini_string(&self) -> String;

    fn from_ini_str(s: &str) -> Result<Self, IniError>;
}

impl IniValue for String {
    fn to_ini_string(&self) -> String {
        self.clone()
    }

    fn from_ini_str(s: &str) -> Result<Self, IniError> {
        Ok(s.to_string())
    }
}

impl IniValue for bool {
    fn to_ini_string(&self) -> String {
        let text = if *self { STRING_TRUE } else { STRING_FALSE };
        text.to_string()
    }

    /// Accepts `true`/`false` in any case as well as `1`/`0`
    fn from_ini_str(s: &str) -> Result<Self, IniError> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(STRING_TRUE) || trimmed == "1" {
            Ok(true)
        } else if trimmed.eq_ignore_ascii_case(STRING_FALSE) || trimmed == "0" {
            Ok(false)
        } else {
            Err(IniError::conversion::<bool>(s))
        }
    }
}

impl IniValue for char {
    fn to_ini_string(&self) -> String {
        self.to_string()
    }

    /// Takes the single character of the text, or of the trimmed text so
    /// that a value followed by spaces before a comment still converts
    fn from_ini_str(s: &str) -> Result<Self, IniError> {
        single_char(s)
            .or_else(|| single_char(s.trim()))
            .ok_or_else(|| IniError::conversion::<char>(s))
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

macro_rules! impl_ini_value_from_str {
    ($($t:ty),* $(,)?) => {
        $(
            impl IniValue for $t {
                fn to_ini_string(&self) -> String {
                    self.to_string()
                }

                fn from_ini_str(s: &str) -> Result<Self, IniError> {
                    s.trim()
                        .parse::<$t>()
                        .map_err(|_| IniError::conversion::<$t>(s))
                }
            }
        )*
    };
}

impl_ini_value_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);
