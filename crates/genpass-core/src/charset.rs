//! Character classes and their canonical order.
//!
//! The order in which classes are declared here is load-bearing: the repair
//! loop walks required and forbidden classes in this order, and changing it
//! changes every derived password that needs repair. [`CharClass::ALL`] and
//! the derived `Ord` both follow it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenpassError;

/// Members of the digit class.
pub const DIGITS: &str = "0123456789";

/// Members of the special class.
pub const SPECIALS: &str = "@#*(){}+=/?~;,.-_";

/// Members of the upper-case class.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Members of the lower-case class.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// A named, fixed set of single ASCII characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Digit,
    Special,
    Upper,
    Lower,
}

impl CharClass {
    /// Every class, in canonical order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Digit,
        CharClass::Special,
        CharClass::Upper,
        CharClass::Lower,
    ];

    /// Identifier folded into selection salts and used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Digit => "digit",
            Self::Special => "special",
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }

    /// Members of this class as ASCII bytes, in their fixed order.
    pub fn members(self) -> &'static [u8] {
        match self {
            Self::Digit => DIGITS.as_bytes(),
            Self::Special => SPECIALS.as_bytes(),
            Self::Upper => UPPERCASE.as_bytes(),
            Self::Lower => LOWERCASE.as_bytes(),
        }
    }

    /// Whether `c` belongs to this class.
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.members().contains(&(c as u8))
    }

    /// Whether any character of `s` belongs to this class.
    pub fn appears_in(self, s: &str) -> bool {
        s.chars().any(|c| self.contains(c))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharClass {
    type Err = GenpassError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "digit" | "digits" => Ok(Self::Digit),
            "special" | "specials" | "symbol" | "symbols" => Ok(Self::Special),
            "upper" | "uppercase" => Ok(Self::Upper),
            "lower" | "lowercase" => Ok(Self::Lower),
            other => Err(GenpassError::InvalidInput(format!(
                "Unknown character class: {} (use digit, special, upper or lower)",
                other
            ))),
        }
    }
}
