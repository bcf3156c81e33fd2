//! End-of-line kinds and the byte constants they are built from.
//!
//! The CLI accepts three keywords (`lf`, `crlf`, `cr`) both as a conversion
//! target and as a concatenation delimiter / terminator. [`EolKind::parse`]
//! is the single place where those keywords are recognised.

use std::fmt;
use std::str::FromStr;

use crate::error::KefkaError;

/// Carriage return (0x0D).
pub const CARRIAGE_RETURN: u8 = 0x0D;
/// Line feed (0x0A).
pub const LINE_FEED: u8 = 0x0A;

pub const EOL_TYPE_LF: &str = "lf";
pub const EOL_TYPE_CRLF: &str = "crlf";
pub const EOL_TYPE_CR: &str = "cr";

/// A line-ending byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EolKind {
    /// `\n`, the canonical target.
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
    /// `\r`
    Cr,
}

impl EolKind {
    /// The exact bytes written for this line ending.
    #[inline]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            EolKind::Lf => &[LINE_FEED],
            EolKind::Crlf => &[CARRIAGE_RETURN, LINE_FEED],
            EolKind::Cr => &[CARRIAGE_RETURN],
        }
    }

    /// Keyword used on the command line.
    pub const fn keyword(self) -> &'static str {
        match self {
            EolKind::Lf => EOL_TYPE_LF,
            EolKind::Crlf => EOL_TYPE_CRLF,
            EolKind::Cr => EOL_TYPE_CR,
        }
    }

    /// Parse a keyword. `param` names the option being parsed and only
    /// feeds the error message.
    ///
    /// A blank value is a [`KefkaError::MissingParameter`]; anything other
    /// than `lf`, `crlf` or `cr` is a [`KefkaError::InvalidParameterValue`].
    /// Matching is case-sensitive; the CLI lowercases the mode selector
    /// before it gets here.
    pub fn parse(param: &str, value: &str) -> Result<Self, KefkaError> {
        if value.trim().is_empty() {
            return Err(KefkaError::MissingParameter(format!("{param} value")));
        }
        match value {
            EOL_TYPE_LF => Ok(EolKind::Lf),
            EOL_TYPE_CRLF => Ok(EolKind::Crlf),
            EOL_TYPE_CR => Ok(EolKind::Cr),
            other => Err(KefkaError::InvalidParameterValue {
                param: param.to_owned(),
                value: other.to_owned(),
            }),
        }
    }
}

impl FromStr for EolKind {
    type Err = KefkaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EolKind::parse("eol", s)
    }
}

impl fmt::Display for EolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
