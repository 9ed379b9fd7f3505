use alloc::string::String;

use thiserror::Error;

use crate::parser::Tag;

/// Error returned when a capability string is rejected.
///
/// The `offset` is the byte position in the input at which the
/// violation was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    pub(crate) kind: ParseErrorKind,
    pub(crate) offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: impl Into<ParseErrorKind>, offset: usize) -> Self {
        Self {
            kind: kind.into(),
            offset,
        }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Byte offset into the input at which the error was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// The category of a [`ParseError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("structural error: {0}")]
    Structural(#[from] StructuralError),
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
    /// A tag other than `prot`, `type` or `model` appeared before all three
    /// had been read. Holds the offending tag name.
    #[error("tag `{0}` appears before prot, type and model")]
    OutOfOrder(String),
    #[error("duplicate `{0}` tag")]
    DuplicateTag(Tag),
    #[error("duplicate vcpname entry for VCP code {0:#04X}")]
    DuplicateVcpName(u8),
    #[error(
        "vcpname gives {names} value names for VCP code {code:#04X}, but vcp declares {values} values"
    )]
    ValueNameMismatch { code: u8, names: usize, values: usize },
    #[error("unknown tags nested deeper than {0} levels")]
    NestingTooDeep(usize),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralError {
    #[error("capability string is {0} bytes long, the minimum is 21")]
    TooShort(usize),
    #[error("capability string is not enclosed in parentheses")]
    MissingOuterParentheses,
    #[error("unexpected byte {0:#04X}")]
    UnexpectedByte(u8),
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("string outside of a tag")]
    BareString,
    #[error("missing `{0}` tag")]
    MissingTag(Tag),
    #[error("vcpname entry for VCP code {0:#04X} has neither a name nor value names")]
    EmptyVcpNameEntry(u8),
    #[error("vcpname entry does not start with a two digit VCP code")]
    InvalidVcpNameCode,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    #[error("hex string has odd length {0}")]
    OddLength(usize),
    #[error("invalid hexadecimal digit")]
    InvalidHexDigit,
    #[error("malformed \\xHH escape sequence")]
    MalformedEscape,
}
