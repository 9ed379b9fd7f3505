//! Capability string grammar driver.
//!
//! Overview
//! - The input must be a single parenthesized group of at least 21 bytes,
//!   the size of `(prot()type()model())`.
//! - Inside it the driver reads top-level tokens. A token followed by `(`
//!   names a tag; the matching reader in `tags` consumes the balanced group
//!   and hands the cursor back. Unknown tags are skipped without looking at
//!   their contents.
//! - `prot`, `type` and `model` must all be read before any other tag, and no
//!   known tag may repeat.
//!
//! Borrowing
//! - Scanning never copies. Text tags are decoded into `Cow<'src, str>` that
//!   borrow the input unless they contain `\xHH` escapes, and stay that way in
//!   the `CapabilitiesBuilder` until the whole string has been accepted.
//!   Owned strings are only created while assembling the result.
//!
//! Limitations
//! - VCP codes and values are single bytes. MCCS allows two-byte codes
//!   through reserved code pages; those are not recognized.
//! - MCCS requires the identification tags to appear within the first 64
//!   bytes. Only their relative order is checked.

mod builder;
mod escape;
mod scanner;
mod tags;


use core::fmt;

use bstr::ByteSlice;

use self::{
    builder::CapabilitiesBuilder,
    scanner::{CLOSE, OPEN, Scanner},
};
use crate::{
    MccsMetadata, ParseError, ParseErrorKind, ParsedCapabilities, ParserOptions, StructuralError,
    VcpMetadata,
};

/// The shortest acceptable input: `(prot()type()model())`.
const MIN_LEN: usize = 21;

/// A tag understood by the parser.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Prot,
    Type,
    Model,
    Cmds,
    Vcp,
    VcpName,
    MccsVer,
}

impl Tag {
    /// Match order used for dispatch.
    const KNOWN: [Tag; 7] = [
        Tag::Prot,
        Tag::Type,
        Tag::Model,
        Tag::Cmds,
        Tag::Vcp,
        Tag::VcpName,
        Tag::MccsVer,
    ];

    /// The tag name as written in capability strings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Prot => "prot",
            Tag::Type => "type",
            Tag::Model => "model",
            Tag::Cmds => "cmds",
            Tag::Vcp => "vcp",
            Tag::VcpName => "vcpname",
            Tag::MccsVer => "mccs_ver",
        }
    }

    /// Tags that must precede every other tag.
    #[must_use]
    pub const fn is_identification(self) -> bool {
        matches!(self, Tag::Prot | Tag::Type | Tag::Model)
    }

    /// ASCII case-insensitive lookup of a tag name.
    pub(crate) fn from_token(token: &[u8]) -> Option<Tag> {
        Self::KNOWN
            .into_iter()
            .find(|tag| token.eq_ignore_ascii_case(tag.name().as_bytes()))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses capability strings with a fixed configuration.
///
/// The parser holds no per-call state, so one instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct CapabilitiesParser<M = MccsMetadata> {
    options: ParserOptions,
    metadata: M,
}

impl CapabilitiesParser {
    /// Creates a parser that names VCP codes from the MCCS table.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self::with_metadata(options, MccsMetadata)
    }
}

impl<M: VcpMetadata> CapabilitiesParser<M> {
    /// Creates a parser that takes default VCP names and categories from
    /// `metadata`.
    #[must_use]
    pub fn with_metadata(options: ParserOptions, metadata: M) -> Self {
        Self { options, metadata }
    }

    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses a complete capability string.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first grammar violation. No
    /// partial result is produced.
    pub fn parse(&self, input: &[u8]) -> Result<ParsedCapabilities, ParseError> {
        let result = self.parse_complete(input);
        if let Err(err) = &result {
            tracing::debug!(
                offset = err.offset(),
                len = input.len(),
                "rejected capability string: {}",
                err.kind()
            );
        }
        result
    }

    fn parse_complete(&self, input: &[u8]) -> Result<ParsedCapabilities, ParseError> {
        if input.len() < MIN_LEN {
            return Err(ParseError::new(StructuralError::TooShort(input.len()), 0));
        }
        if input.first() != Some(&OPEN) || input.last() != Some(&CLOSE) {
            return Err(ParseError::new(StructuralError::MissingOuterParentheses, 0));
        }

        let mut scanner = Scanner::new(input, 1, input.len() - 1);
        let mut builder = CapabilitiesBuilder::default();
        self.read_top_level(&mut scanner, &mut builder)?;
        builder.finish(&self.metadata, scanner.offset())
    }

    fn read_top_level<'src>(
        &self,
        scanner: &mut Scanner<'src>,
        builder: &mut CapabilitiesBuilder<'src>,
    ) -> Result<(), ParseError> {
        loop {
            scanner.skip_whitespace();
            let start = scanner.offset();
            let token = scanner.consume_token();

            if token.is_empty() {
                if scanner.is_at_end() {
                    return Ok(());
                }
                let byte = scanner.peek().unwrap_or_default();
                return Err(ParseError::new(StructuralError::UnexpectedByte(byte), start));
            }

            if !scanner.try_consume(OPEN) {
                if self.options.allow_bare_strings {
                    continue;
                }
                return Err(ParseError::new(StructuralError::BareString, start));
            }

            let tag = Tag::from_token(token);
            if !tag.is_some_and(Tag::is_identification) && !builder.has_identification() {
                let name = token.to_str_lossy().into_owned();
                return Err(ParseError::new(ParseErrorKind::OutOfOrder(name), start));
            }

            match tag {
                Some(tag) => {
                    if builder.is_set(tag) {
                        return Err(ParseError::new(ParseErrorKind::DuplicateTag(tag), start));
                    }
                    match tag {
                        Tag::Prot | Tag::Type | Tag::Model | Tag::MccsVer => {
                            let text = tags::read_text(scanner)?;
                            builder.set_text(tag, text);
                        }
                        Tag::Cmds => builder.commands = Some(tags::read_cmds(scanner)?),
                        Tag::Vcp => builder.vcp = Some(tags::read_vcp(scanner)?),
                        Tag::VcpName => builder.vcp_names = Some(tags::read_vcpname(scanner)?),
                    }
                }
                None => {
                    tracing::trace!(tag = %token.as_bstr(), offset = start, "skipping unknown tag");
                    tags::skip_unknown_tag(scanner, 1, self.options.max_nesting_depth)?;
                }
            }
        }
    }
}

/// Parses a capability string with the default options.
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not a well-formed capability string.
///
/// # Examples
///
/// ```
/// use mccs_caps::{DdcCiCommand, parse_capabilities};
///
/// let caps = parse_capabilities(b"(prot(monitor)type(LCD)model(X)cmds(01 02 03 07 0C E3 F3))")
///     .unwrap();
/// assert_eq!(caps.supported_commands()[6], DdcCiCommand::CapabilitiesRequest);
///
/// assert!(parse_capabilities(b"(prot(monitor)type(LCD))").is_err());
/// ```
pub fn parse_capabilities(input: &[u8]) -> Result<ParsedCapabilities, ParseError> {
    CapabilitiesParser::new(ParserOptions::default()).parse(input)
}
