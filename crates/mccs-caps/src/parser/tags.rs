//! One reader per tag.
//!
//! Each reader is entered with the scanner just past the tag's `(` and
//! returns with it just past the matching `)`. Any violation aborts the
//! whole parse.

use alloc::{borrow::Cow, collections::BTreeMap, vec::Vec};

use super::{
    escape::{decode_hex_bytes, decode_text, parse_hex_byte},
    scanner::{CLOSE, OPEN, PARENTHESES, Scanner},
};
use crate::{DdcCiCommand, EncodingError, ParseError, ParseErrorKind, StructuralError};

/// A code from the `vcp` tag and the non-continuous values listed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct VcpEntry {
    pub code: u8,
    pub values: Vec<u8>,
}

/// An entry of the `vcpname` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct VcpNameEntry<'src> {
    pub name: Cow<'src, str>,
    pub value_names: Vec<Cow<'src, str>>,
    /// Where the entry starts, for consistency errors found during assembly.
    pub offset: usize,
}

fn unexpected(scanner: &Scanner<'_>) -> ParseError {
    let kind = match scanner.peek() {
        Some(byte) => StructuralError::UnexpectedByte(byte),
        None => StructuralError::UnexpectedEnd,
    };
    ParseError::new(kind, scanner.offset())
}

fn expect_close(scanner: &mut Scanner<'_>) -> Result<(), ParseError> {
    if scanner.try_consume(CLOSE) {
        Ok(())
    } else {
        Err(unexpected(scanner))
    }
}

/// Next whitespace-delimited token and its offset; empty at `(`, `)` or the
/// end of input.
fn next_token<'src>(scanner: &mut Scanner<'src>) -> (usize, &'src [u8]) {
    scanner.skip_whitespace();
    (scanner.offset(), scanner.consume_token())
}

/// Hex tokens up to and including the closing `)`.
fn read_hex_list<T: From<u8>>(
    scanner: &mut Scanner<'_>,
    out: &mut Vec<T>,
) -> Result<(), ParseError> {
    scanner.skip_whitespace();
    read_hex_tokens(scanner, out)
}

/// Like [`read_hex_list`], but the first token must start right at the
/// scanner. Whitespace is only allowed after a token.
fn read_hex_tokens<T: From<u8>>(
    scanner: &mut Scanner<'_>,
    out: &mut Vec<T>,
) -> Result<(), ParseError> {
    loop {
        let start = scanner.offset();
        let token = scanner.consume_token();
        if token.is_empty() {
            break;
        }
        decode_hex_bytes(token, out).map_err(|err| ParseError::new(err, start))?;
        scanner.skip_whitespace();
    }
    expect_close(scanner)
}

/// `prot`, `type`, `model` and `mccs_ver`: everything up to the next
/// parenthesis is one string.
pub(super) fn read_text<'src>(scanner: &mut Scanner<'src>) -> Result<Cow<'src, str>, ParseError> {
    let start = scanner.offset();
    let text = decode_text(scanner.consume_until_any(PARENTHESES))
        .map_err(|err| ParseError::new(err, start))?;
    expect_close(scanner)?;
    Ok(text)
}

pub(super) fn read_cmds(scanner: &mut Scanner<'_>) -> Result<Vec<DdcCiCommand>, ParseError> {
    let mut commands = Vec::new();
    read_hex_list(scanner, &mut commands)?;
    Ok(commands)
}

/// Spaces between codes are optional, so `0260(01 02)` declares `02` and
/// `60`, with the value list attached to `60`. A value list starts right
/// after its `(`: `60( 0F)` is rejected.
pub(super) fn read_vcp(scanner: &mut Scanner<'_>) -> Result<Vec<VcpEntry>, ParseError> {
    let mut entries = Vec::new();
    loop {
        let (start, token) = next_token(scanner);
        if token.is_empty() {
            break;
        }
        if token.len() % 2 != 0 {
            return Err(ParseError::new(EncodingError::OddLength(token.len()), start));
        }

        let last = token.len() / 2 - 1;
        for (i, pair) in token.chunks_exact(2).enumerate() {
            let code = parse_hex_byte(pair)
                .ok_or_else(|| ParseError::new(EncodingError::InvalidHexDigit, start + 2 * i))?;
            let mut values = Vec::new();
            if i == last && scanner.try_consume(OPEN) {
                read_hex_tokens(scanner, &mut values)?;
            }
            entries.push(VcpEntry { code, values });
        }
    }
    expect_close(scanner)?;
    Ok(entries)
}

/// Entries look like `14(Color Preset(sRGB Native))`, `F0(Custom)` or
/// `60((HDMI\x201 DP))`. At least one of the name and the value list must be
/// given.
pub(super) fn read_vcpname<'src>(
    scanner: &mut Scanner<'src>,
) -> Result<BTreeMap<u8, VcpNameEntry<'src>>, ParseError> {
    let mut entries = BTreeMap::new();
    loop {
        let (start, token) = next_token(scanner);
        if token.is_empty() {
            break;
        }
        let code = parse_hex_byte(token)
            .ok_or_else(|| ParseError::new(StructuralError::InvalidVcpNameCode, start))?;
        if !scanner.try_consume(OPEN) {
            return Err(unexpected(scanner));
        }

        let name_start = scanner.offset();
        let name = decode_text(scanner.consume_until_any(PARENTHESES))
            .map_err(|err| ParseError::new(err, name_start))?;

        let value_names = if scanner.try_consume(OPEN) {
            let mut value_names = Vec::new();
            loop {
                let (value_start, token) = next_token(scanner);
                if token.is_empty() {
                    break;
                }
                let value_name =
                    decode_text(token).map_err(|err| ParseError::new(err, value_start))?;
                value_names.push(value_name);
            }
            expect_close(scanner)?;
            value_names
        } else if name.is_empty() {
            return Err(ParseError::new(
                StructuralError::EmptyVcpNameEntry(code),
                start,
            ));
        } else {
            Vec::new()
        };
        expect_close(scanner)?;

        if entries.contains_key(&code) {
            return Err(ParseError::new(ParseErrorKind::DuplicateVcpName(code), start));
        }
        entries.insert(
            code,
            VcpNameEntry {
                name,
                value_names,
                offset: start,
            },
        );
    }
    expect_close(scanner)?;
    Ok(entries)
}

fn check_depth(
    scanner: &Scanner<'_>,
    depth: usize,
    max_depth: Option<usize>,
) -> Result<(), ParseError> {
    match max_depth {
        Some(max) if depth > max => Err(ParseError::new(
            ParseErrorKind::NestingTooDeep(max),
            scanner.offset(),
        )),
        _ => Ok(()),
    }
}

/// Skips a tag whose meaning is unknown, descending into nested groups.
///
/// `depth` is the nesting level of the group being skipped, starting at 1.
/// Nesting is tracked with a counter rather than the call stack, so deep
/// input cannot overflow it.
pub(super) fn skip_unknown_tag(
    scanner: &mut Scanner<'_>,
    depth: usize,
    max_depth: Option<usize>,
) -> Result<(), ParseError> {
    check_depth(scanner, depth, max_depth)?;
    let mut current = depth;
    loop {
        let (_, token) = next_token(scanner);
        if token.is_empty() {
            expect_close(scanner)?;
            if current == depth {
                return Ok(());
            }
            current -= 1;
        } else if scanner.try_consume(OPEN) {
            current += 1;
            check_depth(scanner, current, max_depth)?;
        }
    }
}
