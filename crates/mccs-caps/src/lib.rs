//! A zero-copy parser for DDC/CI monitor capability strings.
//!
//! Monitors describe themselves to the host with an MCCS capability string
//! such as
//!
//! ```text
//! (prot(monitor)type(LCD)model(VP2785 series)cmds(01 02 03 07 0C E3 F3)vcp(02 04 10 12 60(0F 11 12))mccs_ver(2.2))
//! ```
//!
//! [`parse_capabilities`] turns such a byte string into an immutable
//! [`ParsedCapabilities`]. Vendor strings are frequently malformed, so every
//! failure is reported as an ordinary [`ParseError`] value.
//!
//! ```rust
//! use mccs_caps::{DdcCiCommand, VcpCategory, parse_capabilities};
//!
//! let caps = parse_capabilities(
//!     b"(prot(monitor)type(LCD)model(X)cmds(01 02 03)vcp(10 60(0F 11)))",
//! )
//! .unwrap();
//!
//! assert_eq!(caps.model(), "X");
//! assert!(caps.supports_command(DdcCiCommand::VcpSet));
//!
//! let input = caps.vcp(0x60).unwrap();
//! assert_eq!(input.name(), "Input Select");
//! assert_eq!(input.category(), VcpCategory::Miscellaneous);
//! assert_eq!(input.values().len(), 2);
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "fuzzing"))]
extern crate std;

mod capabilities;
mod command;
mod error;
mod options;
mod parser;
pub mod vcp;

#[cfg(test)]
mod tests;

pub use capabilities::{
    InvalidMccsVersion, MccsVersion, ParsedCapabilities, ValueDefinition, VcpCommandDefinition,
};
pub use command::DdcCiCommand;
pub use error::{EncodingError, ParseError, ParseErrorKind, StructuralError};
pub use options::ParserOptions;
pub use parser::{CapabilitiesParser, Tag, parse_capabilities};
pub use vcp::{MccsMetadata, VcpCategory, VcpCode, VcpMetadata};
