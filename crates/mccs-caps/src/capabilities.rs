//! Parsed monitor capabilities.
//!
//! These types own all of their data; nothing borrows from the input bytes
//! once [`parse_capabilities`](crate::parse_capabilities) returns.
use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use crate::{DdcCiCommand, ParseError, VcpCategory, parse_capabilities};

/// Everything a monitor declared in its capability string.
///
/// # Examples
///
/// ```
/// use mccs_caps::ParsedCapabilities;
///
/// let caps: ParsedCapabilities = "(prot(monitor)type(LCD)model(VP2785 series)mccs_ver(2.2))"
///     .parse()
///     .unwrap();
/// assert_eq!(caps.protocol(), "monitor");
/// assert_eq!(caps.mccs_version_number().unwrap().major, 2);
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParsedCapabilities {
    pub(crate) protocol: String,
    pub(crate) monitor_type: String,
    pub(crate) model: String,
    pub(crate) mccs_version: Option<String>,
    pub(crate) supported_commands: Vec<DdcCiCommand>,
    pub(crate) supported_vcp: Vec<VcpCommandDefinition>,
}

impl ParsedCapabilities {
    /// Contents of the `prot` tag, usually `monitor`.
    #[must_use]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Contents of the `type` tag, e.g. `LCD`.
    #[must_use]
    pub fn monitor_type(&self) -> &str {
        &self.monitor_type
    }

    /// Contents of the `model` tag.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Contents of the `mccs_ver` tag, if present.
    #[must_use]
    pub fn mccs_version(&self) -> Option<&str> {
        self.mccs_version.as_deref()
    }

    /// The `mccs_ver` tag interpreted as a version number.
    #[must_use]
    pub fn mccs_version_number(&self) -> Option<MccsVersion> {
        self.mccs_version.as_deref()?.parse().ok()
    }

    /// Commands from the `cmds` tag, in advertised order, duplicates included.
    #[must_use]
    pub fn supported_commands(&self) -> &[DdcCiCommand] {
        &self.supported_commands
    }

    /// VCP codes from the `vcp` tag, in advertised order.
    #[must_use]
    pub fn supported_vcp(&self) -> &[VcpCommandDefinition] {
        &self.supported_vcp
    }

    /// The first definition advertised for `code`.
    #[must_use]
    pub fn vcp(&self, code: u8) -> Option<&VcpCommandDefinition> {
        self.supported_vcp.iter().find(|def| def.code == code)
    }

    #[must_use]
    pub fn supports_vcp(&self, code: u8) -> bool {
        self.vcp(code).is_some()
    }

    #[must_use]
    pub fn supports_command(&self, command: DdcCiCommand) -> bool {
        self.supported_commands.contains(&command)
    }
}

impl FromStr for ParsedCapabilities {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_capabilities(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for ParsedCapabilities {
    type Error = ParseError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        parse_capabilities(bytes)
    }
}

/// One supported VCP code.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VcpCommandDefinition {
    pub(crate) code: u8,
    pub(crate) category: VcpCategory,
    pub(crate) name: String,
    pub(crate) values: Vec<ValueDefinition>,
}

impl VcpCommandDefinition {
    #[must_use]
    pub fn code(&self) -> u8 {
        self.code
    }

    #[must_use]
    pub fn category(&self) -> VcpCategory {
        self.category
    }

    /// Display name: the `vcpname` override when one was given, otherwise the
    /// MCCS default. Empty for codes with neither.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Non-continuous values, in the order the monitor listed them. Empty for
    /// continuous controls.
    #[must_use]
    pub fn values(&self) -> &[ValueDefinition] {
        &self.values
    }

    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.values.is_empty()
    }
}

/// A non-continuous value of a VCP code.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValueDefinition {
    pub(crate) value: u8,
    pub(crate) name: Option<String>,
}

impl ValueDefinition {
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Name from the `vcpname` tag, if the monitor supplied one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// MCCS version number from the `mccs_ver` tag.
///
/// Parsing accepts `major.minor` followed by an optional non-digit suffix,
/// so `2.2a` reads as 2.2.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MccsVersion {
    pub major: u8,
    pub minor: u8,
}

impl MccsVersion {
    #[must_use]
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for MccsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Error from parsing an [`MccsVersion`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid MCCS version")]
pub struct InvalidMccsVersion;

impl FromStr for MccsVersion {
    type Err = InvalidMccsVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, rest) = s.trim().split_once('.').ok_or(InvalidMccsVersion)?;
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let major = major.parse().map_err(|_| InvalidMccsVersion)?;
        let minor = rest[..digits].parse().map_err(|_| InvalidMccsVersion)?;
        Ok(Self { major, minor })
    }
}
