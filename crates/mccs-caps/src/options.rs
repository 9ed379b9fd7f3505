/// Configuration options for the capability string parser.
///
/// The defaults implement the strict grammar: every top-level string must be
/// a tag, and unknown tags may nest arbitrarily deep.
///
/// # Examples
///
/// ```rust
/// use mccs_caps::{CapabilitiesParser, ParserOptions};
///
/// let parser = CapabilitiesParser::new(ParserOptions {
///     allow_bare_strings: true,
///     ..Default::default()
/// });
/// let caps = parser
///     .parse(b"(prot(monitor)type(lcd)model(X) stray mccs_ver(2.1))")
///     .unwrap();
/// assert_eq!(caps.mccs_version(), Some("2.1"));
/// ```
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether to ignore top-level strings that are not followed by `(`.
    ///
    /// Some firmwares emit stray words between tags. When `false`, such a
    /// string rejects the whole capability string.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_bare_strings: bool,

    /// Maximum nesting depth accepted inside unknown tags.
    ///
    /// An unknown tag itself is depth 1. `None` places no limit on the depth
    /// other than the length of the input.
    ///
    /// # Default
    ///
    /// `None`
    pub max_nesting_depth: Option<usize>,
}
