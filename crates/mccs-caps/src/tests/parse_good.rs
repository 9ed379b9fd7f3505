use alloc::{vec, vec::Vec};

use rstest::rstest;

use super::VP2785;
use crate::{
    CapabilitiesParser, DdcCiCommand, MccsVersion, ParsedCapabilities, ParserOptions, VcpCategory,
    VcpMetadata, parse_capabilities,
};

fn parse(input: &str) -> ParsedCapabilities {
    parse_capabilities(input.as_bytes()).unwrap()
}

fn codes(caps: &ParsedCapabilities) -> Vec<u8> {
    caps.supported_vcp().iter().map(|def| def.code()).collect()
}

fn names(caps: &ParsedCapabilities) -> Vec<&str> {
    caps.supported_vcp().iter().map(|def| def.name()).collect()
}

fn values(caps: &ParsedCapabilities, code: u8) -> Vec<(u8, Option<&str>)> {
    caps.vcp(code)
        .unwrap()
        .values()
        .iter()
        .map(|value| (value.value(), value.name()))
        .collect()
}

#[test]
fn vp2785() {
    let caps = parse_capabilities(VP2785).unwrap();

    assert_eq!(caps.protocol(), "monitor");
    assert_eq!(caps.monitor_type(), "LCD");
    assert_eq!(caps.model(), "VP2785 series");
    assert_eq!(caps.mccs_version(), Some("2.2"));
    assert_eq!(caps.mccs_version_number(), Some(MccsVersion::new(2, 2)));
    assert_eq!(caps.supported_commands().len(), 7);
    assert_eq!(caps.supported_vcp().len(), 77);

    let preset = caps.vcp(0x14).unwrap();
    assert_eq!(preset.name(), "Select Color Preset");
    assert_eq!(preset.category(), VcpCategory::Image);
    assert_eq!(preset.values().len(), 17);
    assert!(preset.values().iter().all(|value| value.name().is_none()));

    let brightness = caps.vcp(0x10).unwrap();
    assert_eq!(brightness.name(), "Luminance");
    assert!(brightness.is_continuous());

    let input = caps.vcp(0x60).unwrap();
    assert_eq!(
        input.values().iter().map(|v| v.value()).collect::<Vec<_>>(),
        vec![0x15, 0x0F, 0x11, 0x12, 0x17]
    );

    let vendor = caps.vcp(0xF3).unwrap();
    assert_eq!(vendor.name(), "Manufacturer Specific");
    assert_eq!(vendor.category(), VcpCategory::ManufacturerSpecific);
    assert_eq!(vendor.values().len(), 4);

    assert_eq!(codes(&caps).first(), Some(&0x02));
    assert_eq!(codes(&caps).last(), Some(&0xF3));
}

#[test]
fn minimal_string() {
    let caps = parse("(prot()type()model())");
    assert_eq!(caps.protocol(), "");
    assert_eq!(caps.monitor_type(), "");
    assert_eq!(caps.model(), "");
    assert_eq!(caps.mccs_version(), None);
    assert!(caps.supported_commands().is_empty());
    assert!(caps.supported_vcp().is_empty());
}

#[rstest]
#[case(
    "(prot(monitor)type(lcd)model(Monitor Name)mccs_ver(2.2a))",
    "monitor",
    "lcd",
    "Monitor Name"
)]
#[case(
    "(prot(monitor)type(LCD)model(Monitor Name)mccs_ver(2.2a))",
    "monitor",
    "LCD",
    "Monitor Name"
)]
#[case(
    "(prot(monitor)type(lcd)model(SuperScreen 1000K)mccs_ver(2.2a))",
    "monitor",
    "lcd",
    "SuperScreen 1000K"
)]
#[case("(model(Z)type(OLED)prot(display))", "display", "OLED", "Z")]
#[case("(PROT(monitor)Type(LCD)MODEL(X)MCCS_VER(3.0))", "monitor", "LCD", "X")]
fn identification(
    #[case] input: &str,
    #[case] protocol: &str,
    #[case] monitor_type: &str,
    #[case] model: &str,
) {
    let caps = parse(input);
    assert_eq!(caps.protocol(), protocol);
    assert_eq!(caps.monitor_type(), monitor_type);
    assert_eq!(caps.model(), model);
}

#[rstest]
#[case(
    "(prot(monitor)type(lcd)model(Monitor Name)mccs_ver(2.2))",
    "2.2",
    Some(MccsVersion::new(2, 2))
)]
#[case(
    "(prot(monitor)type(lcd)model(Monitor Name)mccs_ver(2.2a))",
    "2.2a",
    Some(MccsVersion::new(2, 2))
)]
#[case("(prot(monitor)type(lcd)model(Monitor Name)mccs_ver(unknown))", "unknown", None)]
fn mccs_version(#[case] input: &str, #[case] text: &str, #[case] number: Option<MccsVersion>) {
    let caps = parse(input);
    assert_eq!(caps.mccs_version(), Some(text));
    assert_eq!(caps.mccs_version_number(), number);
}

#[rstest]
#[case("cmds(01 02 03 07 0C E3 F3)", &[0x01, 0x02, 0x03, 0x07, 0x0C, 0xE3, 0xF3])]
#[case("cmds(010203070CE3F3)", &[0x01, 0x02, 0x03, 0x07, 0x0C, 0xE3, 0xF3])]
#[case("cmds(0102030CE3F3)", &[0x01, 0x02, 0x03, 0x0C, 0xE3, 0xF3])]
#[case("cmds(01 02 03 06 07 0C E3 F3)", &[0x01, 0x02, 0x03, 0x06, 0x07, 0x0C, 0xE3, 0xF3])]
#[case("cmds()", &[])]
fn commands(#[case] tag: &str, #[case] expected: &[u8]) {
    let input = alloc::format!("(prot(monitor)type(lcd)model(Monitor Name){tag}mccs_ver(2.2))");
    let caps = parse(&input);
    let commands: Vec<u8> = caps.supported_commands().iter().map(|c| c.code()).collect();
    assert_eq!(commands, expected);
}

#[test]
fn commands_are_typed() {
    let caps = parse("(prot(monitor)type(lcd)model(Monitor Name)cmds(01 02 03 07 0C E3 F3 AB))");
    assert_eq!(
        caps.supported_commands(),
        &[
            DdcCiCommand::VcpRequest,
            DdcCiCommand::VcpReply,
            DdcCiCommand::VcpSet,
            DdcCiCommand::TimingRequest,
            DdcCiCommand::SaveCurrentSettings,
            DdcCiCommand::CapabilitiesReply,
            DdcCiCommand::CapabilitiesRequest,
            DdcCiCommand::Unknown(0xAB),
        ]
    );
    assert!(caps.supports_command(DdcCiCommand::SaveCurrentSettings));
    assert!(!caps.supports_command(DdcCiCommand::TableWrite));
}

#[test]
fn packed_vcp_codes() {
    let caps = parse("(prot(monitor)type(lcd)model(Monitor Name)vcp(000102030405)mccs_ver(2.2))");
    assert_eq!(codes(&caps), vec![0x00, 0x01, 0x02, 0x03, 0x04, 0x05]);
    assert!(caps.supported_vcp().iter().all(|def| def.is_continuous()));
}

#[rstest]
#[case("vcp(14(010203))", 0x14, &[0x01, 0x02, 0x03])]
#[case("vcp(14(01 02 03))", 0x14, &[0x01, 0x02, 0x03])]
#[case("vcp(0260(01 02 03))", 0x60, &[0x01, 0x02, 0x03])]
#[case("vcp(0260(01 02 03))", 0x02, &[])]
#[case("vcp(60(0F 10))", 0x60, &[0x0F, 0x10])]
#[case("vcp(60(0F 10 ))", 0x60, &[0x0F, 0x10])]
fn non_continuous_values(#[case] tag: &str, #[case] code: u8, #[case] expected: &[u8]) {
    let input = alloc::format!("(prot(monitor)type(lcd)model(Monitor Name){tag}mccs_ver(2.2))");
    let caps = parse(&input);
    let found: Vec<u8> = values(&caps, code).into_iter().map(|(v, _)| v).collect();
    assert_eq!(found, expected);
}

#[test]
fn default_vcp_names() {
    let caps = parse("(prot(monitor)type(LCD)model(X)vcp(10 12 60 07 E0))");
    assert_eq!(
        names(&caps),
        vec!["Luminance", "Contrast", "Input Select", "", "Manufacturer Specific"]
    );
    assert_eq!(caps.vcp(0x07).unwrap().category(), VcpCategory::Unknown);
}

#[test]
fn vcpname_overrides_names() {
    let caps = parse(r"(prot(monitor)type(lcd)model(Monitor Name)vcp(FEFF)vcpname(FE(Custom\x201)FF(Custom\x202))mccs_ver(2.2))");
    assert_eq!(names(&caps), vec!["Custom 1", "Custom 2"]);
    assert_eq!(
        caps.vcp(0xFE).unwrap().category(),
        VcpCategory::ManufacturerSpecific
    );
}

#[test]
fn vcpname_mixed_forms() {
    let caps = parse(r"(prot(monitor)type(lcd)model(Monitor Name)vcp(60(0F10)F0(44AFCDEE)F5)vcpname(60((Input\x201 Input\x202))F0(Custom\x201(With Custom Parameter Values))F5(Function\x205))mccs_ver(2.2))");
    assert_eq!(names(&caps), vec!["Input Select", "Custom 1", "Function 5"]);
    assert_eq!(
        values(&caps, 0x60),
        vec![(0x0F, Some("Input 1")), (0x10, Some("Input 2"))]
    );
    assert_eq!(
        values(&caps, 0xF0),
        vec![
            (0x44, Some("With")),
            (0xAF, Some("Custom")),
            (0xCD, Some("Parameter")),
            (0xEE, Some("Values")),
        ]
    );
    assert!(caps.vcp(0xF5).unwrap().values().is_empty());
}

#[test]
fn vcpname_value_names() {
    let caps = parse("(prot(monitor)type(lcd)model(Monitor Name)vcp(F3(0102))vcpname(F3(Custom(On Off)))mccs_ver(2.2))");
    assert_eq!(caps.vcp(0xF3).unwrap().name(), "Custom");
    assert_eq!(values(&caps, 0xF3), vec![(0x01, Some("On")), (0x02, Some("Off"))]);
}

#[test]
fn vcpname_brightness() {
    let caps = parse("(prot(monitor)type(LCD)model(X)vcp(10(01 02))vcpname(10(Brightness(Low High))))");
    let def = caps.vcp(0x10).unwrap();
    assert_eq!(def.name(), "Brightness");
    assert_eq!(def.category(), VcpCategory::Image);
    assert_eq!(values(&caps, 0x10), vec![(0x01, Some("Low")), (0x02, Some("High"))]);
}

#[test]
fn vcpname_may_precede_vcp() {
    let caps = parse("(prot(monitor)type(LCD)model(X)vcpname(10(Brightness))vcp(10 12))");
    assert_eq!(names(&caps), vec!["Brightness", "Contrast"]);
}

#[test]
fn vcpname_for_missing_code_is_ignored() {
    let caps = parse("(prot(monitor)type(LCD)model(X)vcp(10)vcpname(12(Sharpness)))");
    assert_eq!(names(&caps), vec!["Luminance"]);
    assert!(!caps.supports_vcp(0x12));
}

#[test]
fn repeated_vcp_code_shares_override() {
    let caps = parse("(prot(monitor)type(LCD)model(X)vcp(10 12 10)vcpname(10(Brightness)))");
    assert_eq!(names(&caps), vec!["Brightness", "Contrast", "Brightness"]);
    assert_eq!(codes(&caps), vec![0x10, 0x12, 0x10]);
}

#[test]
fn escaped_text() {
    let caps = parse(r"(prot(monitor)type(LCD)model(\x41\x42)mccs_ver(2.1))");
    assert_eq!(caps.model(), "AB");

    let caps = parse(r"(prot(monitor)type(LCD)model(Monitor\x28X\x29))");
    assert_eq!(caps.model(), "Monitor(X)");
}

#[rstest]
#[case("(prot(monitor)type(LCD)model(X)foo(bar(baz(1 2)) qux)mccs_ver(2.1))")]
#[case("(prot(monitor)type(LCD)model(X)mswhql(1)asset_eep(40)mccs_ver(2.1))")]
#[case("(prot(monitor)type(LCD)model(X)empty()mccs_ver(2.1))")]
#[case("(prot(monitor)type(LCD)model(X)cmds(01)cmds_v2(zz yy)mccs_ver(2.1))")]
fn unknown_tags_are_skipped(#[case] input: &str) {
    let caps = parse(input);
    assert_eq!(caps.model(), "X");
    assert_eq!(caps.mccs_version(), Some("2.1"));
}

#[test]
fn whitespace_between_tags() {
    let caps = parse("( prot(monitor)\ttype(LCD)\r\nmodel(X)  vcp(10) )");
    assert_eq!(caps.model(), "X");
    assert_eq!(codes(&caps), vec![0x10]);
}

#[test]
fn text_keeps_inner_whitespace() {
    let caps = parse("(prot( monitor )type(LCD)model(  X  Y ))");
    assert_eq!(caps.protocol(), " monitor ");
    assert_eq!(caps.model(), "  X  Y ");
}

#[test]
fn invalid_utf8_is_replaced() {
    let caps = parse_capabilities(b"(prot(monitor)type(LCD)model(\xFFX))").unwrap();
    assert_eq!(caps.model(), "\u{FFFD}X");
}

#[test]
fn bare_strings_when_allowed() {
    let parser = CapabilitiesParser::new(ParserOptions {
        allow_bare_strings: true,
        ..ParserOptions::default()
    });
    let caps = parser
        .parse(b"(prot(monitor)type(LCD)model(X) stray   tokens vcp(10) end)")
        .unwrap();
    assert_eq!(codes(&caps), vec![0x10]);
}

#[test]
fn nesting_within_limit() {
    let parser = CapabilitiesParser::new(ParserOptions {
        max_nesting_depth: Some(3),
        ..ParserOptions::default()
    });
    assert!(
        parser
            .parse(b"(prot(monitor)type(LCD)model(X)a(b(c(d))))")
            .is_ok()
    );
}

struct Vendor;

impl VcpMetadata for Vendor {
    fn lookup(&self, code: u8) -> Option<(&'static str, VcpCategory)> {
        match code {
            0xE0 => Some(("Eye Saver", VcpCategory::Image)),
            _ => crate::vcp::lookup(code),
        }
    }
}

#[test]
fn custom_metadata() {
    let parser = CapabilitiesParser::with_metadata(ParserOptions::default(), Vendor);
    let caps = parser
        .parse(b"(prot(monitor)type(LCD)model(X)vcp(10 E0 E1))")
        .unwrap();
    assert_eq!(names(&caps), vec!["Luminance", "Eye Saver", "Manufacturer Specific"]);
    assert_eq!(caps.vcp(0xE0).unwrap().category(), VcpCategory::Image);
}

#[test]
fn parsing_is_repeatable() {
    let parser = CapabilitiesParser::new(ParserOptions::default());
    assert_eq!(parser.parse(VP2785), parser.parse(VP2785));
}

#[test]
fn from_str_and_try_from() {
    let text = "(prot(monitor)type(LCD)model(X)vcp(10))";
    let from_str: ParsedCapabilities = text.parse().unwrap();
    let try_from = ParsedCapabilities::try_from(text.as_bytes()).unwrap();
    assert_eq!(from_str, try_from);
}
