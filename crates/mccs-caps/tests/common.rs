#![allow(missing_docs)]
#![allow(dead_code)]

/// Capability string reported by a ViewSonic VP2785.
pub const VP2785: &str = include_str!("fixtures/vp2785.txt");

/// A monitor that advertises a single VCP code.
pub const SINGLE_CODE: &str =
    "(prot(monitor)type(LCD)model(Monitor 1)cmds(01 02 03 07 0C E3 F3)vcp(10)mswhql(1)mccs_ver(2.2))";

/// Exercises `vcpname` overrides, escapes and unknown tags.
pub const NAMED: &str = r"(prot(monitor)type(LCD)model(VP2785 series)cmds(01 02 03 07 0C E3 F3 AB)vcp(02 10 14(05 08 0B) 60(0F 11) DF E0(00 01))vcpname(60((DP HDMI)) E0(Eco\x20Mode(Off On)))mswhql(1)mccs_ver(2.2))";
