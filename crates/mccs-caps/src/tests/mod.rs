mod parse_good;

/// Capability string reported by a ViewSonic VP2785.
pub(crate) const VP2785: &[u8] = include_bytes!("../../tests/fixtures/vp2785.txt");
