#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use mccs_caps::{CapabilitiesParser, ParserOptions};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Leading bytes used to build the `ParserOptions`.
const HEADER: usize = 4;

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[b" ", b"\t", b"\n", b"\r", b"  "];

static TEXT_TABLE: &[&[u8]] = &[
    b"monitor",
    b"LCD",
    b"VP2785 series",
    b"",
    b"2.2",
    b"2.2a",
    br"\x41\x42",
    br"Input\x201",
    br"\xZZ",
    b"\xFF\xFE",
];

static UNKNOWN_TABLE: &[&[u8]] = &[b"mswhql", b"asset_eep", b"mpu", b"window1", b"x"];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn pick<'a>(table: &[&'a [u8]]) -> &'a [u8] {
    with_rng(|rng| table[rng.random_range(0..table.len())])
}

fn push_hex(out: &mut Vec<u8>, byte: u8) {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";
    out.push(DIGITS[usize::from(byte >> 4)]);
    out.push(DIGITS[usize::from(byte & 0xF)]);
}

fn push_hex_list(out: &mut Vec<u8>, max: usize) {
    let n = with_rng(|rng| rng.random_range(0..=max));
    for _ in 0..n {
        push_hex(out, with_rng(|rng| rng.random()));
        if with_rng(|rng| rng.random_bool(0.7)) {
            out.extend_from_slice(pick(WS_TABLE));
        }
    }
}

fn push_tag(out: &mut Vec<u8>, name: &[u8], body: impl FnOnce(&mut Vec<u8>)) {
    out.extend_from_slice(name);
    out.push(b'(');
    body(out);
    out.push(b')');
}

/// A capability string that is mostly well-formed, so mutations reach the
/// tag readers instead of failing the outer checks.
fn generate(out: &mut Vec<u8>) {
    out.push(b'(');
    push_tag(out, b"prot", |out| out.extend_from_slice(pick(TEXT_TABLE)));
    push_tag(out, b"type", |out| out.extend_from_slice(pick(TEXT_TABLE)));
    push_tag(out, b"model", |out| out.extend_from_slice(pick(TEXT_TABLE)));

    let tags = with_rng(|rng| rng.random_range(0..6));
    for _ in 0..tags {
        match with_rng(|rng| rng.random_range(0..5)) {
            0 => push_tag(out, b"cmds", |out| push_hex_list(out, 8)),
            1 => push_tag(out, b"vcp", |out| {
                let n = with_rng(|rng| rng.random_range(0..16));
                for _ in 0..n {
                    push_hex(out, with_rng(|rng| rng.random()));
                    if with_rng(|rng| rng.random_bool(0.3)) {
                        out.push(b'(');
                        push_hex_list(out, 4);
                        out.push(b')');
                    }
                    out.extend_from_slice(pick(WS_TABLE));
                }
            }),
            2 => push_tag(out, b"vcpname", |out| {
                push_hex(out, with_rng(|rng| rng.random()));
                out.push(b'(');
                out.extend_from_slice(pick(TEXT_TABLE));
                if with_rng(|rng| rng.random_bool(0.5)) {
                    out.extend_from_slice(b"(On Off)");
                }
                out.push(b')');
            }),
            3 => push_tag(out, b"mccs_ver", |out| out.extend_from_slice(pick(TEXT_TABLE))),
            _ => push_tag(out, pick(UNKNOWN_TABLE), |out| {
                out.extend_from_slice(b"a(b(c) d)");
            }),
        }
    }
    out.push(b')');
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        let mut out = Vec::with_capacity(max_size);
        out.extend_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes()));
        generate(&mut out);

        let len = out.len().min(max_size);
        data[..len].copy_from_slice(&out[..len]);
        len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

fn parser(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }
    let Ok(options) = ParserOptions::arbitrary(&mut Unstructured::new(&data[..HEADER])) else {
        return;
    };
    let input = &data[HEADER..];

    let parser = CapabilitiesParser::new(options);
    let first = parser.parse(input);
    assert_eq!(first, parser.parse(input));

    match first {
        Ok(caps) => {
            for def in caps.supported_vcp() {
                assert!(caps.supports_vcp(def.code()));
            }
        }
        Err(err) => assert!(err.offset() <= input.len()),
    }
}

fuzz_target!(|data: &[u8]| parser(data));
