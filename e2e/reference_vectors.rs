// e2e/reference_vectors.rs: byte-exact compatibility with existing streams
//
// Each vector is a 4-byte little-endian original length followed by the raw
// token stream, as stored by earlier releases of the Python binding. New
// output must match them byte for byte, and the old streams must still
// decode.

use fastlz::{compress, decompress};

const VECTORS: &[(&[u8], &str)] = &[
    (b"", "00000000"),
    (b"\x00", "010000000000"),
    (b"\xFF", "0100000000ff"),
    (b"\x01", "010000000001"),
    (b"\x00\x00", "02000000010000"),
    (b"\xFF\xFF", "0200000001ffff"),
    (b"\x01\x01", "02000000010101"),
    (
        b"\x01hello\x00world\x00\x00",
        "0e0000000d0168656c6c6f00776f726c640000",
    ),
];

const NESTED: &[&[u8]] = &[
    b"",
    b"\x00",
    b"\xFF",
    b"\x01",
    b"\x00\x00",
    b"\xFF\xFF",
    b"\x01\x01",
    b"\x00\x00\x00",
    b"\xFF\xFF\xFF",
    b"\x01\x01\x01",
    b"\x00\x00\x00\x00",
    b"\xFF\xFF\xFF\xFF",
    b"\x01\x01\x01\x01",
    b"\x01hello\x00world\x00\x00",
];

fn from_hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

fn pack(compressed: &[u8], original_length: usize) -> Vec<u8> {
    let mut out = (original_length as u32).to_le_bytes().to_vec();
    out.extend_from_slice(compressed);
    out
}

#[test]
fn compress_matches_stored_streams() {
    for &(plain, hex) in VECTORS {
        let c = compress(plain, None).unwrap();
        assert_eq!(
            pack(&c.data, c.original_length),
            from_hex(hex),
            "input {plain:02x?}"
        );
    }
}

#[test]
fn stored_streams_still_decode() {
    for &(plain, hex) in VECTORS {
        let stored = from_hex(hex);
        let len = u32::from_le_bytes([stored[0], stored[1], stored[2], stored[3]]) as usize;
        assert_eq!(decompress(&stored[4..], len).unwrap(), plain);
    }
}

#[test]
fn compress_the_compression_100_times() {
    for &content in NESTED {
        for level in [None, Some(1), Some(2)] {
            let mut data = content.to_vec();
            let mut lengths = Vec::with_capacity(100);
            for _ in 0..100 {
                let c = compress(&data, level).unwrap();
                lengths.push(c.original_length);
                data = c.data;
            }
            while let Some(len) = lengths.pop() {
                data = decompress(&data, len).unwrap();
            }
            assert_eq!(data, content, "content {content:02x?} level {level:?}");
        }
    }
}
