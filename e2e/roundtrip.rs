// e2e/roundtrip.rs: whole-buffer round-trips over realistic inputs
//
// Text, binary-ish and mixed buffers at sizes around the auto-level
// threshold and the level 1 window, through both levels and auto.

use fastlz::block::{compress_to_vec, decompress_to_vec, stream_level};
use fastlz::{compress, compress_bound, decompress, Level};

fn text(len: usize) -> Vec<u8> {
    const WORDS: &[&str] = &[
        "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
        "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    ];
    let mut out = Vec::with_capacity(len + 16);
    let mut i = 0usize;
    while out.len() < len {
        out.extend_from_slice(WORDS[(i * 7 + i / 3) % WORDS.len()].as_bytes());
        out.push(if i % 11 == 10 { b'\n' } else { b' ' });
        i += 1;
    }
    out.truncate(len);
    out
}

fn structured(len: usize) -> Vec<u8> {
    // little-endian records with a slowly changing counter
    let mut out = Vec::with_capacity(len + 8);
    let mut n = 0u32;
    while out.len() < len {
        out.extend_from_slice(&n.to_le_bytes());
        out.extend_from_slice(&[0xca, 0xfe, (n % 5) as u8, 0]);
        n += 1;
    }
    out.truncate(len);
    out
}

fn noise(len: usize) -> Vec<u8> {
    let mut x: u32 = 0x0bad_f00d;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            (x >> 11) as u8
        })
        .collect()
}

const SIZES: &[usize] = &[1, 3, 4, 5, 31, 32, 33, 100, 8_191, 8_192, 8_193, 65_535, 65_536, 300_000];

#[test]
fn roundtrip_text() {
    for &len in SIZES {
        let input = text(len);
        for level in [None, Some(1), Some(2)] {
            let c = compress(&input, level).unwrap();
            assert!(c.data.len() <= compress_bound(len).unwrap());
            assert_eq!(decompress(&c.data, len).unwrap(), input, "len {len} level {level:?}");
        }
    }
}

#[test]
fn roundtrip_structured() {
    for &len in SIZES {
        let input = structured(len);
        for level in [Level::Level1, Level::Level2] {
            let packed = compress_to_vec(&input, level).unwrap();
            assert_eq!(stream_level(&packed).unwrap(), Some(level));
            assert_eq!(decompress_to_vec(&packed, len).unwrap(), input);
        }
    }
}

#[test]
fn roundtrip_mixed_segments() {
    // compressible text, noise, then the text again far behind
    let mut input = text(40_000);
    input.extend(noise(30_000));
    input.extend(text(40_000));

    let l1 = compress(&input, Some(1)).unwrap();
    let l2 = compress(&input, Some(2)).unwrap();
    assert!(l2.data.len() <= l1.data.len());
    assert_eq!(decompress(&l1.data, input.len()).unwrap(), input);
    assert_eq!(decompress(&l2.data, input.len()).unwrap(), input);
}

#[test]
fn text_actually_compresses() {
    let input = text(100_000);
    let c = compress(&input, None).unwrap();
    assert!(c.data.len() < input.len() / 2, "{} bytes", c.data.len());
}
