// Block compressor: capacity bound, level tags, literal runs, long matches,
// and the slice-level error paths.

use fastlz::block::{
    compress_bound, compress_to_buf, compress_to_vec, decompress_to_vec, stream_level,
    CompressError, MAX_INPUT_SIZE,
};
use fastlz::Level;

fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut x = seed;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x as u8
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// compress_bound
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bound_has_floor_of_66() {
    for len in [0, 1, 2, 32, 62] {
        assert_eq!(compress_bound(len), Some(66), "len {len}");
    }
}

#[test]
fn bound_rounds_up() {
    // 1000 * 1.05 is exact; 1001 * 1.05 = 1051.05
    assert_eq!(compress_bound(1000), Some(1050));
    assert_eq!(compress_bound(1001), Some(1052));
}

#[test]
fn bound_at_ceiling() {
    assert!(compress_bound(MAX_INPUT_SIZE).is_some());
    assert_eq!(compress_bound(MAX_INPUT_SIZE + 1), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Level tag and literal encoding
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn level_tag_in_first_byte() {
    let l1 = compress_to_vec(b"abc", Level::Level1).unwrap();
    let l2 = compress_to_vec(b"abc", Level::Level2).unwrap();
    assert_eq!(l1, [0x02, b'a', b'b', b'c']);
    assert_eq!(l2, [0x22, b'a', b'b', b'c']);
    assert_eq!(stream_level(&l1).unwrap(), Some(Level::Level1));
    assert_eq!(stream_level(&l2).unwrap(), Some(Level::Level2));
}

#[test]
fn literal_runs_split_at_32() {
    let input: Vec<u8> = (0u8..40).collect();
    let out = compress_to_vec(&input, Level::Level1).unwrap();
    assert_eq!(out.len(), 1 + 32 + 1 + 8);
    assert_eq!(out[0], 31);
    assert_eq!(&out[1..33], &input[..32]);
    assert_eq!(out[33], 7);
    assert_eq!(&out[34..], &input[32..]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Matches
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn long_run_is_split_at_level1() {
    // one literal, then 999 bytes of back-references in 262-byte pieces
    let input = vec![b'z'; 1000];
    let out = compress_to_vec(&input, Level::Level1).unwrap();
    assert!(out.len() < 20, "got {} bytes", out.len());
    assert_eq!(decompress_to_vec(&out, input.len()).unwrap(), input);
}

#[test]
fn long_run_uses_length_extension_at_level2() {
    let input = vec![b'z'; 1000];
    let out = compress_to_vec(&input, Level::Level2).unwrap();
    // literal (2) + opcode + 255-run extension + terminator + distance
    assert!(out.len() <= 10, "got {} bytes", out.len());
    assert_eq!(decompress_to_vec(&out, input.len()).unwrap(), input);
}

#[test]
fn level2_reaches_past_level1_window() {
    let block = noise(20_000, 0x1234_5678);
    let mut input = block.clone();
    input.extend_from_slice(&block);

    let l1 = compress_to_vec(&input, Level::Level1).unwrap();
    let l2 = compress_to_vec(&input, Level::Level2).unwrap();

    assert!(l1.len() > 38_000, "level 1 cannot see 20 KB back: {}", l1.len());
    assert!(l2.len() < 22_000, "level 2 should reuse the first half: {}", l2.len());
    assert_eq!(decompress_to_vec(&l1, input.len()).unwrap(), input);
    assert_eq!(decompress_to_vec(&l2, input.len()).unwrap(), input);
}

// ─────────────────────────────────────────────────────────────────────────────
// Error paths
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn output_too_small() {
    let input = noise(500, 7);
    let mut out = vec![0u8; 100];
    for level in [Level::Level1, Level::Level2] {
        assert_eq!(
            compress_to_buf(&input, &mut out, level),
            Err(CompressError::OutputTooSmall)
        );
    }
}

#[test]
fn exact_capacity_is_enough() {
    let input = b"exactly sized output buffers are fine";
    let packed = compress_to_vec(input, Level::Level1).unwrap();
    let mut out = vec![0u8; packed.len()];
    assert_eq!(compress_to_buf(input, &mut out, Level::Level1), Ok(packed.len()));
    assert_eq!(out, packed);
}

#[test]
fn compress_error_display() {
    assert_eq!(CompressError::OutputTooSmall.to_string(), "output buffer was insufficient");
    assert_eq!(
        CompressError::InputTooLarge(1 << 31).to_string(),
        "input of 2147483648 bytes exceeds the maximum block size"
    );
}
