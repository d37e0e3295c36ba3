// Block decoder against hand-assembled token streams.

use fastlz::block::{decompress_to_buf, decompress_to_vec, stream_level, DecompressError};
use fastlz::Level;

#[test]
fn empty_stream_decodes_to_nothing() {
    let mut out = [0u8; 4];
    assert_eq!(decompress_to_buf(&[], &mut out), Ok(0));
    assert_eq!(decompress_to_vec(&[], 0).unwrap(), b"");
    assert_eq!(stream_level(&[]).unwrap(), None);
}

#[test]
fn literal_run() {
    let stream = [0x04, b'h', b'e', b'l', b'l', b'o'];
    assert_eq!(decompress_to_vec(&stream, 5).unwrap(), b"hello");
}

#[test]
fn short_backref_overlapping() {
    // 'a', then copy 4 from one byte back
    let stream = [0x00, b'a', 0x40, 0x00];
    assert_eq!(decompress_to_vec(&stream, 5).unwrap(), b"aaaaa");
}

#[test]
fn backref_with_period_two() {
    // 'ab', then copy 6 from two bytes back
    let stream = [0x01, b'a', b'b', 0x80, 0x01];
    assert_eq!(decompress_to_vec(&stream, 8).unwrap(), b"abababab");
}

#[test]
fn level1_length_byte() {
    let stream = [0x00, b'a', 0xe0, 0x00, 0x00];
    assert_eq!(decompress_to_vec(&stream, 10).unwrap(), vec![b'a'; 10]);

    let stream = [0x00, b'a', 0xe0, 0xff, 0x00];
    assert_eq!(decompress_to_vec(&stream, 265).unwrap(), vec![b'a'; 265]);
}

#[test]
fn level2_length_run() {
    // 6 + 255 + 1 + 3
    let stream = [0x20, b'a', 0xe0, 0xff, 0x01, 0x00];
    assert_eq!(decompress_to_vec(&stream, 266).unwrap(), vec![b'a'; 266]);
}

#[test]
fn level2_far_distance() {
    // 8192 literal bytes, then a 3-byte copy from 8192 + 2 bytes back
    // (short distance 8191 plus a 16-bit extension of 2).
    let mut expected: Vec<u8> = (0..8194u32).map(|i| (i % 251) as u8).collect();
    let mut stream = Vec::new();
    for chunk in expected.chunks(32) {
        stream.push((chunk.len() - 1) as u8);
        stream.extend_from_slice(chunk);
    }
    stream[0] |= 0x20;
    stream.extend_from_slice(&[0x3f, 0xff, 0x00, 0x02]);

    let start = expected.len() - 8194;
    let copied = expected[start..start + 3].to_vec();
    expected.extend_from_slice(&copied);

    assert_eq!(decompress_to_vec(&stream, expected.len()).unwrap(), expected);
}

#[test]
fn truncated_streams() {
    for stream in [&[0x01, b'a'][..], &[0x00, b'a', 0x40], &[0x00, b'a', 0xe0, 0x00]] {
        let mut out = [0u8; 64];
        assert_eq!(
            decompress_to_buf(stream, &mut out),
            Err(DecompressError::InputTruncated),
            "{stream:02x?}"
        );
    }
}

#[test]
fn level2_truncated_distance_extension() {
    let mut out = [0u8; 64];
    let stream = [0x20, b'a', 0x3f, 0xff, 0x00];
    assert_eq!(decompress_to_buf(&stream, &mut out), Err(DecompressError::InputTruncated));
}

#[test]
fn backref_before_start() {
    let mut out = [0u8; 64];
    let stream = [0x00, b'a', 0x40, 0x05];
    assert_eq!(
        decompress_to_buf(&stream, &mut out),
        Err(DecompressError::InvalidBackreference)
    );
}

#[test]
fn output_limit_is_enforced() {
    let mut out = [0u8; 3];
    assert_eq!(
        decompress_to_buf(&[0x00, b'a', 0x40, 0x00], &mut out),
        Err(DecompressError::OutputTooSmall)
    );
    assert_eq!(
        decompress_to_buf(&[0x04, b'h', b'e', b'l', b'l', b'o'], &mut out),
        Err(DecompressError::OutputTooSmall)
    );
}

#[test]
fn shorter_stream_than_buffer_is_ok_for_slices() {
    let mut out = [0u8; 16];
    assert_eq!(decompress_to_buf(&[0x00, b'a', 0x40, 0x00], &mut out), Ok(5));
}

#[test]
fn exact_length_required_for_vec() {
    let stream = [0x00, b'a', 0x40, 0x00];
    assert_eq!(
        decompress_to_vec(&stream, 6),
        Err(DecompressError::LengthMismatch { expected: 6, actual: 5 })
    );
    assert_eq!(decompress_to_vec(&stream, 4), Err(DecompressError::OutputTooSmall));
}

#[test]
fn unknown_level_tags() {
    for tag in 2u8..8 {
        let stream = [tag << 5, b'a'];
        assert_eq!(stream_level(&stream), Err(DecompressError::UnknownLevel(tag)));
        let mut out = [0u8; 4];
        assert_eq!(
            decompress_to_buf(&stream, &mut out),
            Err(DecompressError::UnknownLevel(tag))
        );
    }
    assert_eq!(stream_level(&[0x1f]).unwrap(), Some(Level::Level1));
}
