/// Compressible text of exactly `size` bytes: a short paragraph repeated.
pub fn text_data(size: usize) -> Vec<u8> {
    const TEXT: &[u8] = b"The quick brown fox jumps over the lazy dog. \
        Pack my box with five dozen liquor jugs. \
        How vexingly quick daft zebras jump! \
        Sphinx of black quartz, judge my vow. ";

    TEXT.iter().copied().cycle().take(size).collect()
}

/// Pseudo-random bytes (xorshift32), close to incompressible.
#[allow(dead_code)]
pub fn noise_data(size: usize) -> Vec<u8> {
    let mut x: u32 = 0x9e37_79b9;
    (0..size)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x as u8
        })
        .collect()
}

/// Benchmark inputs of exactly `size` bytes.
///
/// With `FASTLZ_CORPUS_FILE` set, the file is read and repeated or truncated
/// to `size`; otherwise synthetic text is used so `cargo bench` works without
/// any external data.
pub fn corpus_chunk(size: usize) -> Vec<u8> {
    if let Ok(path) = std::env::var("FASTLZ_CORPUS_FILE") {
        if let Ok(buf) = std::fs::read(&path) {
            if !buf.is_empty() {
                return buf.iter().copied().cycle().take(size).collect();
            }
        }
    }
    text_data(size)
}
