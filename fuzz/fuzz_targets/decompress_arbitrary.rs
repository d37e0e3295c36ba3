#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through the decoder: errors are fine, panics are not.

    // Zero-length output buffer.
    {
        let mut dst = vec![0u8; 0];
        let _ = fastlz::block::decompress_to_buf(data, &mut dst);
    }

    // Output as large as the input.
    if !data.is_empty() {
        let mut dst = vec![0u8; data.len()];
        let _ = fastlz::block::decompress_to_buf(data, &mut dst);
    }

    // Large output to stress long back-references, capped so tiny inputs
    // claiming huge output don't OOM the fuzzer.
    {
        let large = data.len().saturating_mul(255).min(1 << 20);
        let mut dst = vec![0u8; large];
        let _ = fastlz::block::decompress_to_buf(data, &mut dst);
    }

    // The exact-length tier must agree with the slice tier.
    if let Ok(n) = fastlz::block::decompress_to_buf(data, &mut vec![0u8; 1 << 16]) {
        assert!(fastlz::decompress(data, n).is_ok());
    }
});
