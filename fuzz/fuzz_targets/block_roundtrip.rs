#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Both levels, plus auto, must round-trip any input within the bound.
    for level in [None, Some(1), Some(2)] {
        let compressed = fastlz::compress(data, level).expect("compress failed");
        let bound = fastlz::compress_bound(data.len()).expect("bound");
        assert!(compressed.data.len() <= bound);

        let recovered = fastlz::decompress(&compressed.data, compressed.original_length)
            .expect("decompress of own output failed");
        assert_eq!(recovered, data, "round-trip mismatch at level {:?}", level);
    }
});
