// Level 2 hash-chain matcher.

use fastlz::block::chain::HashChain;
use fastlz::block::types::{hash3, peek4, L2_MAX_DISTANCE};

fn h(input: &[u8], pos: usize) -> usize {
    hash3(peek4(input, pos).unwrap())
}

#[test]
fn empty_chain_finds_nothing() {
    let chain = HashChain::new();
    let input = b"abcdabcd";
    assert_eq!(chain.find_best(input, 4, h(input, 4), L2_MAX_DISTANCE, 16), None);
}

#[test]
fn finds_inserted_position() {
    let input = b"abcdXabcdY";
    let mut chain = HashChain::default();
    for pos in 0..5 {
        chain.insert(input, pos);
    }
    let m = chain.find_best(input, 5, h(input, 5), L2_MAX_DISTANCE, 16).unwrap();
    assert_eq!(m.distance, 4);
    assert_eq!(m.len, 4);
}

#[test]
fn depth_zero_searches_nothing() {
    let input = b"abcdXabcdY";
    let mut chain = HashChain::new();
    chain.insert(input, 0);
    assert_eq!(chain.find_best(input, 5, h(input, 5), L2_MAX_DISTANCE, 0), None);
}

#[test]
fn max_distance_is_respected() {
    let input = b"abcdXabcdY";
    let mut chain = HashChain::new();
    chain.insert(input, 0);
    assert!(chain.find_best(input, 5, h(input, 5), 4, 16).is_some());
    assert_eq!(chain.find_best(input, 5, h(input, 5), 3, 16), None);
}
