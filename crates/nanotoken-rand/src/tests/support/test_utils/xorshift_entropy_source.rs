// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::support::test_utils::XorshiftEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_xorshift_entropy_source_same_seed_same_stream() {
    let a = XorshiftEntropySource::new(0x5EED);
    let b = XorshiftEntropySource::new(0x5EED);
    let mut buf_a = [0u8; 64];
    let mut buf_b = [0u8; 64];

    a.fill_bytes(&mut buf_a).unwrap();
    b.fill_bytes(&mut buf_b).unwrap();

    assert_eq!(buf_a, buf_b);
}

#[test]
fn test_xorshift_entropy_source_different_seeds_differ() {
    let a = XorshiftEntropySource::new(1);
    let b = XorshiftEntropySource::new(2);
    let mut buf_a = [0u8; 64];
    let mut buf_b = [0u8; 64];

    a.fill_bytes(&mut buf_a).unwrap();
    b.fill_bytes(&mut buf_b).unwrap();

    assert_ne!(buf_a, buf_b);
}

#[test]
#[should_panic(expected = "xorshift64 seed cannot be zero")]
fn test_xorshift_entropy_source_zero_seed_panics() {
    let _ = XorshiftEntropySource::new(0);
}

proptest! {
    #[test]
    fn xorshift_split_fills_match_single_fill_on_word_boundaries(
        seed in 1..u64::MAX,
        words in 1..16usize,
    ) {
        let whole = XorshiftEntropySource::new(seed);
        let split = XorshiftEntropySource::new(seed);

        let mut expected = vec![0u8; words * 16];
        whole.fill_bytes(&mut expected).unwrap();

        let mut actual = vec![0u8; words * 16];
        let (head, tail) = actual.split_at_mut(words * 8);
        split.fill_bytes(head).unwrap();
        split.fill_bytes(tail).unwrap();

        prop_assert_eq!(expected, actual);
    }
}
