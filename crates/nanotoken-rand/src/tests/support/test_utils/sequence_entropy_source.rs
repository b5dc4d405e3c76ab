// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::support::test_utils::SequenceEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_sequence_entropy_source_wraps_pattern() {
    let source = SequenceEntropySource::new([1, 2, 3]);
    let mut buf = [0u8; 7];

    source
        .fill_bytes(&mut buf)
        .expect("Failed to fill_bytes(..)");

    assert_eq!(buf, [1, 2, 3, 1, 2, 3, 1]);
}

#[test]
fn test_sequence_entropy_source_position_persists() {
    let source = SequenceEntropySource::new([10, 20, 30, 40]);
    let mut first = [0u8; 3];
    let mut second = [0u8; 3];

    source.fill_bytes(&mut first).unwrap();
    source.fill_bytes(&mut second).unwrap();

    assert_eq!(first, [10, 20, 30]);
    assert_eq!(second, [40, 10, 20]);
    assert_eq!(source.requested_lengths(), vec![3, 3]);
}

#[test]
fn test_sequence_entropy_source_rewind() {
    let source = SequenceEntropySource::new([5, 6]);
    let mut buf = [0u8; 1];

    source.fill_bytes(&mut buf).unwrap();
    source.rewind();
    source.fill_bytes(&mut buf).unwrap();

    assert_eq!(buf, [5]);
    assert_eq!(source.call_count(), 1);
}

#[test]
#[should_panic(expected = "sequence pattern cannot be empty")]
fn test_sequence_entropy_source_empty_pattern_panics() {
    let _ = SequenceEntropySource::new(Vec::<u8>::new());
}
