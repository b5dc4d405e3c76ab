// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Seeded, deterministic entropy source producing a long uniform byte stream.
///
/// Backed by xorshift64 (shifts 13, 7, 17). Not cryptographically secure;
/// intended for reproducible statistical tests only.
pub struct XorshiftEntropySource {
    state: Cell<u64>,
}

impl XorshiftEntropySource {
    /// Creates a new source from a seed.
    ///
    /// # Panics
    ///
    /// Panics if seed is 0 (xorshift64 requires non-zero state).
    pub fn new(seed: u64) -> Self {
        assert!(seed != 0, "xorshift64 seed cannot be zero");
        Self {
            state: Cell::new(seed),
        }
    }

    #[inline(always)]
    fn next_u64(&self) -> u64 {
        let mut x = self.state.get();
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state.set(x);
        x
    }
}

impl EntropySource for XorshiftEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        for chunk in dest.chunks_mut(8) {
            let word = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }

        Ok(())
    }
}
