// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::{Cell, RefCell};

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Deterministic entropy source replaying a fixed byte pattern.
///
/// Bytes are handed out in order and the pattern wraps around once
/// exhausted. The read position persists across calls; use [`Self::rewind`]
/// to replay from the start.
pub struct SequenceEntropySource {
    pattern: Vec<u8>,
    position: Cell<usize>,
    requested: RefCell<Vec<usize>>,
}

impl SequenceEntropySource {
    /// Creates a source cycling over `pattern`.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is empty.
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        let pattern = pattern.into();
        assert!(!pattern.is_empty(), "sequence pattern cannot be empty");

        Self {
            pattern,
            position: Cell::new(0),
            requested: RefCell::new(Vec::new()),
        }
    }

    /// Moves the read position back to the start of the pattern.
    pub fn rewind(&self) {
        self.position.set(0);
        self.requested.borrow_mut().clear();
    }

    /// Returns the number of fill_bytes calls since creation or last rewind.
    pub fn call_count(&self) -> usize {
        self.requested.borrow().len()
    }

    /// Returns the buffer length of every fill_bytes call, in order.
    pub fn requested_lengths(&self) -> Vec<usize> {
        self.requested.borrow().clone()
    }
}

impl EntropySource for SequenceEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.requested.borrow_mut().push(dest.len());

        let mut position = self.position.get();
        for byte in dest.iter_mut() {
            *byte = self.pattern[position];
            position = (position + 1) % self.pattern.len();
        }
        self.position.set(position);

        Ok(())
    }
}
