// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::EntropyError;

/// Capability producing cryptographically secure random bytes on demand.
///
/// Implementations fill the whole destination buffer or fail; a partially
/// filled buffer must never be reported as success. Buffers of any size,
/// including zero, are valid requests.
///
/// Sources used from several threads at once must be safe for concurrent
/// invocation. Nothing in this crate serializes calls.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns an [`EntropyError`] describing the cause if the source cannot
    /// produce the requested bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    #[inline]
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

impl<T: EntropySource + ?Sized> EntropySource for Box<T> {
    #[inline]
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

impl<T: EntropySource + ?Sized> EntropySource for Rc<T> {
    #[inline]
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

impl<T: EntropySource + ?Sized> EntropySource for Arc<T> {
    #[inline]
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}
