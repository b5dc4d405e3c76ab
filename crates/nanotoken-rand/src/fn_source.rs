// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Entropy source backed by a closure.
///
/// Lets callers plug any "fill this buffer" function into the generator
/// without declaring a type for it.
///
/// ```rust
/// use nanotoken_rand::{EntropySource, FnEntropySource};
///
/// let zeros = FnEntropySource::new(|dest: &mut [u8]| {
///     dest.fill(0);
///     Ok(())
/// });
///
/// let mut buf = [0xffu8; 4];
/// zeros.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");
/// assert_eq!(buf, [0u8; 4]);
/// ```
pub struct FnEntropySource<F>
where
    F: Fn(&mut [u8]) -> Result<(), EntropyError>,
{
    fill_fn: F,
}

impl<F> FnEntropySource<F>
where
    F: Fn(&mut [u8]) -> Result<(), EntropyError>,
{
    /// Wraps `fill_fn` as an [`EntropySource`].
    pub fn new(fill_fn: F) -> Self {
        Self { fill_fn }
    }
}

impl<F> EntropySource for FnEntropySource<F>
where
    F: Fn(&mut [u8]) -> Result<(), EntropyError>,
{
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (self.fill_fn)(dest)
    }
}

impl<F> fmt::Debug for FnEntropySource<F>
where
    F: Fn(&mut [u8]) -> Result<(), EntropyError>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEntropySource").finish_non_exhaustive()
    }
}
