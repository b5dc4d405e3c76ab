// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Masked rejection sampling of alphabet indices from random bytes.
//!
//! # Algorithm
//!
//! 1. `mask = 2^k - 1`, the smallest all-ones value covering `len - 1`
//! 2. Request `step` bytes from the entropy source in one call
//! 3. For each byte, `index = byte & mask`; indices `>= len` are dropped
//! 4. Stop as soon as `length` symbols are collected, discarding the rest of
//!    the batch; otherwise request another batch
//!
//! Masking keeps every accepted index equally likely, which modulo reduction
//! does not when `len` does not divide 256.

use nanotoken_rand::EntropySource;

use crate::alphabet::Alphabet;
use crate::error::NanoIdError;
use crate::id::NanoId;

/// Over-allocation factor for entropy batches.
///
/// With at most ~50% of masked bytes rejected, `1.6` makes a second entropy
/// call unlikely for typical lengths. Affects performance only.
pub const STEP_MULTIPLIER: f64 = 1.6;

/// Smallest `2^k - 1` that is `>= alphabet_len - 1`, never zero.
///
/// `alphabet_len` must be in `1..=256`.
#[inline]
pub(crate) fn mask_for(alphabet_len: usize) -> usize {
    debug_assert!((1..=256).contains(&alphabet_len));

    let upper_bound = (alphabet_len as u32 - 1) | 1;
    let bits = u32::BITS - upper_bound.leading_zeros();

    (1usize << bits) - 1
}

/// Bytes requested per entropy call: `ceil(1.6 * mask * length / alphabet_len)`.
#[inline]
pub(crate) fn step_for(mask: usize, length: usize, alphabet_len: usize) -> usize {
    let step = STEP_MULTIPLIER * (mask * length) as f64 / alphabet_len as f64;
    step.ceil() as usize
}

/// Maps a random byte to a symbol, or `None` when the masked value is out of range.
#[inline(always)]
pub(crate) fn accept(byte: u8, mask: usize, symbols: &[char]) -> Option<char> {
    symbols.get(usize::from(byte) & mask).copied()
}

pub(crate) fn sample<E: EntropySource>(
    length: usize,
    alphabet: &Alphabet,
    entropy: &E,
) -> Result<NanoId, NanoIdError> {
    let symbols = alphabet.symbols();
    let mask = mask_for(symbols.len());
    let step = step_for(mask, length, symbols.len());

    let mut batch = vec![0u8; step];
    let mut id = Vec::with_capacity(length);

    loop {
        entropy.fill_bytes(&mut batch)?;

        for &byte in batch.iter() {
            let Some(symbol) = accept(byte, mask, symbols) else {
                continue;
            };

            id.push(symbol);

            if id.len() == length {
                return Ok(NanoId::from_symbols(&id));
            }
        }
    }
}
