// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use nanotoken_rand::EntropyError;
use thiserror::Error;

/// Errors that can occur when resolving a configuration or generating an id.
#[derive(Debug, Error)]
pub enum NanoIdError {
    /// Requested length is outside `MIN_LENGTH..=MAX_LENGTH`.
    #[error("id length must be between 2 and 255, got {0}")]
    InvalidLength(usize),
    /// Alphabet is empty or has more than `MAX_ALPHABET_SIZE` symbols.
    #[error("alphabet must contain between 1 and 256 symbols, got {0}")]
    InvalidAlphabet(usize),
    /// The entropy source failed while filling a batch.
    #[error("entropy source failed while generating id")]
    EntropySourceFailure(#[from] EntropyError),
}
