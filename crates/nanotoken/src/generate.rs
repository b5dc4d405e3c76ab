// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::error::NanoIdError;
use crate::id::NanoId;

/// Generates a canonical id: 21 symbols of the URL-safe alphabet.
///
/// # Errors
///
/// Returns [`NanoIdError::EntropySourceFailure`] if the OS CSPRNG fails.
pub fn generate() -> Result<NanoId, NanoIdError> {
    Config::canonical().generate()
}

/// Generates an id of `length` symbols from the canonical alphabet.
///
/// # Errors
///
/// Returns [`NanoIdError::InvalidLength`] for lengths outside `2..=255`,
/// or [`NanoIdError::EntropySourceFailure`] if the OS CSPRNG fails.
pub fn generate_with_length(length: usize) -> Result<NanoId, NanoIdError> {
    Config::builder().length(length).build()?.generate()
}

/// Generates an id of `length` symbols from `alphabet`.
///
/// # Errors
///
/// Returns [`NanoIdError::InvalidLength`], [`NanoIdError::InvalidAlphabet`],
/// or [`NanoIdError::EntropySourceFailure`].
pub fn generate_custom(
    length: usize,
    alphabet: impl Into<Alphabet>,
) -> Result<NanoId, NanoIdError> {
    Config::builder()
        .length(length)
        .alphabet(alphabet)
        .build()?
        .generate()
}
