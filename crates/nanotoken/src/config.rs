// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Configuration resolution.
//!
//! A [`ConfigBuilder`] starts from the canonical defaults and receives
//! overrides in order; a later override of the same field replaces an earlier
//! one. [`ConfigBuilder::build`] validates the result into a [`Config`],
//! which is the only way to obtain one.

use core::fmt;

use nanotoken_rand::{EntropySource, SystemEntropySource};

use crate::alphabet::{Alphabet, MAX_ALPHABET_SIZE};
use crate::error::NanoIdError;
use crate::id::NanoId;
use crate::sampler;

/// Length used when none is configured.
pub const CANONICAL_LENGTH: usize = 21;
/// Shortest accepted id length.
pub const MIN_LENGTH: usize = 2;
/// Longest accepted id length.
pub const MAX_LENGTH: usize = 255;

/// A single configuration mutation.
///
/// Lists of overrides are applied front to back with
/// [`ConfigBuilder::apply_all`].
pub enum Override<E> {
    /// Sets the id length.
    Length(usize),
    /// Sets the alphabet.
    Alphabet(Alphabet),
    /// Sets the entropy source.
    EntropySource(E),
}

/// Validated generation parameters.
///
/// Invariants: `MIN_LENGTH <= length <= MAX_LENGTH` and
/// `1 <= alphabet.len() <= MAX_ALPHABET_SIZE`.
#[derive(Clone)]
pub struct Config<E: EntropySource = SystemEntropySource> {
    length: usize,
    alphabet: Alphabet,
    entropy: E,
}

impl Config<SystemEntropySource> {
    /// Returns a builder seeded with the canonical defaults.
    pub fn builder() -> ConfigBuilder<SystemEntropySource> {
        ConfigBuilder::new()
    }

    /// Canonical configuration: 21 symbols of [`CANONICAL_ALPHABET`](crate::CANONICAL_ALPHABET)
    /// from the OS CSPRNG.
    pub fn canonical() -> Self {
        Self {
            length: CANONICAL_LENGTH,
            alphabet: Alphabet::canonical(),
            entropy: SystemEntropySource {},
        }
    }
}

impl Default for Config<SystemEntropySource> {
    fn default() -> Self {
        Self::canonical()
    }
}

impl<E: EntropySource> Config<E> {
    /// Id length in symbols.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Alphabet symbols are drawn from.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Entropy source batches are requested from.
    #[inline]
    pub fn entropy_source(&self) -> &E {
        &self.entropy
    }

    /// Generates one identifier.
    ///
    /// Each call is independent: sampling parameters and buffers are derived
    /// and allocated per call, so a `Config` can be reused and, when the
    /// entropy source allows it, shared between threads.
    ///
    /// # Errors
    ///
    /// Returns [`NanoIdError::EntropySourceFailure`] if the entropy source
    /// fails. No partial id is ever returned.
    pub fn generate(&self) -> Result<NanoId, NanoIdError> {
        sampler::sample(self.length, &self.alphabet, &self.entropy)
    }
}

impl<E: EntropySource> fmt::Debug for Config<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("length", &self.length)
            .field("alphabet", &self.alphabet)
            .finish_non_exhaustive()
    }
}

/// Builder collecting overrides before validation.
pub struct ConfigBuilder<E = SystemEntropySource> {
    length: usize,
    alphabet: Alphabet,
    entropy: E,
}

impl ConfigBuilder<SystemEntropySource> {
    /// Creates a builder holding the canonical defaults.
    pub fn new() -> Self {
        Self {
            length: CANONICAL_LENGTH,
            alphabet: Alphabet::canonical(),
            entropy: SystemEntropySource {},
        }
    }
}

impl Default for ConfigBuilder<SystemEntropySource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> ConfigBuilder<E> {
    /// Sets the id length. Checked by [`Self::build`].
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the alphabet. Checked by [`Self::build`].
    pub fn alphabet(mut self, alphabet: impl Into<Alphabet>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Replaces the entropy source, possibly changing its type.
    pub fn entropy_source<F: EntropySource>(self, entropy: F) -> ConfigBuilder<F> {
        ConfigBuilder {
            length: self.length,
            alphabet: self.alphabet,
            entropy,
        }
    }

    /// Applies a single override.
    pub fn apply(mut self, change: Override<E>) -> Self {
        match change {
            Override::Length(length) => self.length = length,
            Override::Alphabet(alphabet) => self.alphabet = alphabet,
            Override::EntropySource(entropy) => self.entropy = entropy,
        }
        self
    }

    /// Applies overrides in iteration order.
    pub fn apply_all<I>(self, changes: I) -> Self
    where
        I: IntoIterator<Item = Override<E>>,
    {
        changes.into_iter().fold(self, Self::apply)
    }

    /// Validates the collected values into a [`Config`].
    ///
    /// The alphabet is checked first, so an empty alphabet is reported as
    /// such whatever the length.
    ///
    /// # Errors
    ///
    /// - [`NanoIdError::InvalidAlphabet`] if the alphabet is empty or larger
    ///   than [`MAX_ALPHABET_SIZE`].
    /// - [`NanoIdError::InvalidLength`] if the length is outside
    ///   `MIN_LENGTH..=MAX_LENGTH`.
    pub fn build(self) -> Result<Config<E>, NanoIdError> {
        if self.alphabet.is_empty() || self.alphabet.len() > MAX_ALPHABET_SIZE {
            return Err(NanoIdError::InvalidAlphabet(self.alphabet.len()));
        }

        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(NanoIdError::InvalidLength(self.length));
        }

        Ok(Config {
            length: self.length,
            alphabet: self.alphabet,
            entropy: self.entropy,
        })
    }
}
