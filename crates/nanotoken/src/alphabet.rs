// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

/// The 64-symbol URL-safe alphabet used when none is configured.
pub const CANONICAL_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Largest alphabet a byte-driven sampler can reach every symbol of.
pub const MAX_ALPHABET_SIZE: usize = 256;

/// Ordered sequence of symbols an identifier is drawn from.
///
/// Symbols are Unicode scalar values, not bytes, so multi-byte characters
/// count as one symbol each. Symbols are expected to be pairwise distinct;
/// a repeated symbol is simply drawn more often. Use [`Alphabet::is_distinct`]
/// to check untrusted input.
///
/// Size limits are enforced when a [`Config`](crate::Config) is built, not
/// here.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Box<[char]>,
}

impl Alphabet {
    /// Creates an alphabet from an ordered list of symbols.
    pub fn new(symbols: impl Into<Vec<char>>) -> Self {
        Self {
            symbols: symbols.into().into_boxed_slice(),
        }
    }

    /// Returns the canonical `A-Z a-z 0-9 - _` alphabet.
    pub fn canonical() -> Self {
        Self::from(CANONICAL_ALPHABET)
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet has no symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in order.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns the symbol at `index`, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// Returns `true` if the symbol is part of the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Returns `true` if no symbol appears twice.
    pub fn is_distinct(&self) -> bool {
        let mut sorted = self.symbols.to_vec();
        sorted.sort_unstable();
        sorted.windows(2).all(|pair| pair[0] != pair[1])
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::canonical()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet")
            .field(&self.symbols.iter().collect::<String>())
            .finish()
    }
}

impl From<&str> for Alphabet {
    fn from(symbols: &str) -> Self {
        Self::new(symbols.chars().collect::<Vec<_>>())
    }
}

impl From<String> for Alphabet {
    fn from(symbols: String) -> Self {
        Self::from(symbols.as_str())
    }
}

impl From<Vec<char>> for Alphabet {
    fn from(symbols: Vec<char>) -> Self {
        Self::new(symbols)
    }
}

impl From<&[char]> for Alphabet {
    fn from(symbols: &[char]) -> Self {
        Self::new(symbols.to_vec())
    }
}

impl<const N: usize> From<[char; N]> for Alphabet {
    fn from(symbols: [char; N]) -> Self {
        Self::new(symbols.to_vec())
    }
}
