// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::Chars;

/// A generated identifier.
///
/// Renders losslessly as the concatenation of its symbols. Compared by value;
/// deliberately not ordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NanoId {
    text: String,
    symbol_count: usize,
}

impl NanoId {
    pub(crate) fn from_symbols(symbols: &[char]) -> Self {
        Self {
            text: symbols.iter().collect(),
            symbol_count: symbols.len(),
        }
    }

    /// Number of symbols (not bytes).
    #[inline]
    pub fn len(&self) -> usize {
        self.symbol_count
    }

    /// Always `false`: ids have at least two symbols.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbol_count == 0
    }

    /// Textual rendering.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Iterates the symbols in order.
    pub fn symbols(&self) -> Chars<'_> {
        self.text.chars()
    }

    /// Consumes the id, returning its textual rendering.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for NanoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for NanoId {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<NanoId> for String {
    fn from(id: NanoId) -> Self {
        id.text
    }
}
