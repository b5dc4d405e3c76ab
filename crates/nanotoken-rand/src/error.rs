// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Boxed cause reported by a caller-supplied entropy source.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when filling a buffer with random data.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// Entropy source is unavailable and gave no further detail.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
    /// The OS CSPRNG reported a failure.
    #[error("system entropy source failed: {0}")]
    System(#[source] getrandom::Error),
    /// A caller-supplied entropy source reported a failure.
    #[error("entropy source failed: {0}")]
    Custom(#[source] BoxedCause),
}

impl EntropyError {
    /// Wraps an arbitrary cause reported by a custom entropy source.
    pub fn custom<E>(cause: E) -> Self
    where
        E: Into<BoxedCause>,
    {
        Self::Custom(cause.into())
    }
}
