// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # nanotoken_rand
//!
//! Entropy sources for the nanotoken identifier generator.
//!
//! The generator never talks to the operating system directly: every random
//! byte it consumes comes through the [`EntropySource`] capability, so the
//! production CSPRNG and deterministic test doubles are interchangeable.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`FnEntropySource`]: Adapter turning a closure into an entropy source
//!
//! ## Traits
//!
//! - [`EntropySource`]: Single fallible buffer-fill operation
//!
//! ## Example
//!
//! ```rust
//! use nanotoken_rand::{EntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut batch = [0u8; 34];
//! entropy.fill_bytes(&mut batch).expect("Failed to fill_bytes(..)");
//! ```
//!
//! ## Concurrency
//!
//! [`SystemEntropySource`] is stateless and `Send + Sync`. Custom sources
//! shared across threads must be safe for concurrent invocation themselves;
//! the generator adds no locking around them.
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod fn_source;
mod support;
mod system;
mod traits;

pub use error::{BoxedCause, EntropyError};
pub use fn_source::FnEntropySource;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
