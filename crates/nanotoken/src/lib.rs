// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # nanotoken
//!
//! Short, URL-friendly, cryptographically random identifiers.
//!
//! Every symbol of an identifier is drawn uniformly from a configurable
//! alphabet using bitmask rejection sampling over bytes from an
//! [`EntropySource`], so alphabets whose size is not a power of two carry
//! no modulo bias.
//!
//! ## Core Types
//!
//! - [`Alphabet`]: Ordered set of symbols identifiers are drawn from
//! - [`Config`] / [`ConfigBuilder`]: Resolved (length, alphabet, entropy) triple
//! - [`Override`]: Single configuration mutation, applied in order
//! - [`NanoId`]: A generated identifier
//!
//! ## Defaults
//!
//! - Length: [`CANONICAL_LENGTH`] (21)
//! - Alphabet: [`CANONICAL_ALPHABET`] (`A-Z a-z 0-9 - _`)
//! - Entropy: [`SystemEntropySource`] (OS CSPRNG)
//!
//! ## Example
//!
//! ```rust
//! use nanotoken::{Config, generate};
//!
//! // Canonical 21-symbol id
//! let id = generate().expect("Failed to generate()");
//! assert_eq!(id.len(), 21);
//!
//! // Custom length and alphabet
//! let config = Config::builder()
//!     .length(12)
//!     .alphabet("0123456789abcdef")
//!     .build()
//!     .expect("Failed to build()");
//! let id = config.generate().expect("Failed to generate()");
//! assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
//! ```
//!
//! ## Uniqueness
//!
//! Identifiers are uniformly random, not globally unique: the collision
//! probability is governed by the birthday bound over
//! `alphabet.len() ^ length` possible values. Nothing is registered or
//! persisted.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod alphabet;
mod config;
mod error;
mod generate;
mod id;
mod sampler;

pub use alphabet::{Alphabet, CANONICAL_ALPHABET, MAX_ALPHABET_SIZE};
pub use config::{CANONICAL_LENGTH, Config, ConfigBuilder, MAX_LENGTH, MIN_LENGTH, Override};
pub use error::NanoIdError;
pub use generate::{generate, generate_custom, generate_with_length};
pub use id::NanoId;
pub use sampler::STEP_MULTIPLIER;

pub use nanotoken_rand::{EntropyError, EntropySource, FnEntropySource, SystemEntropySource};

#[cfg(any(test, feature = "test-utils"))]
pub use nanotoken_rand::test_utils;
