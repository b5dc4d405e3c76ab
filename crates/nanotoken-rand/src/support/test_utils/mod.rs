// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for substituting entropy sources.
//!
//! Provides failure-injecting and deterministic entropy sources. Substituting
//! a source is the only way to make identifier generation reproducible.

mod mock_entropy_source;
mod sequence_entropy_source;
mod xorshift_entropy_source;

pub use mock_entropy_source::{MockEntropySource, MockEntropySourceBehaviour};
pub use sequence_entropy_source::SequenceEntropySource;
pub use xorshift_entropy_source::XorshiftEntropySource;
