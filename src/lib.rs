// Copyright 2025 The sha256d Authors.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

//! SHA-256 and double SHA-256 (SHA-256d), the hash primitives behind
//! transaction IDs, block hashes, Merkle tree nodes, and address checksums.
//!
//! Every backend computes the same FIPS 180-4 compression function. The
//! fastest backend supported by the running CPU is selected once, on first
//! use, and cached for the rest of the process. Callers that need a specific
//! backend (e.g. for differential testing) can construct a [`sha256::Backend`]
//! explicitly.
//!
//! ```
//! use sha256d::sha256;
//!
//! let txid = sha256::hash_twice(b"hello");
//! assert_eq!(txid, sha256::hash(sha256::hash(b"hello").as_ref()));
//! ```
//!
//! # Feature Flags
//!
//! <table>
//! <tr><th>Feature
//!     <th>Description
//! <tr><td><code>alloc (default)</code>
//!     <td>Enable the <code>test</code> module, which requires a heap.
//! <tr><td><code>std</code>
//!     <td>Enable features that use libstd, in particular
//!         <code>std::error::Error</code> integration. Implies `alloc`.
//! <tr><td><code>slow_tests</code>
//!     <td>Run the exhaustive incremental-hashing tests.
//! <tr><td><code>test_logging</code>
//!     <td>Print each test case as it is parsed from a test vector file.
//! <tr><td><code>unstable-testing-no-accel</code>
//!     <td>Pretend the CPU has no hardware acceleration, so that dispatch
//!         always selects the portable backend.
//! </table>

#![doc(html_root_url = "https://docs.rs/sha256d/0.1.0")]
#![allow(
    clippy::inline_always,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::unreadable_literal
)]
#![deny(variant_size_differences)]
#![forbid(unused_results)]
#![no_std]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod polyfill;

mod cpu;
pub mod digest;
mod endian;
pub mod error;
pub mod sha256;


pub use crate::digest::{Digest, DigestShort};
