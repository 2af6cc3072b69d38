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

//! SHA-256 (FIPS 180-4) and double SHA-256.
//!
//! If all the data is available in a single contiguous slice then [`hash`]
//! or [`hash_twice`] should be used. Otherwise, the digest can be calculated
//! in multiple steps using [`Context`]. Callers that manage the
//! Merkle–Damgård chaining themselves can use [`compress`] directly.
//!
//! All of the free functions here use the backend chosen by
//! [`select_backend`]. To use a particular backend, call the methods of a
//! [`Backend`] instead.

use crate::{digest::Digest, endian, polyfill};
use core::fmt;

pub use self::{
    backend::{select_backend, Backend, Id},
    consts::{IV, K, PADDED_32, PADDING_64},
    context::Context,
};

pub use crate::digest::DIGEST_LEN;

/// The length of a SHA-256 input block in bytes.
pub const BLOCK_LEN: usize = 512 / 8;

/// The number of 32-bit words in the chaining state.
pub const CHAINING_WORDS: usize = 256 / 32;

// The length of the bit-length suffix that ends the padding.
const LEN_LEN: usize = 64 / 8;

/// One 512-bit input to the compression function.
pub type Block = [u8; BLOCK_LEN];

/// The eight 32-bit chaining words `a..h`.
///
/// A `State` starts at [`IV`] and is advanced one [`Block`] at a time.
#[repr(C, align(16))]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct State([u32; CHAINING_WORDS]);

impl State {
    /// The initial state, [`IV`].
    #[inline]
    pub const fn new() -> Self {
        Self(IV)
    }

    /// Constructs a state from its words, e.g. a saved midstate.
    #[inline]
    pub const fn from_words(words: [u32; CHAINING_WORDS]) -> Self {
        Self(words)
    }

    /// The chaining words `a..h`.
    #[inline]
    pub const fn words(&self) -> [u32; CHAINING_WORDS] {
        self.0
    }

    /// Serializes the state as a digest: each word big-endian, `a` first.
    #[inline]
    pub fn to_digest(&self) -> Digest {
        Digest::new(endian::be_bytes_from_u32_array(&self.0))
    }

    /// The inverse of [`State::to_digest`].
    #[inline]
    pub fn from_digest(digest: &Digest) -> Self {
        Self(endian::u32_from_be_bytes_array(&digest.to_bytes()))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for State {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_list()
            .entries(self.0.iter().map(|w| Word(*w)))
            .finish()
    }
}

struct Word(u32);

impl fmt::Debug for Word {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{:08x}", self.0)
    }
}

/// Folds `block` into `state`.
pub fn compress(state: &mut State, block: &Block) {
    select_backend().compress(state, block)
}

/// Folds `blocks` into `state`, in order.
pub fn compress_blocks(state: &mut State, blocks: &[Block]) {
    select_backend().compress_blocks(state, blocks)
}

/// Returns the SHA-256 digest of `message`.
///
/// ```
/// use sha256d::sha256;
///
/// let digest = sha256::hash(b"abc");
/// assert_eq!(
///     format!("{:?}", digest),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn hash(message: &[u8]) -> Digest {
    select_backend().hash(message)
}

/// Returns SHA-256(SHA-256(`message`)).
pub fn hash_twice(message: &[u8]) -> Digest {
    select_backend().hash_twice(message)
}

/// Returns SHA-256(SHA-256(`left` || `right`)), the parent of two Merkle tree
/// nodes.
pub fn merkle_hash(left: &Digest, right: &Digest) -> Digest {
    select_backend().merkle_hash(left, right)
}

// Pads the final `tail` of a message of `len` bytes in total and folds the
// padding blocks into `state`.
fn finish(backend: &Backend, mut state: State, tail: &[u8], len: u64) -> Digest {
    debug_assert!(tail.len() < BLOCK_LEN);
    // Messages of 2^61 bytes or more would overflow the bit length.
    debug_assert!(len < (1 << 61));

    // FIPS 180-4 5.1.1
    let mut padding = [0u8; 2 * BLOCK_LEN];
    padding[..tail.len()].copy_from_slice(tail);
    padding[tail.len()] = 0x80;
    let padded_len = if tail.len() < BLOCK_LEN - LEN_LEN {
        BLOCK_LEN
    } else {
        2 * BLOCK_LEN
    };
    let bit_len: [u8; LEN_LEN] = endian::be_bytes_from_u64(len.wrapping_mul(8));
    padding[(padded_len - LEN_LEN)..padded_len].copy_from_slice(&bit_len);

    let (blocks, remainder) = polyfill::slice::as_chunks(&padding[..padded_len]);
    debug_assert!(remainder.is_empty());
    backend.compress_blocks(&mut state, blocks);
    state.to_digest()
}

mod backend;
mod consts;
mod context;
mod fallback;

#[cfg(all(target_arch = "aarch64", target_endian = "little"))]
mod armv8;
#[cfg(target_arch = "x86_64")]
mod shani;
#[cfg(target_arch = "x86_64")]
mod sse41;
