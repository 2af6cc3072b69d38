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

use super::{
    consts::{PADDED_32, PADDING_64},
    fallback, finish, Block, State, BLOCK_LEN, DIGEST_LEN,
};
use crate::{
    cpu::{self, GetFeature},
    digest::Digest,
    error,
    polyfill::{self, once_cell::race},
};
use core::{fmt, num::NonZeroU32};

/// Identifies an implementation of the compression function.
///
/// Every variant exists on every target; [`Backend::new`] reports whether
/// the one asked for can run here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Id {
    /// The portable implementation. Always available.
    Reference = 1,

    /// x86_64 with SSSE3 and SSE4.1: the message schedule is vectorized and
    /// the rounds are scalar.
    Sse41 = 2,

    /// x86_64 with the SHA extensions.
    ShaNi = 3,

    /// AArch64 with the ARMv8 SHA-256 instructions.
    Armv8 = 4,
}

impl Id {
    /// All backends, from least to most preferred.
    pub const ALL: [Self; 4] = [Self::Reference, Self::Sse41, Self::Armv8, Self::ShaNi];

    fn from_u32(value: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| *id as u32 == value)
    }
}

/// A usable implementation of the compression function.
///
/// A `Backend` can only be constructed for an [`Id`] whose hardware
/// prerequisites have been verified, so its methods never fail.
#[derive(Clone, Copy)]
pub struct Backend {
    id: Id,
    cpu: cpu::Features,
}

impl Backend {
    /// The portable backend.
    pub fn reference() -> Self {
        Self {
            id: Id::Reference,
            cpu: cpu::features(),
        }
    }

    /// Returns the backend `id` if it is compiled in and this CPU supports
    /// it.
    ///
    /// ```
    /// use sha256d::sha256::{Backend, Id};
    ///
    /// assert!(Backend::new(Id::Reference).is_ok());
    /// ```
    pub fn new(id: Id) -> Result<Self, error::Unspecified> {
        let candidate = Self {
            id,
            cpu: cpu::features(),
        };
        if candidate.is_supported() {
            Ok(candidate)
        } else {
            Err(error::Unspecified)
        }
    }

    /// Every backend that can run on this CPU, from least to most preferred.
    pub fn available() -> impl Iterator<Item = Self> {
        Id::ALL.into_iter().filter_map(|id| Self::new(id).ok())
    }

    /// Which implementation this is.
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    #[allow(clippy::match_like_matches_macro)]
    fn is_supported(&self) -> bool {
        match self.id {
            Id::Reference => true,
            #[cfg(target_arch = "x86_64")]
            Id::Sse41 => GetFeature::<cpu::intel::Sse41>::get_feature(&self.cpu).is_some(),
            #[cfg(target_arch = "x86_64")]
            Id::ShaNi => GetFeature::<cpu::intel::Sha>::get_feature(&self.cpu).is_some(),
            #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
            Id::Armv8 => GetFeature::<cpu::arm::Sha256>::get_feature(&self.cpu).is_some(),
            _ => false,
        }
    }

    /// Folds `block` into `state`.
    #[inline]
    pub fn compress(&self, state: &mut State, block: &Block) {
        self.compress_blocks(state, core::slice::from_ref(block))
    }

    /// Folds `blocks` into `state`, in order. The result is the same as
    /// calling [`Backend::compress`] once per block.
    pub fn compress_blocks(&self, state: &mut State, blocks: &[Block]) {
        match self.id {
            Id::Reference => fallback::block_data_order(state, blocks),
            #[cfg(target_arch = "x86_64")]
            Id::Sse41 => super::sse41::block_data_order(state, blocks, self.witness()),
            #[cfg(target_arch = "x86_64")]
            Id::ShaNi => super::shani::block_data_order(state, blocks, self.witness()),
            #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
            Id::Armv8 => super::armv8::block_data_order(state, blocks, self.witness()),
            _ => unsupported(self.id),
        }
    }

    // Re-derives the proof that this CPU can run the kernel.
    #[allow(dead_code)]
    #[inline(always)]
    fn witness<T>(&self) -> T
    where
        cpu::Features: GetFeature<T>,
    {
        self.cpu
            .get_feature()
            .unwrap_or_else(|| unsupported(self.id))
    }

    /// Returns the SHA-256 digest of `message`.
    pub fn hash(&self, message: &[u8]) -> Digest {
        let (blocks, tail) = polyfill::slice::as_chunks::<u8, BLOCK_LEN>(message);
        let mut state = State::new();
        self.compress_blocks(&mut state, blocks);
        finish(
            self,
            state,
            tail,
            polyfill::u64_from_usize(message.len()),
        )
    }

    /// Returns SHA-256(SHA-256(`message`)).
    pub fn hash_twice(&self, message: &[u8]) -> Digest {
        self.hash_digest(&self.hash(message))
    }

    /// Returns SHA-256(SHA-256(`left` || `right`)).
    pub fn merkle_hash(&self, left: &Digest, right: &Digest) -> Digest {
        let mut block = [0u8; BLOCK_LEN];
        block[..DIGEST_LEN].copy_from_slice(left.as_ref());
        block[DIGEST_LEN..].copy_from_slice(right.as_ref());

        let mut state = State::new();
        self.compress_blocks(&mut state, &[block, PADDING_64]);
        self.hash_digest(&state.to_digest())
    }

    // SHA-256 of a 32-byte input is always exactly one block.
    pub(super) fn hash_digest(&self, digest: &Digest) -> Digest {
        let mut block = PADDED_32;
        block[..DIGEST_LEN].copy_from_slice(digest.as_ref());

        let mut state = State::new();
        self.compress(&mut state, &block);
        state.to_digest()
    }
}

impl PartialEq for Backend {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Backend {}

impl fmt::Debug for Backend {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_tuple("Backend").field(&self.id).finish()
    }
}

#[cold]
#[inline(never)]
fn unsupported(id: Id) -> ! {
    panic!("sha256d: backend {:?} is not supported on this CPU", id)
}

static SELECTED: race::OnceNonZeroU32 = race::OnceNonZeroU32::new();

/// Returns the most preferred backend that this CPU supports.
///
/// The choice is made on the first call and is the same for every later
/// call from any thread.
pub fn select_backend() -> Backend {
    let id = SELECTED.get_or_init(|| {
        let id = Backend::available()
            .last()
            .map_or(Id::Reference, |backend| backend.id());
        NonZeroU32::new(id as u32).unwrap_or(NonZeroU32::MIN)
    });
    Backend {
        id: Id::from_u32(id.get()).unwrap_or(Id::Reference),
        cpu: cpu::features(),
    }
}
