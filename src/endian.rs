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

//! Big-endian conversion between byte arrays and 32- or 64-bit words.
//!
//! This is the only place where bytes become words or words become bytes.
//! The conversions are independent of the host's byte order.

struct SameLen<const WORDS: usize, const BYTES: usize>;

impl<const WORDS: usize, const BYTES: usize> SameLen<WORDS, BYTES> {
    const ASSERT: () = assert!(BYTES == WORDS * 4);
}

#[inline(always)]
pub(crate) fn u32_from_be_bytes_array<const WORDS: usize, const BYTES: usize>(
    bytes: &[u8; BYTES],
) -> [u32; WORDS] {
    let () = SameLen::<WORDS, BYTES>::ASSERT;
    let mut words = [0u32; WORDS];
    words
        .iter_mut()
        .zip(bytes.chunks_exact(4))
        .for_each(|(w, b)| *w = u32::from_be_bytes([b[0], b[1], b[2], b[3]]));
    words
}

#[inline(always)]
pub(crate) fn be_bytes_from_u32_array<const WORDS: usize, const BYTES: usize>(
    words: &[u32; WORDS],
) -> [u8; BYTES] {
    let () = SameLen::<WORDS, BYTES>::ASSERT;
    let mut bytes = [0u8; BYTES];
    bytes
        .chunks_exact_mut(4)
        .zip(words.iter())
        .for_each(|(b, w)| b.copy_from_slice(&w.to_be_bytes()));
    bytes
}

/// Usable in constant contexts, where the padding blocks are built.
#[inline(always)]
pub(crate) const fn be_bytes_from_u64(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}
