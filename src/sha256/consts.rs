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

use super::{Block, BLOCK_LEN, CHAINING_WORDS, DIGEST_LEN};

pub(super) const ROUNDS: usize = 64;

/// The round constants: the first 32 bits of the fractional parts of the cube
/// roots of the first 64 primes.
// FIPS 180-4 4.2.2
#[rustfmt::skip]
pub const K: [u32; ROUNDS] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5,
    0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3,
    0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc,
    0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7,
    0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
    0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3,
    0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5,
    0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208,
    0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// The initial hash value: the first 32 bits of the fractional parts of the
/// square roots of the first 8 primes.
// FIPS 180-4 5.3.3
#[rustfmt::skip]
pub const IV: [u32; CHAINING_WORDS] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// The single block that a 32-byte message pads to, with the message bytes
/// left zero.
///
/// The second hash of SHA-256d always has a 32-byte input, so it is always
/// this block with the first digest copied into its first half.
pub const PADDED_32: Block = padding_block(DIGEST_LEN, DIGEST_LEN);

/// The padding block that follows a message of exactly 64 bytes.
pub const PADDING_64: Block = padding_block(0, BLOCK_LEN);

// The final block of a `total_len`-byte message whose last `offset` bytes
// start the block. Those bytes are left zero.
const fn padding_block(offset: usize, total_len: usize) -> Block {
    let mut block = [0u8; BLOCK_LEN];
    block[offset] = 0x80;
    let bit_len = crate::polyfill::u64_from_usize(total_len) * 8;
    let bit_len = crate::endian::be_bytes_from_u64(bit_len);
    let mut i = 0;
    while i < bit_len.len() {
        block[BLOCK_LEN - bit_len.len() + i] = bit_len[i];
        i += 1;
    }
    block
}
