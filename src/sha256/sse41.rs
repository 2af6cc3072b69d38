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

//! SSSE3/SSE4.1 compression: the message schedule is computed four words at
//! a time in XMM registers while the rounds themselves run on the scalar
//! units, so the two overlap.

#![cfg(target_arch = "x86_64")]

use super::{
    consts::{K, ROUNDS},
    fallback, Block, State,
};
use crate::cpu::intel::Sse41;
use core::{arch::x86_64::*, num::Wrapping};

pub(super) fn block_data_order(state: &mut State, blocks: &[Block], cpu: Sse41) {
    let _: Sse41 = cpu;
    // SAFETY: `cpu` proves SSSE3 and SSE4.1 are available.
    unsafe { block_data_order_sse41(state, blocks) }
}

#[target_feature(enable = "ssse3,sse4.1")]
unsafe fn block_data_order_sse41(state: &mut State, blocks: &[Block]) {
    let k: &[u32; ROUNDS] = &K;
    // Byte-swaps each 32-bit lane, turning big-endian words into native ones.
    let flip = _mm_setr_epi8(3, 2, 1, 0, 7, 6, 5, 4, 11, 10, 9, 8, 15, 14, 13, 12);

    let mut chaining: fallback::Vars = state.0.map(Wrapping);

    for block in blocks {
        let p = block.as_ptr().cast::<__m128i>();
        // `x[0]` always holds the four schedule words for the next four
        // rounds and `x[1..]` the twelve after them.
        let mut x = [
            _mm_shuffle_epi8(_mm_loadu_si128(p), flip),
            _mm_shuffle_epi8(_mm_loadu_si128(p.add(1)), flip),
            _mm_shuffle_epi8(_mm_loadu_si128(p.add(2)), flip),
            _mm_shuffle_epi8(_mm_loadu_si128(p.add(3)), flip),
        ];

        let mut vars = chaining;
        for i in 0..16 {
            let round_k = _mm_loadu_si128(k.as_ptr().add(4 * i).cast());
            let kw = _mm_add_epi32(x[0], round_k);

            // Words 16..64 are computed 12 groups ahead of their rounds.
            let next = if i < 12 {
                schedule(x[0], x[1], x[2], x[3])
            } else {
                x[0]
            };
            x = [x[1], x[2], x[3], next];

            fallback::round(&mut vars, lane::<0>(kw));
            fallback::round(&mut vars, lane::<1>(kw));
            fallback::round(&mut vars, lane::<2>(kw));
            fallback::round(&mut vars, lane::<3>(kw));
        }

        chaining.iter_mut().zip(vars).for_each(|(h, v)| *h += v);
    }

    state.0 = chaining.map(|h| h.0);
}

#[target_feature(enable = "ssse3,sse4.1")]
#[inline]
#[allow(clippy::cast_sign_loss)]
unsafe fn lane<const N: i32>(v: __m128i) -> Wrapping<u32> {
    Wrapping(_mm_extract_epi32::<N>(v) as u32)
}

/// Computes W[t..t+4] from `x0 = W[t-16..t-12]` through `x3 = W[t-4..t]`.
#[target_feature(enable = "ssse3,sse4.1")]
#[inline]
unsafe fn schedule(x0: __m128i, x1: __m128i, x2: __m128i, x3: __m128i) -> __m128i {
    let w15 = _mm_alignr_epi8::<4>(x1, x0); // W[t-15..t-11]
    let w7 = _mm_alignr_epi8::<4>(x3, x2); // W[t-7..t-3]
    let partial = _mm_add_epi32(_mm_add_epi32(x0, w7), sigma_0(w15));

    // W[t] and W[t+1] need W[t-2] and W[t-1], the top half of `x3`.
    let lo = _mm_add_epi32(partial, sigma_1(_mm_srli_si128::<8>(x3)));

    // W[t+2] and W[t+3] need W[t] and W[t+1], the bottom half of `lo`.
    _mm_add_epi32(lo, _mm_slli_si128::<8>(sigma_1(lo)))
}

#[target_feature(enable = "ssse3,sse4.1")]
#[inline]
unsafe fn sigma_0(x: __m128i) -> __m128i {
    _mm_xor_si128(
        _mm_xor_si128(rotr::<7, 25>(x), rotr::<18, 14>(x)),
        _mm_srli_epi32::<3>(x),
    )
}

#[target_feature(enable = "ssse3,sse4.1")]
#[inline]
unsafe fn sigma_1(x: __m128i) -> __m128i {
    _mm_xor_si128(
        _mm_xor_si128(rotr::<17, 15>(x), rotr::<19, 13>(x)),
        _mm_srli_epi32::<10>(x),
    )
}

// `L` must be `32 - R`.
#[target_feature(enable = "ssse3,sse4.1")]
#[inline]
unsafe fn rotr<const R: i32, const L: i32>(x: __m128i) -> __m128i {
    _mm_or_si128(_mm_srli_epi32::<R>(x), _mm_slli_epi32::<L>(x))
}
