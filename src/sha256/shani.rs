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

//! Compression using the x86 SHA extensions.
//!
//! SHA256RNDS2 wants the state as two vectors, ABEF and CDGH, so the state is
//! rearranged on the way in and back on the way out of each call.

#![cfg(target_arch = "x86_64")]

use super::{
    consts::{K, ROUNDS},
    Block, State,
};
use crate::cpu::intel::Sha;
use core::arch::x86_64::*;

pub(super) fn block_data_order(state: &mut State, blocks: &[Block], cpu: Sha) {
    let _: Sha = cpu;
    // SAFETY: `cpu` proves the SHA extensions, SSSE3, and SSE4.1 are
    // available.
    unsafe { block_data_order_sha(state, blocks) }
}

#[target_feature(enable = "sha,sse2,ssse3,sse4.1")]
unsafe fn block_data_order_sha(state: &mut State, blocks: &[Block]) {
    let k: &[u32; ROUNDS] = &K;
    let flip = _mm_setr_epi8(3, 2, 1, 0, 7, 6, 5, 4, 11, 10, 9, 8, 15, 14, 13, 12);

    let words = state.0.as_ptr().cast::<__m128i>();
    let dcba = _mm_loadu_si128(words);
    let efgh = _mm_loadu_si128(words.add(1));

    let cdab = _mm_shuffle_epi32::<0xB1>(dcba);
    let efgh = _mm_shuffle_epi32::<0x1B>(efgh);
    let mut abef = _mm_alignr_epi8::<8>(cdab, efgh);
    let mut cdgh = _mm_blend_epi16::<0xF0>(efgh, cdab);

    for block in blocks {
        let abef_save = abef;
        let cdgh_save = cdgh;

        let p = block.as_ptr().cast::<__m128i>();
        let mut w = [
            _mm_shuffle_epi8(_mm_loadu_si128(p), flip),
            _mm_shuffle_epi8(_mm_loadu_si128(p.add(1)), flip),
            _mm_shuffle_epi8(_mm_loadu_si128(p.add(2)), flip),
            _mm_shuffle_epi8(_mm_loadu_si128(p.add(3)), flip),
        ];

        for i in 0..16 {
            // From the fifth group on, the oldest words are replaced by the next
            // four just before they are needed.
            if i >= 4 {
                w[i % 4] = schedule(w[i % 4], w[(i + 1) % 4], w[(i + 2) % 4], w[(i + 3) % 4]);
            }
            let round_k = _mm_loadu_si128(k.as_ptr().add(4 * i).cast());
            let kw = _mm_add_epi32(w[i % 4], round_k);
            cdgh = _mm_sha256rnds2_epu32(cdgh, abef, kw);
            abef = _mm_sha256rnds2_epu32(abef, cdgh, _mm_shuffle_epi32::<0x0E>(kw));
        }

        abef = _mm_add_epi32(abef, abef_save);
        cdgh = _mm_add_epi32(cdgh, cdgh_save);
    }

    let feba = _mm_shuffle_epi32::<0x1B>(abef);
    let dchg = _mm_shuffle_epi32::<0xB1>(cdgh);
    let dcba = _mm_blend_epi16::<0xF0>(feba, dchg);
    let hgef = _mm_alignr_epi8::<8>(dchg, feba);

    let words = state.0.as_mut_ptr().cast::<__m128i>();
    _mm_storeu_si128(words, dcba);
    _mm_storeu_si128(words.add(1), hgef);
}

/// Computes the next four schedule words from the previous sixteen, oldest
/// first.
#[target_feature(enable = "sha,sse2,ssse3,sse4.1")]
#[inline]
unsafe fn schedule(v0: __m128i, v1: __m128i, v2: __m128i, v3: __m128i) -> __m128i {
    let t1 = _mm_sha256msg1_epu32(v0, v1);
    let t2 = _mm_alignr_epi8::<4>(v3, v2);
    let t3 = _mm_add_epi32(t1, t2);
    _mm_sha256msg2_epu32(t3, v3)
}
