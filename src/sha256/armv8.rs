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

//! Compression using the ARMv8 SHA-256 instructions.

#![cfg(all(target_arch = "aarch64", target_endian = "little"))]

use super::{
    consts::{K, ROUNDS},
    Block, State,
};
use crate::cpu::arm::Sha256;
use core::arch::aarch64::*;

pub(super) fn block_data_order(state: &mut State, blocks: &[Block], cpu: Sha256) {
    let _: Sha256 = cpu;
    // SAFETY: `cpu` proves the SHA-256 instructions are available.
    unsafe { block_data_order_sha2(state, blocks) }
}

#[target_feature(enable = "sha2")]
unsafe fn block_data_order_sha2(state: &mut State, blocks: &[Block]) {
    let k: &[u32; ROUNDS] = &K;
    let mut abcd = vld1q_u32(state.0.as_ptr());
    let mut efgh = vld1q_u32(state.0.as_ptr().add(4));

    for block in blocks {
        let abcd_save = abcd;
        let efgh_save = efgh;

        let p = block.as_ptr();
        let mut s = [
            vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(p))),
            vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(p.add(16)))),
            vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(p.add(32)))),
            vreinterpretq_u32_u8(vrev32q_u8(vld1q_u8(p.add(48)))),
        ];

        for i in 0..16 {
            let kw = vaddq_u32(s[i % 4], vld1q_u32(k.as_ptr().add(4 * i)));
            let abcd_prev = abcd;
            abcd = vsha256hq_u32(abcd_prev, efgh, kw);
            efgh = vsha256h2q_u32(efgh, abcd_prev, kw);

            // Replace the words just consumed with the ones 16 positions
            // later, until all 64 have been produced.
            if i < 12 {
                s[i % 4] = vsha256su1q_u32(
                    vsha256su0q_u32(s[i % 4], s[(i + 1) % 4]),
                    s[(i + 2) % 4],
                    s[(i + 3) % 4],
                );
            }
        }

        abcd = vaddq_u32(abcd, abcd_save);
        efgh = vaddq_u32(efgh, efgh_save);
    }

    vst1q_u32(state.0.as_mut_ptr(), abcd);
    vst1q_u32(state.0.as_mut_ptr().add(4), efgh);
}
