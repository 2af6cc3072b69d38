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

//! The portable reference compression function. Every other backend must
//! produce exactly the same output.

#![allow(non_snake_case)]

use super::{
    consts::{K, ROUNDS},
    Block, State, CHAINING_WORDS,
};
use crate::endian;
use core::num::Wrapping;

pub(super) type Vars = [Wrapping<u32>; CHAINING_WORDS];

pub(super) fn block_data_order(state: &mut State, M: &[Block]) {
    let mut H: Vars = state.0.map(Wrapping);

    for M in M {
        // FIPS 180-4 6.2.2 Step 1
        let Mt: [u32; 16] = endian::u32_from_be_bytes_array(M);
        let mut W = [Wrapping(0u32); ROUNDS];
        W.iter_mut()
            .zip(Mt)
            .for_each(|(Wt, Mt)| *Wt = Wrapping(Mt));
        for t in 16..ROUNDS {
            W[t] = sigma_1(W[t - 2]) + W[t - 7] + sigma_0(W[t - 15]) + W[t - 16];
        }

        // FIPS 180-4 6.2.2 Step 2
        let mut vars = H;

        // FIPS 180-4 6.2.2 Step 3
        K.iter()
            .zip(W.iter())
            .for_each(|(Kt, Wt)| round(&mut vars, Wrapping(*Kt) + *Wt));

        // FIPS 180-4 6.2.2 Step 4
        H.iter_mut().zip(vars).for_each(|(Hi, v)| *Hi += v);
    }

    *state = State(H.map(|Hi| Hi.0));
}

/// One round of FIPS 180-4 6.2.2 Step 3, given `Kt + Wt`.
#[inline(always)]
pub(super) fn round(vars: &mut Vars, Kt_plus_Wt: Wrapping<u32>) {
    let [a, b, c, d, e, f, g, h] = *vars;
    let T1 = h + SIGMA_1(e) + ch(e, f, g) + Kt_plus_Wt;
    let T2 = SIGMA_0(a) + maj(a, b, c);
    *vars = [T1 + T2, a, b, c, d + T1, e, f, g];
}

// FIPS 180-4 4.1.2
#[inline(always)]
fn ch(x: Wrapping<u32>, y: Wrapping<u32>, z: Wrapping<u32>) -> Wrapping<u32> {
    (x & y) | (!x & z)
}

// FIPS 180-4 4.1.2
#[inline(always)]
fn maj(x: Wrapping<u32>, y: Wrapping<u32>, z: Wrapping<u32>) -> Wrapping<u32> {
    (x & y) | (x & z) | (y & z)
}

// FIPS 180-4 4.1.2
#[inline(always)]
fn SIGMA_0(x: Wrapping<u32>) -> Wrapping<u32> {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

// FIPS 180-4 4.1.2
#[inline(always)]
fn SIGMA_1(x: Wrapping<u32>) -> Wrapping<u32> {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

// FIPS 180-4 4.1.2
#[inline(always)]
fn sigma_0(x: Wrapping<u32>) -> Wrapping<u32> {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

// FIPS 180-4 4.1.2
#[inline(always)]
fn sigma_1(x: Wrapping<u32>) -> Wrapping<u32> {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}

#[inline(always)]
fn rotr(x: Wrapping<u32>, n: u32) -> Wrapping<u32> {
    Wrapping(x.0.rotate_right(n))
}
