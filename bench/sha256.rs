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

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sha256d::sha256::{self, Backend, State, BLOCK_LEN};

const INPUT_LENGTHS: &[usize] = &[
    // Benchmark that emphasizes overhead.
    0,
    32,
    64,
    // A block header.
    80,
    128,
    1024,
    8192,
    1024 * 1024,
];

const SMALL_MAX: usize = 8192;

#[repr(align(64))]
struct Small([u8; SMALL_MAX]);

// Each backend compressing one block, without any padding.
fn compress(c: &mut Criterion) {
    let block = [0u8; BLOCK_LEN];
    for backend in Backend::available() {
        c.bench_function(&format!("sha256::compress::{:?}", backend.id()), |b| {
            let mut state = State::new();
            b.iter(|| {
                backend.compress(&mut state, black_box(&block));
                black_box(state.words()[0])
            })
        });
    }
}

fn oneshot(c: &mut Criterion) {
    for backend in Backend::available() {
        for input_len in INPUT_LENGTHS {
            c.bench_with_input(
                BenchmarkId::new(format!("sha256d::hash_twice::{:?}", backend.id()), input_len),
                input_len,
                |b, &input_len| {
                    let small;
                    let v;
                    let input = if input_len <= SMALL_MAX {
                        // Use an aligned buffer to minimize alignment-related variance.
                        small = Small([0; SMALL_MAX]);
                        &small.0[..input_len]
                    } else {
                        v = vec![0u8; input_len];
                        &v[..]
                    };
                    b.iter(|| backend.hash_twice(black_box(input)))
                },
            );
        }
    }
}

fn merkle(c: &mut Criterion) {
    let left = sha256::hash(b"left");
    let right = sha256::hash(b"right");
    c.bench_function("sha256d::merkle_hash", |b| {
        b.iter(|| sha256::merkle_hash(black_box(&left), black_box(&right)))
    });
}

criterion_group!(benches, compress, oneshot, merkle);
criterion_main!(benches);
