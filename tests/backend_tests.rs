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

use sha256d::{
    error,
    sha256::{self, Backend, Block, Id, State, BLOCK_LEN},
};

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
use wasm_bindgen_test::{wasm_bindgen_test as test, wasm_bindgen_test_configure};

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
wasm_bindgen_test_configure!(run_in_browser);

fn random_block() -> Block {
    let mut block = [0u8; BLOCK_LEN];
    getrandom::getrandom(&mut block).unwrap();
    block
}

fn random_state() -> State {
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).unwrap();
    State::from_digest(&sha256d::Digest::from(bytes))
}

// Blocks chosen to stress carries, rotations, and the byte order of loads.
fn adversarial_blocks() -> Vec<Block> {
    let mut blocks = vec![[0x00; BLOCK_LEN], [0xff; BLOCK_LEN], [0x80; BLOCK_LEN]];

    let mut counting = [0u8; BLOCK_LEN];
    counting
        .iter_mut()
        .enumerate()
        .for_each(|(i, b)| *b = i as u8);
    blocks.push(counting);

    // A single set bit in each byte position.
    for i in 0..BLOCK_LEN {
        let mut block = [0u8; BLOCK_LEN];
        block[i] = 0x01;
        blocks.push(block);
        block[i] = 0x80;
        blocks.push(block);
    }

    // The final blocks of messages of lengths 0..56, before the bit length
    // is filled in.
    for len in 0..(BLOCK_LEN - 8) {
        let mut block = [0u8; BLOCK_LEN];
        block[..len].fill(0xa5);
        block[len] = 0x80;
        blocks.push(block);
    }

    blocks
}

fn adversarial_states() -> Vec<State> {
    vec![
        State::new(),
        State::from_words([0; 8]),
        State::from_words([u32::MAX; 8]),
        State::from_words([0x8000_0000; 8]),
        State::from_words([1, 2, 3, 4, 5, 6, 7, 8]),
    ]
}

#[test]
fn backend_reference_always_available() {
    assert_eq!(Backend::new(Id::Reference), Ok(Backend::reference()));
    assert!(Backend::available().any(|b| b.id() == Id::Reference));
}

#[test]
fn backend_new_fails_or_works() {
    for id in Id::ALL {
        match Backend::new(id) {
            Ok(backend) => assert_eq!(backend.id(), id),
            Err(error::Unspecified) => assert_ne!(id, Id::Reference),
        }
    }
}

/// Every backend agrees with the reference backend on single blocks.
#[test]
fn backend_equivalence_single_blocks() {
    let reference = Backend::reference();
    let mut blocks = adversarial_blocks();
    blocks.extend((0..256).map(|_| random_block()));

    let mut states = adversarial_states();
    states.extend((0..4).map(|_| random_state()));

    for backend in Backend::available() {
        for initial in &states {
            for block in &blocks {
                let mut expected = *initial;
                reference.compress(&mut expected, block);

                let mut actual = *initial;
                backend.compress(&mut actual, block);

                assert_eq!(actual, expected, "{:?} {:?} {:02x?}", backend, initial, block);
            }
        }
    }
}

/// Every backend chains multiple blocks the same way as the reference.
#[test]
fn backend_equivalence_multiple_blocks() {
    let reference = Backend::reference();
    let blocks: Vec<Block> = (0..17).map(|_| random_block()).collect();

    for backend in Backend::available() {
        for n in 0..=blocks.len() {
            let mut expected = State::new();
            reference.compress_blocks(&mut expected, &blocks[..n]);

            let mut actual = State::new();
            backend.compress_blocks(&mut actual, &blocks[..n]);

            assert_eq!(actual, expected, "{:?} n = {}", backend, n);
        }
    }
}

/// Every backend agrees on whole messages, including the padding.
#[test]
fn backend_equivalence_messages() {
    let reference = Backend::reference();
    let mut message = vec![0u8; 4 * BLOCK_LEN + 3];
    getrandom::getrandom(&mut message).unwrap();

    for backend in Backend::available() {
        for len in 0..=message.len() {
            let m = &message[..len];
            assert_eq!(backend.hash(m), reference.hash(m), "{:?} len = {}", backend, len);
        }
        let left = sha256::hash(b"left");
        let right = sha256::hash(b"right");
        assert_eq!(
            backend.merkle_hash(&left, &right),
            reference.merkle_hash(&left, &right)
        );
    }
}

#[test]
fn backend_select_is_most_preferred() {
    let selected = sha256::select_backend();
    assert_eq!(Some(selected), Backend::available().last());
    for _ in 0..100 {
        assert_eq!(sha256::select_backend(), selected);
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn backend_concurrent_hashing_is_deterministic() {
    let expected = sha256::hash_twice(b"concurrent");
    let selected = sha256::select_backend();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                (0..100)
                    .map(|_| (sha256::select_backend(), sha256::hash_twice(b"concurrent")))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (backend, digest) in handle.join().unwrap() {
            assert_eq!(backend, selected);
            assert_eq!(digest, expected);
        }
    }
}
