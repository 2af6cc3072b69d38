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

use sha256d::{sha256, test, test_file, Digest};

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
use wasm_bindgen_test::{wasm_bindgen_test as test, wasm_bindgen_test_configure};

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
wasm_bindgen_test_configure!(run_in_browser);

fn digest_from(bytes: Vec<u8>) -> Digest {
    let bytes: [u8; sha256d::digest::DIGEST_LEN] = bytes.try_into().unwrap();
    Digest::from(bytes)
}

#[test]
fn sha256d_misc() {
    test::run(test_file!("sha256d_tests.txt"), |section, test_case| {
        match section {
            "" => {
                let input = test_case.consume_bytes("Input");
                let repeat = test_case.consume_usize("Repeat");
                let expected = test_case.consume_bytes("Output");

                let data = input.repeat(repeat);

                for backend in sha256::Backend::available() {
                    let actual = backend.hash_twice(&data);
                    assert_eq!(&expected, &actual.as_ref(), "{:?}", backend);

                    // The shortcut for the second pass is invisible.
                    let composed = backend.hash(backend.hash(&data).as_ref());
                    assert_eq!(actual, composed, "{:?}", backend);

                    let mut ctx = sha256::Context::with_backend(backend);
                    for _ in 0..repeat {
                        ctx.update(&input);
                    }
                    assert_eq!(ctx.finish_twice(), actual, "{:?}", backend);
                }
            }

            "merkle" => {
                let left = digest_from(test_case.consume_bytes("Left"));
                let right = digest_from(test_case.consume_bytes("Right"));
                let expected = test_case.consume_bytes("Output");

                let mut both = Vec::new();
                both.extend_from_slice(left.as_ref());
                both.extend_from_slice(right.as_ref());

                for backend in sha256::Backend::available() {
                    let actual = backend.merkle_hash(&left, &right);
                    assert_eq!(&expected, &actual.as_ref(), "{:?}", backend);
                    assert_eq!(actual, backend.hash_twice(&both), "{:?}", backend);
                }
                assert_eq!(&expected, &sha256::merkle_hash(&left, &right).as_ref());
            }

            _ => unreachable!("unknown section {}", section),
        }
        Ok(())
    });
}

/// `hash_twice(m) == hash(hash(m))` for every message length up to a few
/// blocks, so every padding shape of the inner hash is covered.
#[test]
fn sha256d_composes_for_all_lengths() {
    let message: Vec<u8> = (0..(3 * sha256::BLOCK_LEN)).map(|i| i as u8).collect();
    for len in 0..=message.len() {
        let m = &message[..len];
        assert_eq!(
            sha256::hash_twice(m),
            sha256::hash(sha256::hash(m).as_ref()),
            "len = {}",
            len
        );
    }
}

/// The padding of a 32-byte message, filled in with the message.
#[test]
fn sha256d_padded_32_is_the_padding_of_a_digest() {
    let digest = sha256::hash(b"inner");
    let mut block = sha256::PADDED_32;
    block[..sha256::DIGEST_LEN].copy_from_slice(digest.as_ref());

    let mut state = sha256::State::new();
    sha256::compress(&mut state, &block);
    assert_eq!(state.to_digest(), sha256::hash(digest.as_ref()));
}

/// The Bitcoin genesis block's hash is displayed with its bytes reversed.
#[test]
fn sha256d_genesis_block() {
    let header = test::from_hex(
        "01000000000000000000000000000000000000000000000000000000000000000000\
         00003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a\
         29ab5f49ffff001d1dac2b7c",
    )
    .unwrap();
    assert_eq!(header.len(), 80);

    let mut hash = sha256::hash_twice(&header).to_bytes();
    hash.reverse();
    assert_eq!(
        hash.to_vec(),
        test::from_hex("000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f")
            .unwrap()
    );
}
