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

use sha256d::{sha256, test, test_file};

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
use wasm_bindgen_test::{wasm_bindgen_test as test, wasm_bindgen_test_configure};

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
wasm_bindgen_test_configure!(run_in_browser);

/// Test vectors from FIPS 180-4 and NIST, plus padding boundary lengths.
///
/// Every backend this CPU supports is checked, both one-shot and through
/// `Context`.
#[test]
fn sha256_misc() {
    test::run(test_file!("sha256_tests.txt"), |section, test_case| {
        assert_eq!(section, "");
        let input = test_case.consume_bytes("Input");
        let repeat = test_case.consume_usize("Repeat");
        let expected = test_case.consume_bytes("Output");

        let data = input.repeat(repeat);

        for backend in sha256::Backend::available() {
            let mut ctx = sha256::Context::with_backend(backend);
            for _ in 0..repeat {
                ctx.update(&input);
            }
            let actual_from_chunks = ctx.finish();
            assert_eq!(&expected, &actual_from_chunks.as_ref(), "{:?}", backend);

            let actual_from_one_shot = backend.hash(&data);
            assert_eq!(&expected, &actual_from_one_shot.as_ref(), "{:?}", backend);
        }

        assert_eq!(&expected, &sha256::hash(&data).as_ref());

        Ok(())
    });
}

/// Test some ways in which `Context::update` and/or `Context::finish`
/// could go wrong by testing every combination of updating three inputs
/// that vary from zero bytes to one byte larger than the block length.
///
/// These are not run in dev (debug) builds because they are too slow.
#[cfg(all(feature = "slow_tests", not(debug_assertions)))]
#[test]
fn sha256_test_i_u_f() {
    const MAX: usize = sha256::BLOCK_LEN + 1;

    let mut input = [0; MAX * 3];
    for (i, b) in input.iter_mut().enumerate() {
        *b = (i & 0xff) as u8;
    }

    for i in 0..MAX {
        for j in 0..MAX {
            for k in 0..MAX {
                let part1 = &input[..i];
                let part2 = &input[i..(i + j)];
                let part3 = &input[(i + j)..(i + j + k)];

                let mut ctx = sha256::Context::new();
                ctx.update(part1);
                ctx.update(part2);
                ctx.update(part3);
                let i_u_f = ctx.finish();

                let one_shot = sha256::hash(&input[..(i + j + k)]);

                assert_eq!(i_u_f, one_shot);
            }
        }
    }
}

#[test]
fn sha256_test_fmt() {
    assert_eq!(
        "09ca7e4eaa6e8ae9c7d261167129184883644d\
         07dfba7cbfbc4c8a2e08360d5b",
        &format!("{:?}", sha256::hash(b"hello, world"))
    );
}

/// Driving `compress` by hand, with the padding done by the caller, gives the
/// same result as `hash`.
#[test]
fn sha256_manual_chaining() {
    let mut blocks = [[0u8; sha256::BLOCK_LEN]; 2];
    blocks[0][..3].copy_from_slice(b"abc");
    blocks[0][3] = 0x80;
    blocks[0][63] = 3 * 8;

    let mut state = sha256::State::new();
    sha256::compress(&mut state, &blocks[0]);
    assert_eq!(state.to_digest(), sha256::hash(b"abc"));

    // A 64-byte message is followed by a whole padding block.
    blocks[0] = [0x61; sha256::BLOCK_LEN];
    blocks[1] = sha256::PADDING_64;
    let mut state = sha256::State::new();
    sha256::compress_blocks(&mut state, &blocks);
    assert_eq!(state.to_digest(), sha256::hash(&[0x61; 64]));
}

/// A saved midstate can be resumed.
#[test]
fn sha256_resume_from_words() {
    let block = [0x5a; sha256::BLOCK_LEN];
    let mut state = sha256::State::new();
    sha256::compress(&mut state, &block);

    let mut resumed = sha256::State::from_words(state.words());
    sha256::compress(&mut resumed, &block);
    sha256::compress(&mut state, &block);
    assert_eq!(resumed, state);
}

#[test]
fn sha256_traits() {
    test::compile_time_assert_copy::<sha256d::Digest>();
    test::compile_time_assert_send::<sha256d::Digest>();
    test::compile_time_assert_sync::<sha256d::Digest>();
    test::compile_time_assert_copy::<sha256::State>();
    test::compile_time_assert_copy::<sha256::Backend>();
    test::compile_time_assert_send::<sha256::Backend>();
    test::compile_time_assert_sync::<sha256::Backend>();
    test::compile_time_assert_clone::<sha256::Context>();
    test::compile_time_assert_send::<sha256::Context>();
}
