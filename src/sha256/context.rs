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

use super::{finish, select_backend, Backend, State, BLOCK_LEN};
use crate::{digest::Digest, polyfill};

/// A context for multi-step (Init-Update-Finish) SHA-256 and SHA-256d.
///
/// # Examples
///
/// ```
/// use sha256d::sha256;
///
/// let one_shot = sha256::hash_twice(b"hello, world");
///
/// let mut ctx = sha256::Context::new();
/// ctx.update(b"hello");
/// ctx.update(b", ");
/// ctx.update(b"world");
/// let multi_part = ctx.finish_twice();
///
/// assert_eq!(one_shot, multi_part);
/// ```
#[derive(Clone)]
pub struct Context {
    backend: Backend,
    state: State,
    // Bytes of the current block not yet compressed; only the first
    // `num_pending` are meaningful.
    pending: [u8; BLOCK_LEN],
    num_pending: usize,
    completed_bytes: u64,
}

impl Context {
    /// Constructs a new context that uses [`select_backend`].
    pub fn new() -> Self {
        Self::with_backend(select_backend())
    }

    /// Constructs a new context that uses `backend`.
    pub fn with_backend(backend: Backend) -> Self {
        Self {
            backend,
            state: State::new(),
            pending: [0u8; BLOCK_LEN],
            num_pending: 0,
            completed_bytes: 0,
        }
    }

    /// Updates the digest with all the data in `data`.
    pub fn update(&mut self, data: &[u8]) {
        let mut data = data;

        if self.num_pending > 0 {
            let to_copy = core::cmp::min(BLOCK_LEN - self.num_pending, data.len());
            let (head, rest) = data.split_at(to_copy);
            self.pending[self.num_pending..][..to_copy].copy_from_slice(head);
            self.num_pending += to_copy;
            data = rest;

            if self.num_pending < BLOCK_LEN {
                return;
            }
            self.backend.compress(&mut self.state, &self.pending);
            self.completed_bytes += polyfill::u64_from_usize(BLOCK_LEN);
            self.num_pending = 0;
        }

        let (blocks, remainder) = polyfill::slice::as_chunks::<u8, BLOCK_LEN>(data);
        self.backend.compress_blocks(&mut self.state, blocks);
        self.completed_bytes += polyfill::u64_from_usize(blocks.len() * BLOCK_LEN);

        self.pending[..remainder.len()].copy_from_slice(remainder);
        self.num_pending = remainder.len();
    }

    /// Finalizes the digest calculation and returns SHA-256 of everything
    /// passed to [`Context::update`].
    pub fn finish(self) -> Digest {
        let len = self.completed_bytes + polyfill::u64_from_usize(self.num_pending);
        finish(
            &self.backend,
            self.state,
            &self.pending[..self.num_pending],
            len,
        )
    }

    /// Like [`Context::finish`], but returns SHA-256d.
    pub fn finish_twice(self) -> Digest {
        let backend = self.backend;
        backend.hash_digest(&self.finish())
    }

    /// The backend this context compresses with.
    #[inline(always)]
    pub fn backend(&self) -> Backend {
        self.backend
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Context {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
        fmt.debug_struct("Context")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha256::{hash, hash_twice};
    use std::vec::Vec;

    fn message(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(Context::new().finish(), hash(b""));
        assert_eq!(Context::new().finish_twice(), hash_twice(b""));
    }

    // Splitting one message at every point gives the same digest.
    #[test]
    fn test_every_split_point() {
        let message = message(3 * BLOCK_LEN + 7);
        let expected = hash(&message);
        for split in 0..=message.len() {
            let mut ctx = Context::new();
            ctx.update(&message[..split]);
            ctx.update(&message[split..]);
            assert_eq!(ctx.finish(), expected, "split = {}", split);
        }
    }

    #[test]
    fn test_byte_at_a_time() {
        let message = message(2 * BLOCK_LEN + 1);
        let mut ctx = Context::new();
        message.iter().for_each(|b| ctx.update(core::slice::from_ref(b)));
        assert_eq!(ctx.finish_twice(), hash_twice(&message));
    }

    #[test]
    fn test_clone_forks() {
        let mut ctx = Context::new();
        ctx.update(b"common prefix ");
        let mut other = ctx.clone();
        ctx.update(b"a");
        other.update(b"b");
        assert_eq!(ctx.finish(), hash(b"common prefix a"));
        assert_eq!(other.finish(), hash(b"common prefix b"));
    }

    #[test]
    fn test_with_backend() {
        for backend in Backend::available() {
            let mut ctx = Context::with_backend(backend);
            ctx.update(&message(1000));
            assert_eq!(ctx.backend(), backend);
            assert_eq!(ctx.finish(), Backend::reference().hash(&message(1000)));
        }
    }
}
