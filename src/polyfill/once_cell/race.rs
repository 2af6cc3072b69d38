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

//! Thread-safe, non-blocking, "first one wins" one-time cell.
//!
//! If two threads race to initialize the cell, they don't block; both run the
//! initialization function, but only one of them stores the result and every
//! caller observes that stored value.
//!
//! The initializers used in this crate are deterministic (CPU feature
//! probing, backend selection), so the losing thread computes the same value
//! as the winner.

// On success of `compare_exchange`, the value was zero, so there was nothing
// to acquire. On failure, the value was nonzero and was stored previously
// with `Release`, so we load it with `Acquire` for "happens-before".

use core::num::NonZeroU32;
use core::sync::atomic::{AtomicU32, Ordering};

/// A thread-safe cell which can be written to only once.
pub struct OnceNonZeroU32 {
    inner: AtomicU32,
}

impl OnceNonZeroU32 {
    /// Creates a new empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: AtomicU32::new(0),
        }
    }

    /// Gets the underlying value.
    #[inline]
    pub fn get(&self) -> Option<NonZeroU32> {
        let val = self.inner.load(Ordering::Acquire);
        NonZeroU32::new(val)
    }

    /// Gets the contents of the cell, initializing it with `f` if the cell was
    /// empty.
    ///
    /// If several threads concurrently run `get_or_init`, more than one `f` can
    /// be called. However, all threads will return the same value, produced by
    /// some `f`.
    pub fn get_or_init<F>(&self, f: F) -> NonZeroU32
    where
        F: FnOnce() -> NonZeroU32,
    {
        match self.get() {
            Some(it) => it,
            None => self.init(f),
        }
    }

    #[cold]
    #[inline(never)]
    fn init(&self, f: impl FnOnce() -> NonZeroU32) -> NonZeroU32 {
        let nz = f();
        match self
            .inner
            .compare_exchange(0, nz.get(), Ordering::Release, Ordering::Acquire)
        {
            Ok(_) => nz,
            // The winner stored a nonzero value.
            Err(old) => NonZeroU32::new(old).unwrap_or(nz),
        }
    }
}
