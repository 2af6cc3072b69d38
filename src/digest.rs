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

//! Fixed-size digest values.
//!
//! Both types hold bytes exactly as they appear on the wire: the big-endian
//! serialization of the final hash state. Use `as_ref` to get the value as a
//! `&[u8]`.

/// The length of a [`Digest`] in bytes.
pub const DIGEST_LEN: usize = 256 / 8;

/// The length of a [`DigestShort`] in bytes.
pub const DIGEST_SHORT_LEN: usize = 160 / 8;

macro_rules! define_digest {
    ( $(#[$meta:meta])* $name:ident, $len:expr ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Wraps `bytes`, which must already be in wire order.
            #[inline]
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Returns the digest bytes in wire order.
            #[inline]
            pub const fn to_bytes(self) -> [u8; $len] {
                self.0
            }
        }

        impl From<[u8; $len]> for $name {
            #[inline]
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $len] {
            #[inline]
            fn from(digest: $name) -> Self {
                digest.0
            }
        }

        impl AsRef<[u8]> for $name {
            #[inline(always)]
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
                write_hex_bytes(fmt, &self.0)
            }
        }
    };
}

define_digest! {
    /// A 256-bit digest, as produced by SHA-256 and SHA-256d.
    Digest, DIGEST_LEN
}

define_digest! {
    /// A 160-bit digest, as produced by the truncating hashes (e.g.
    /// RIPEMD-160 of SHA-256) used for addresses. This crate doesn't compute
    /// it; the type is shared so that all digests have one representation.
    DigestShort, DIGEST_SHORT_LEN
}

pub(crate) fn write_hex_bytes(
    fmt: &mut core::fmt::Formatter,
    bytes: &[u8],
) -> Result<(), core::fmt::Error> {
    for byte in bytes {
        write!(fmt, "{:02x}", byte)?;
    }
    Ok(())
}
