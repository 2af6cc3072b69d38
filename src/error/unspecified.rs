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

/// An error with absolutely no details.
///
/// The reason for a failure here is always the same: the requested backend
/// isn't usable on this CPU or wasn't compiled for this target. Users can
/// implement `From<sha256d::error::Unspecified>` to map this to their own
/// error types:
///
/// ```
/// use sha256d::{error, sha256};
///
/// #[derive(Debug)]
/// enum Error {
///     NoHardwareSupport,
/// }
///
/// impl From<error::Unspecified> for Error {
///     fn from(_: error::Unspecified) -> Self { Error::NoHardwareSupport }
/// }
///
/// fn sha_extensions() -> Result<sha256::Backend, Error> {
///     Ok(sha256::Backend::new(sha256::Id::ShaNi)?)
/// }
///
/// let _ = sha_extensions();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unspecified;

// This is required for the implementation of `std::error::Error`.
impl core::fmt::Display for Unspecified {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("sha256d::error::Unspecified")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Unspecified {}
