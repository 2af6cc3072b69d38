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

use super::Sha256;

// `-C target_cpu=cortex-a72` (and `-C target_cpu=native` on Cortex-A72
// Raspberry Pi devices) reports `target_feature="sha2"` even though not all
// Cortex-A72 CPUs have the crypto extensions, so never trust the static
// value on Linux.
pub const FORCE_DYNAMIC_DETECTION: u32 = Sha256::mask();

pub fn detect_features() -> u32 {
    use libc::{getauxval, AT_HWCAP, HWCAP_SHA2};

    // SAFETY: `getauxval` has no preconditions.
    let caps = unsafe { getauxval(AT_HWCAP) };

    if caps & HWCAP_SHA2 == HWCAP_SHA2 {
        Sha256::mask()
    } else {
        0
    }
}
