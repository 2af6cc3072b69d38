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

#![cfg(all(target_arch = "aarch64", target_endian = "little"))]

mod abi_assumptions {
    // To support big-endian, the byte-reversing loads in the SHA2 kernel
    // would have to change.
    const _ASSUMED_ENDIANNESS: () = assert!(cfg!(target_endian = "little"));
}

cfg_if::cfg_if! {
    if #[cfg(all(any(target_os = "android", target_os = "linux"), not(target_env = "uclibc")))] {
        mod linux;
        use linux as detect;
    } else if #[cfg(target_vendor = "apple")] {
        mod detect {
            // Every Apple aarch64 CPU implements the SHA2 instructions.
            pub const FORCE_DYNAMIC_DETECTION: u32 = 0;
            pub fn detect_features() -> u32 {
                super::Sha256::mask()
            }
        }
    } else if #[cfg(target_os = "windows")] {
        mod windows;
        use windows as detect;
    } else {
        // `uclibc` does not provide `getauxval`, and other operating systems
        // have no detection mechanism we use; rely on static detection.
        mod detect {
            pub const FORCE_DYNAMIC_DETECTION: u32 = 0;
            pub fn detect_features() -> u32 {
                0
            }
        }
    }
}

impl_get_feature! {
    /// The ARMv8 SHA-256 instructions (`SHA256H`, `SHA256H2`, `SHA256SU0`,
    /// `SHA256SU1`).
    Sha256 => 1 << 0,
}

pub(super) const fn caps_static() -> u32 {
    let caps = if cfg!(target_feature = "sha2") {
        Sha256::mask()
    } else {
        0
    };
    caps & !detect::FORCE_DYNAMIC_DETECTION
}

pub(super) fn detect_features() -> u32 {
    detect::detect_features()
}
