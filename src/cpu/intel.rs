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

// "Intel" citations are for "Intel 64 and IA-32 Architectures Software
// Developer's Manual", Combined Volumes, December 2024.

#![cfg(target_arch = "x86_64")]

mod abi_assumptions {
    // Every x86_64 target has SSE2, so the XMM registers are always usable
    // and the OS always saves them; no XGETBV check is needed for the
    // 128-bit SSSE3/SSE4.1/SHA instructions.
    const _ASSUMES_SSE2: () =
        assert!(cfg!(target_feature = "sse") && cfg!(target_feature = "sse2"));
}

#[repr(u32)]
#[derive(Clone, Copy)]
enum Shift {
    Ssse3 = 0,
    Sse41 = 1,
    Sha = 2,
}

impl Shift {
    const fn mask(self) -> u32 {
        1 << (self as u32)
    }
}

impl_get_feature! {
    /// SSSE3 and SSE4.1, both needed by the vectorized message schedule.
    Sse41 => Shift::Ssse3.mask() | Shift::Sse41.mask(),

    /// The SHA extensions, plus the SSSE3/SSE4.1 shuffles and blends used to
    /// get the state in and out of the layout the SHA instructions expect.
    Sha => Shift::Ssse3.mask() | Shift::Sse41.mask() | Shift::Sha.mask(),
}

#[rustfmt::skip]
pub(super) const fn caps_static() -> u32 {
    0
    | if cfg!(target_feature = "ssse3") { Shift::Ssse3.mask() } else { 0 }
    | if cfg!(target_feature = "sse4.1") { Shift::Sse41.mask() } else { 0 }
    | if cfg!(target_feature = "sha") { Shift::Sha.mask() } else { 0 }
}

pub(super) fn detect_features() -> u32 {
    // SAFETY: CPUID is available on every x86_64 CPU.
    let CpuidSummary {
        leaf1_ecx,
        leaf7_ebx,
    } = unsafe { cpuid_all() };

    let mut caps = 0;

    // Intel: "12.7.2 Checking for SSSE3 Support"
    if check(leaf1_ecx, 9) {
        caps |= Shift::Ssse3.mask();

        // Intel: "12.12.2 Checking for Intel SSE4.1 Support"
        if check(leaf1_ecx, 19) {
            caps |= Shift::Sse41.mask();
        }
    }

    // Intel: "Intel SHA Extensions", CPUID.(EAX=07H, ECX=0):EBX.SHA[bit 29].
    if check(leaf7_ebx, 29) {
        caps |= Shift::Sha.mask();
    }

    caps
}

struct CpuidSummary {
    leaf1_ecx: u32,
    leaf7_ebx: u32,
}

// MSRV(1.66) avoids miscompilations when calling `__cpuid`;
// see https://github.com/rust-lang/rust/pull/101861.
// Newer toolchains make `__cpuid` safe; MSRV(1.72) still needs the `unsafe`.
#[allow(unused_unsafe)]
unsafe fn cpuid_all() -> CpuidSummary {
    use core::arch::x86_64 as arch;

    // Intel: "21.1.1 Notes on Where to Start".
    let leaf0 = unsafe { arch::__cpuid(0) };

    let leaf1_ecx = if leaf0.eax >= 1 {
        // SAFETY: `leaf0.eax >= 1` indicates leaf 1 is available.
        unsafe { arch::__cpuid(1) }.ecx
    } else {
        0
    };

    let leaf7_ebx = if leaf0.eax >= 7 {
        // SAFETY: `leaf0.eax >= 7` indicates leaf 7 is available.
        unsafe { arch::__cpuid_count(7, 0) }.ebx
    } else {
        0
    };

    CpuidSummary {
        leaf1_ecx,
        leaf7_ebx,
    }
}

#[inline(always)]
fn check(leaf: u32, bit: u32) -> bool {
    let shifted = 1 << bit;
    (leaf & shifted) == shifted
}
