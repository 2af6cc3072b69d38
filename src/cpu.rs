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

//! CPU capability detection.
//!
//! Each feature a backend depends on is represented by a zero-sized witness
//! type that can only be obtained through [`GetFeature`] after detection has
//! succeeded, so a kernel that takes a witness by value can't be reached on a
//! CPU that lacks the feature.

use crate::polyfill::once_cell::race;
use cfg_if::cfg_if;
use core::num::NonZeroU32;

pub(crate) trait GetFeature<T> {
    fn get_feature(&self) -> Option<T>;
}

macro_rules! impl_get_feature {
    { $( $(#[$meta:meta])* $name:ident => $mask:expr ),+ $(,)? } => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy)]
            pub(crate) struct $name(crate::cpu::Features);

            impl $name {
                #[allow(dead_code)]
                pub(crate) const fn mask() -> u32 {
                    $mask
                }
            }

            impl crate::cpu::GetFeature<$name> for crate::cpu::Features {
                #[inline(always)]
                fn get_feature(&self) -> Option<$name> {
                    let mask = $name::mask();
                    if (self.caps() & mask) == mask {
                        Some($name(*self))
                    } else {
                        None
                    }
                }
            }
        )+
    };
}

/// A witness indicating that CPU features have been detected and cached.
///
/// This is a zero-sized type so that it can be "stored" wherever convenient.
#[derive(Clone, Copy)]
pub(crate) struct Features(());

impl Features {
    #[inline(always)]
    fn caps(self) -> u32 {
        // `features()` is the only constructor and it initializes `CAPS`.
        CAPS.get().map_or(0, NonZeroU32::get) & !INITIALIZED_MASK
    }
}

// Set in every stored value so that "no features" is distinguishable from
// "not yet detected".
const INITIALIZED_MASK: u32 = 1 << 31;

static CAPS: race::OnceNonZeroU32 = race::OnceNonZeroU32::new();

#[inline(always)]
pub(crate) fn features() -> Features {
    let _: NonZeroU32 = CAPS.get_or_init(|| {
        let caps = if cfg!(feature = "unstable-testing-no-accel") {
            0
        } else {
            detect::caps_static() | detect::detect_features()
        };
        debug_assert_eq!(caps & INITIALIZED_MASK, 0);
        NonZeroU32::new(caps | INITIALIZED_MASK).unwrap_or(NonZeroU32::MIN)
    });
    Features(())
}

cfg_if! {
    if #[cfg(target_arch = "x86_64")] {
        pub(crate) mod intel;
        use intel as detect;
    } else if #[cfg(all(target_arch = "aarch64", target_endian = "little"))] {
        pub(crate) mod arm;
        use arm as detect;
    } else {
        mod detect {
            pub(super) const fn caps_static() -> u32 {
                0
            }
            pub(super) fn detect_features() -> u32 {
                0
            }
        }
    }
}
