//! Platform-specific helper abstractions.
//!
//! Native targets require `Send + Sync` so bridge implementations can be
//! shared freely between decoder, render and UI threads. WebAssembly builds
//! run on a single thread and cannot satisfy those bounds, so the marker
//! below makes the requirement conditional without duplicating every trait
//! definition.
//!
//! [`PlatformProfile`] is the small tag that selects platform-specialised
//! playback policy (DTS-HD decode permission and the fallback deinterlacer).

use serde::{Deserialize, Serialize};

use crate::render::InterlaceMethod;

/// Marker trait that applies `Send + Sync` on native targets while becoming a
/// no-op on `wasm32`.
#[cfg(not(target_arch = "wasm32"))]
pub trait PlatformSendSync: Send + Sync {}

#[cfg(not(target_arch = "wasm32"))]
impl<T> PlatformSendSync for T where T: Send + Sync {}

#[cfg(target_arch = "wasm32")]
pub trait PlatformSendSync {}

#[cfg(target_arch = "wasm32")]
impl<T> PlatformSendSync for T {}

/// Platform variant used when constructing a process-info aggregator.
///
/// Each variant fixes the answers to the two policy queries a platform port
/// may specialise. Everything else about the aggregator is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PlatformProfile {
    /// Desktop-class hardware: DTS-HD decode allowed, full software deinterlacer.
    #[default]
    Generic,
    /// Constrained devices: DTS-HD is passed through only, half-rate deinterlacing.
    LowPower,
    /// Host-supplied policy.
    Custom {
        allow_dtshd_decode: bool,
        fallback_deint_method: InterlaceMethod,
    },
}

impl PlatformProfile {
    /// Returns whether DTS-HD audio may be decoded in software on this platform.
    pub fn allow_dtshd_decode(&self) -> bool {
        match self {
            PlatformProfile::Generic => true,
            PlatformProfile::LowPower => false,
            PlatformProfile::Custom {
                allow_dtshd_decode, ..
            } => *allow_dtshd_decode,
        }
    }

    /// Baseline software deinterlacer used when the preferred method is unsupported.
    pub fn fallback_deint_method(&self) -> InterlaceMethod {
        match self {
            PlatformProfile::Generic => InterlaceMethod::Deinterlace,
            PlatformProfile::LowPower => InterlaceMethod::DeinterlaceHalf,
            PlatformProfile::Custom {
                fallback_deint_method,
                ..
            } => *fallback_deint_method,
        }
    }
}
