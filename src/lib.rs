//! Workspace facade crate.
//!
//! This crate exposes the video player core as a single dependency. Host
//! applications can depend on `vp-core-workspace` and enable the documented
//! features (e.g., `desktop-shims`) without wiring each member crate.

pub use bridge_traits;
pub use core_playback;
pub use core_runtime;

#[cfg(feature = "desktop-shims")]
pub use bridge_desktop;
