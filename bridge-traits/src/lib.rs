//! # Host Bridge Traits
//!
//! Contracts between the video player core and the host it runs in.
//!
//! ## Overview
//!
//! The core owns playback state; everything around it is supplied by the host
//! through the types in this crate:
//!
//! - [`TelemetrySink`](telemetry::TelemetrySink) - Process-wide telemetry cache the core mirrors into
//! - [`RenderInfo`](render::RenderInfo) - Capability descriptor published by the render backend
//! - [`PlatformProfile`](platform::PlatformProfile) - Platform policy tag (DTS-HD decode, fallback deinterlacer)
//! - [`LoggerSink`](time::LoggerSink) - Forward structured logs to host logging
//!
//! ## Platform Implementations
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Desktop  | `bridge-desktop`    | ✅ In Progress |
//! | Embedded | TBD                 | 📋 Planned |
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` on native targets. Decoder, render
//! and UI threads share the same instances.

pub mod error;
pub mod platform;
pub mod render;
pub mod telemetry;
pub mod time;

pub use error::BridgeError;

// Re-export commonly used types
pub use platform::{PlatformProfile, PlatformSendSync};
pub use render::{InterlaceMethod, RenderInfo};
pub use telemetry::{NullTelemetrySink, TelemetrySink};
pub use time::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
