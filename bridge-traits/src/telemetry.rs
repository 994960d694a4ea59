//! Telemetry Cache Abstraction
//!
//! Write path into the process-wide playback telemetry cache read by the UI,
//! the diagnostics overlay and external telemetry consumers.
//!
//! The core calls these setters while holding the lock of the state partition
//! the value belongs to, so the order of calls a sink observes for one
//! partition matches the order the values were committed. Implementations
//! must therefore return quickly and must never call back into the core.
//!
//! # Example
//!
//! ```ignore
//! use bridge_traits::telemetry::TelemetrySink;
//!
//! fn publish_resolution(sink: &dyn TelemetrySink) {
//!     sink.set_video_dimensions(1920, 1080);
//!     sink.set_video_fps(23.976);
//! }
//! ```

use crate::platform::PlatformSendSync;

/// Process-wide telemetry cache, write side.
///
/// Every setter is infallible: the cache is an in-memory store and the core
/// treats it as a write-only target.
pub trait TelemetrySink: PlatformSendSync {
    /// Video decoder display name together with the hardware-decode flag
    fn set_video_decoder_name(&self, name: &str, is_hw: bool);

    /// Informational name of the deinterlacer in use
    fn set_video_deint_method(&self, method: &str);

    fn set_video_pixel_format(&self, pix_format: &str);

    fn set_video_dimensions(&self, width: i32, height: i32);

    fn set_video_fps(&self, fps: f32);

    /// Display aspect ratio
    fn set_video_dar(&self, dar: f32);

    fn set_audio_decoder_name(&self, name: &str);

    /// Channel layout description (e.g. "FL, FR, FC, LFE, BL, BR")
    fn set_audio_channels(&self, channels: &str);

    fn set_audio_sample_rate(&self, sample_rate: i32);

    fn set_audio_bits_per_sample(&self, bits_per_sample: i32);

    fn set_render_clock_sync(&self, enabled: bool);

    fn set_state_seeking(&self, active: bool);
}

/// Sink that drops every value.
///
/// Useful for hosts that have no telemetry consumers, and in tests that only
/// exercise the core's own getters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTelemetrySink;

impl TelemetrySink for NullTelemetrySink {
    fn set_video_decoder_name(&self, _name: &str, _is_hw: bool) {}
    fn set_video_deint_method(&self, _method: &str) {}
    fn set_video_pixel_format(&self, _pix_format: &str) {}
    fn set_video_dimensions(&self, _width: i32, _height: i32) {}
    fn set_video_fps(&self, _fps: f32) {}
    fn set_video_dar(&self, _dar: f32) {}
    fn set_audio_decoder_name(&self, _name: &str) {}
    fn set_audio_channels(&self, _channels: &str) {}
    fn set_audio_sample_rate(&self, _sample_rate: i32) {}
    fn set_audio_bits_per_sample(&self, _bits_per_sample: i32) {}
    fn set_render_clock_sync(&self, _enabled: bool) {}
    fn set_state_seeking(&self, _active: bool) {}
}
