//! # Playback State Value Types
//!
//! Plain copies of one state partition, returned by the snapshot getters on
//! [`ProcessInfo`](crate::ProcessInfo). Each value is read under a single
//! lock acquisition, so its fields are consistent with each other. Two
//! values taken from different partitions are not.

use bridge_traits::InterlaceMethod;
use serde::{Deserialize, Serialize};

/// Name used for every string field before a producer reports a value.
pub const UNKNOWN: &str = "unknown";

/// Video decoder and frame geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCodecInfo {
    pub decoder_name: String,
    pub is_hw_decoder: bool,
    /// Informational name of the deinterlacer in use
    pub deint_method: String,
    pub pixel_format: String,
    pub width: i32,
    pub height: i32,
    pub fps: f32,
    /// Display aspect ratio
    pub dar: f32,
    /// Advertised deinterlace methods, in priority order
    pub deint_methods: Vec<InterlaceMethod>,
    pub deint_method_default: InterlaceMethod,
}

impl Default for VideoCodecInfo {
    fn default() -> Self {
        Self {
            decoder_name: UNKNOWN.to_string(),
            is_hw_decoder: false,
            deint_method: UNKNOWN.to_string(),
            pixel_format: UNKNOWN.to_string(),
            width: 0,
            height: 0,
            fps: 0.0,
            dar: 0.0,
            deint_methods: vec![InterlaceMethod::None],
            deint_method_default: InterlaceMethod::None,
        }
    }
}

/// Audio decoder and stream format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioCodecInfo {
    pub decoder_name: String,
    /// Channel layout description
    pub channels: String,
    pub sample_rate: i32,
    pub bits_per_sample: i32,
}

impl Default for AudioCodecInfo {
    fn default() -> Self {
        Self {
            decoder_name: UNKNOWN.to_string(),
            channels: UNKNOWN.to_string(),
            sample_rate: 0,
            bits_per_sample: 0,
        }
    }
}

/// Render buffer occupancy, always read and written as one triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderBuffers {
    pub queued: i32,
    pub discard: i32,
    pub free: i32,
}

impl RenderBuffers {
    pub fn new(queued: i32, discard: i32, free: i32) -> Self {
        Self {
            queued,
            discard,
            free,
        }
    }

    /// Total number of buffers the renderer reported.
    ///
    /// Counts are stored unchecked, so the sum is widened to `i64`.
    pub fn total(&self) -> i64 {
        i64::from(self.queued) + i64::from(self.discard) + i64::from(self.free)
    }
}

/// Render and seek state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStateInfo {
    pub clock_sync: bool,
    pub buffers: RenderBuffers,
    pub seeking: bool,
}
