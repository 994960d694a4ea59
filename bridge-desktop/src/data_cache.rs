//! In-memory process-wide telemetry cache.
//!
//! Producers reach this cache only through [`TelemetrySink`], while UI and
//! diagnostics code read it directly. Values may lag the core's locked state
//! but each one was committed there first.

use std::sync::Arc;

use bridge_traits::TelemetrySink;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
struct VideoFields {
    decoder_name: String,
    is_hw_decoder: bool,
    deint_method: String,
    pixel_format: String,
    width: i32,
    height: i32,
    fps: f32,
    dar: f32,
}

impl Default for VideoFields {
    fn default() -> Self {
        Self {
            decoder_name: "unknown".to_string(),
            is_hw_decoder: false,
            deint_method: "unknown".to_string(),
            pixel_format: "unknown".to_string(),
            width: 0,
            height: 0,
            fps: 0.0,
            dar: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct AudioFields {
    decoder_name: String,
    channels: String,
    sample_rate: i32,
    bits_per_sample: i32,
}

impl Default for AudioFields {
    fn default() -> Self {
        Self {
            decoder_name: "unknown".to_string(),
            channels: "unknown".to_string(),
            sample_rate: 0,
            bits_per_sample: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct StateFields {
    render_clock_sync: bool,
    seeking: bool,
}

/// Point-in-time copy of every cached field, for overlays and exporters.
///
/// Groups are read one after another, so a snapshot is consistent within a
/// group (video, audio, state) but not across groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub video_decoder_name: String,
    pub video_hw_decoder: bool,
    pub video_deint_method: String,
    pub video_pixel_format: String,
    pub video_width: i32,
    pub video_height: i32,
    pub video_fps: f32,
    pub video_dar: f32,
    pub audio_decoder_name: String,
    pub audio_channels: String,
    pub audio_sample_rate: i32,
    pub audio_bits_per_sample: i32,
    pub render_clock_sync: bool,
    pub seeking: bool,
}

static SHARED_CACHE: Lazy<Arc<DataCacheCore>> = Lazy::new(|| Arc::new(DataCacheCore::new()));

/// Desktop telemetry cache.
///
/// Shared by every playback session in the process. Nothing is cleared when a
/// session ends; the next session overwrites the values.
#[derive(Debug, Default)]
pub struct DataCacheCore {
    video: RwLock<VideoFields>,
    audio: RwLock<AudioFields>,
    state: RwLock<StateFields>,
}

impl DataCacheCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache. Every caller gets the same instance, so UI
    /// code reads what any session wrote.
    pub fn shared() -> Arc<DataCacheCore> {
        Arc::clone(&SHARED_CACHE)
    }

    // ------------------------------------------------------------------------
    // Video
    // ------------------------------------------------------------------------

    pub fn video_decoder_name(&self) -> String {
        self.video.read().decoder_name.clone()
    }

    pub fn is_video_hw_decoder(&self) -> bool {
        self.video.read().is_hw_decoder
    }

    pub fn video_deint_method(&self) -> String {
        self.video.read().deint_method.clone()
    }

    pub fn video_pixel_format(&self) -> String {
        self.video.read().pixel_format.clone()
    }

    /// Returns `(width, height)` as one value.
    pub fn video_dimensions(&self) -> (i32, i32) {
        let video = self.video.read();
        (video.width, video.height)
    }

    pub fn video_fps(&self) -> f32 {
        self.video.read().fps
    }

    pub fn video_dar(&self) -> f32 {
        self.video.read().dar
    }

    // ------------------------------------------------------------------------
    // Audio
    // ------------------------------------------------------------------------

    pub fn audio_decoder_name(&self) -> String {
        self.audio.read().decoder_name.clone()
    }

    pub fn audio_channels(&self) -> String {
        self.audio.read().channels.clone()
    }

    pub fn audio_sample_rate(&self) -> i32 {
        self.audio.read().sample_rate
    }

    pub fn audio_bits_per_sample(&self) -> i32 {
        self.audio.read().bits_per_sample
    }

    // ------------------------------------------------------------------------
    // Render / player state
    // ------------------------------------------------------------------------

    pub fn is_render_clock_sync(&self) -> bool {
        self.state.read().render_clock_sync
    }

    pub fn is_seeking(&self) -> bool {
        self.state.read().seeking
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        let video = self.video.read().clone();
        let audio = self.audio.read().clone();
        let state = *self.state.read();

        TelemetrySnapshot {
            video_decoder_name: video.decoder_name,
            video_hw_decoder: video.is_hw_decoder,
            video_deint_method: video.deint_method,
            video_pixel_format: video.pixel_format,
            video_width: video.width,
            video_height: video.height,
            video_fps: video.fps,
            video_dar: video.dar,
            audio_decoder_name: audio.decoder_name,
            audio_channels: audio.channels,
            audio_sample_rate: audio.sample_rate,
            audio_bits_per_sample: audio.bits_per_sample,
            render_clock_sync: state.render_clock_sync,
            seeking: state.seeking,
        }
    }
}

impl TelemetrySink for DataCacheCore {
    fn set_video_decoder_name(&self, name: &str, is_hw: bool) {
        trace!(name, is_hw, "cache: video decoder");
        let mut video = self.video.write();
        video.decoder_name = name.to_string();
        video.is_hw_decoder = is_hw;
    }

    fn set_video_deint_method(&self, method: &str) {
        self.video.write().deint_method = method.to_string();
    }

    fn set_video_pixel_format(&self, pix_format: &str) {
        self.video.write().pixel_format = pix_format.to_string();
    }

    fn set_video_dimensions(&self, width: i32, height: i32) {
        let mut video = self.video.write();
        video.width = width;
        video.height = height;
    }

    fn set_video_fps(&self, fps: f32) {
        self.video.write().fps = fps;
    }

    fn set_video_dar(&self, dar: f32) {
        self.video.write().dar = dar;
    }

    fn set_audio_decoder_name(&self, name: &str) {
        trace!(name, "cache: audio decoder");
        self.audio.write().decoder_name = name.to_string();
    }

    fn set_audio_channels(&self, channels: &str) {
        self.audio.write().channels = channels.to_string();
    }

    fn set_audio_sample_rate(&self, sample_rate: i32) {
        self.audio.write().sample_rate = sample_rate;
    }

    fn set_audio_bits_per_sample(&self, bits_per_sample: i32) {
        self.audio.write().bits_per_sample = bits_per_sample;
    }

    fn set_render_clock_sync(&self, enabled: bool) {
        self.state.write().render_clock_sync = enabled;
    }

    fn set_state_seeking(&self, active: bool) {
        trace!(active, "cache: seeking");
        self.state.write().seeking = active;
    }
}
