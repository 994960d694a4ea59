//! # Process Info
//!
//! Thread-safe aggregator of the current playback state. Decoder threads,
//! render threads and seek control each update their own facet of the state;
//! the UI, diagnostics overlay and telemetry consumers read it back.
//!
//! ## Partitions
//!
//! State is split into three partitions, each behind its own lock, so
//! updates to unrelated partitions never contend:
//!
//! | Partition | Fields |
//! |-----------|--------|
//! | video | decoder name + hw flag, deinterlacer name, pixel format, dimensions, fps, DAR, supported deinterlace methods, default method |
//! | audio | decoder name, channel layout, sample rate, bits per sample |
//! | render | clock sync, render buffer triple, seeking flag, last [`RenderInfo`] |
//!
//! ## Telemetry mirroring
//!
//! Every mutator commits the new value locally and then writes the same value
//! to the injected [`TelemetrySink`] *before* releasing the partition lock.
//! The sink therefore sees writes for one partition in commit order and never
//! sees a value ahead of the local state.
//!
//! ## Lock order
//!
//! Operations that need two partitions (`update_render_info`,
//! `update_deinterlacing_methods`, `set_sw_deinterlacing_methods`,
//! `reset_video_codec_info`) always lock **render, then video**. No path
//! takes them the other way round.
//!
//! ## Usage
//!
//! ```rust
//! use bridge_traits::{InterlaceMethod, NullTelemetrySink, RenderInfo};
//! use core_playback::ProcessInfo;
//! use std::sync::Arc;
//!
//! let info = ProcessInfo::new(Arc::new(NullTelemetrySink));
//!
//! // decoder thread
//! info.set_video_decoder_name("ff-h264", false);
//! info.set_video_dimensions(1920, 1080);
//! info.set_sw_deinterlacing_methods();
//!
//! // render thread
//! info.update_render_info(RenderInfo::new().with_deint_method(InterlaceMethod::RenderBob));
//!
//! assert!(info.supports(InterlaceMethod::RenderBob));
//! assert_eq!(info.video_dimensions(), (1920, 1080));
//! ```

use std::fmt;
use std::sync::Arc;

use bridge_traits::{InterlaceMethod, PlatformProfile, RenderInfo, TelemetrySink};
use core_runtime::config::{CoreConfig, CoreConfigBuilder};
use parking_lot::Mutex;
use tracing::{debug, instrument, trace};
use uuid::Uuid;

use crate::deinterlace::{DeinterlaceMethods, SW_DEINTERLACE_METHODS};
use crate::error::{PlaybackError, Result};
use crate::info::{AudioCodecInfo, RenderBuffers, RenderStateInfo, VideoCodecInfo, UNKNOWN};

#[derive(Debug)]
struct VideoCodecState {
    decoder_name: String,
    is_hw_decoder: bool,
    deint_method: String,
    pixel_format: String,
    width: i32,
    height: i32,
    fps: f32,
    dar: f32,
    deint_methods: DeinterlaceMethods,
    deint_method_default: InterlaceMethod,
}

impl Default for VideoCodecState {
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
            deint_methods: DeinterlaceMethods::new(),
            deint_method_default: InterlaceMethod::None,
        }
    }
}

impl VideoCodecState {
    fn to_info(&self) -> VideoCodecInfo {
        VideoCodecInfo {
            decoder_name: self.decoder_name.clone(),
            is_hw_decoder: self.is_hw_decoder,
            deint_method: self.deint_method.clone(),
            pixel_format: self.pixel_format.clone(),
            width: self.width,
            height: self.height,
            fps: self.fps,
            dar: self.dar,
            deint_methods: self.deint_methods.to_vec(),
            deint_method_default: self.deint_method_default,
        }
    }
}

#[derive(Debug, Default)]
struct RenderState {
    clock_sync: bool,
    buffers: RenderBuffers,
    seeking: bool,
    render_info: RenderInfo,
}

/// Playback state aggregator for one playback session.
///
/// Create one per session with [`ProcessInfo::create`] (or [`ProcessInfo::new`]
/// in tests) and share it as `Arc<ProcessInfo>` between producer and reader
/// threads. Values mirrored into the telemetry sink stay there after the
/// session is dropped.
pub struct ProcessInfo {
    session_id: Uuid,
    profile: PlatformProfile,
    sink: Arc<dyn TelemetrySink>,
    video: Mutex<VideoCodecState>,
    audio: Mutex<AudioCodecInfo>,
    render: Mutex<RenderState>,
}

impl fmt::Debug for ProcessInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessInfo")
            .field("session_id", &self.session_id)
            .field("profile", &self.profile)
            .field("sink", &"TelemetrySink { ... }")
            .finish_non_exhaustive()
    }
}

impl ProcessInfo {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an aggregator with the [`PlatformProfile::Generic`] policy.
    pub fn new(sink: Arc<dyn TelemetrySink>) -> Self {
        Self::with_profile(sink, PlatformProfile::Generic)
    }

    /// Create an aggregator for a specific platform profile.
    ///
    /// Both codec partitions are reset immediately, which also publishes the
    /// defaults to the sink.
    pub fn with_profile(sink: Arc<dyn TelemetrySink>, profile: PlatformProfile) -> Self {
        let info = Self {
            session_id: Uuid::new_v4(),
            profile,
            sink,
            video: Mutex::new(VideoCodecState::default()),
            audio: Mutex::new(AudioCodecInfo::default()),
            render: Mutex::new(RenderState::default()),
        };

        debug!(session = %info.session_id, profile = ?profile, "Process info created");

        info.reset_video_codec_info();
        info.reset_audio_codec_info();
        info
    }

    /// Factory used by the player: builds the session from a validated config.
    pub fn create(config: &CoreConfig) -> Arc<Self> {
        Arc::new(Self::with_profile(
            Arc::clone(&config.telemetry_sink),
            config.platform_profile,
        ))
    }

    /// Build the config and the session in one step.
    pub fn from_builder(builder: CoreConfigBuilder) -> Result<Arc<Self>> {
        let config = builder.build()?;
        Ok(Self::create(&config))
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn platform_profile(&self) -> PlatformProfile {
        self.profile
    }

    // ========================================================================
    // Video codec
    // ========================================================================

    /// Restore every video field to its default and re-publish them.
    ///
    /// Also clears the seeking flag and the recorded [`RenderInfo`]: a new
    /// video stream means a fresh pipeline, and the renderer reports its
    /// capabilities again once it is configured.
    #[instrument(level = "debug", skip_all, fields(session = %self.session_id))]
    pub fn reset_video_codec_info(&self) {
        let mut render = self.render.lock();
        let mut video = self.video.lock();

        *video = VideoCodecState::default();
        render.render_info.reset();
        render.seeking = false;

        self.sink
            .set_video_decoder_name(&video.decoder_name, video.is_hw_decoder);
        self.sink.set_video_deint_method(&video.deint_method);
        self.sink.set_video_pixel_format(&video.pixel_format);
        self.sink.set_video_dimensions(video.width, video.height);
        self.sink.set_video_fps(video.fps);
        self.sink.set_video_dar(video.dar);
        self.sink.set_state_seeking(render.seeking);

        debug!("Video codec info reset");
    }

    pub fn set_video_decoder_name(&self, name: &str, is_hw: bool) {
        let mut video = self.video.lock();

        video.is_hw_decoder = is_hw;
        video.decoder_name = name.to_string();

        self.sink
            .set_video_decoder_name(&video.decoder_name, video.is_hw_decoder);
        trace!(session = %self.session_id, name, is_hw, "Video decoder set");
    }

    pub fn video_decoder_name(&self) -> String {
        self.video.lock().decoder_name.clone()
    }

    pub fn is_video_hw_decoder(&self) -> bool {
        self.video.lock().is_hw_decoder
    }

    /// Set the informational name of the deinterlacer in use.
    pub fn set_video_deint_method(&self, method: &str) {
        let mut video = self.video.lock();

        video.deint_method = method.to_string();

        self.sink.set_video_deint_method(&video.deint_method);
        trace!(session = %self.session_id, method, "Video deinterlacer set");
    }

    pub fn video_deint_method(&self) -> String {
        self.video.lock().deint_method.clone()
    }

    pub fn set_video_pixel_format(&self, pix_format: &str) {
        let mut video = self.video.lock();

        video.pixel_format = pix_format.to_string();

        self.sink.set_video_pixel_format(&video.pixel_format);
        trace!(session = %self.session_id, pix_format, "Video pixel format set");
    }

    pub fn video_pixel_format(&self) -> String {
        self.video.lock().pixel_format.clone()
    }

    /// Width and height are committed and published together.
    pub fn set_video_dimensions(&self, width: i32, height: i32) {
        let mut video = self.video.lock();

        video.width = width;
        video.height = height;

        self.sink.set_video_dimensions(video.width, video.height);
        trace!(session = %self.session_id, width, height, "Video dimensions set");
    }

    /// Returns `(width, height)` from the same commit.
    pub fn video_dimensions(&self) -> (i32, i32) {
        let video = self.video.lock();
        (video.width, video.height)
    }

    pub fn set_video_fps(&self, fps: f32) {
        let mut video = self.video.lock();

        video.fps = fps;

        self.sink.set_video_fps(video.fps);
        trace!(session = %self.session_id, fps, "Video fps set");
    }

    pub fn video_fps(&self) -> f32 {
        self.video.lock().fps
    }

    /// Set the display aspect ratio.
    pub fn set_video_dar(&self, dar: f32) {
        let mut video = self.video.lock();

        video.dar = dar;

        self.sink.set_video_dar(video.dar);
        trace!(session = %self.session_id, dar, "Video DAR set");
    }

    pub fn video_dar(&self) -> f32 {
        self.video.lock().dar
    }

    /// Copy of the whole video partition from one lock acquisition.
    pub fn video_codec_info(&self) -> VideoCodecInfo {
        self.video.lock().to_info()
    }

    // ========================================================================
    // Deinterlacing capabilities
    // ========================================================================

    /// Baseline software deinterlacer for this platform, used by callers when
    /// their preferred method is unsupported.
    pub fn fallback_deint_method(&self) -> InterlaceMethod {
        self.profile.fallback_deint_method()
    }

    /// Advertise the software deinterlacers and make full-rate
    /// [`InterlaceMethod::Deinterlace`] the default.
    ///
    /// Methods from the last recorded [`RenderInfo`] are merged in as with
    /// [`update_deinterlacing_methods`](Self::update_deinterlacing_methods).
    /// The set and the default change in one critical section.
    pub fn set_sw_deinterlacing_methods(&self) {
        let render = self.render.lock();
        let mut video = self.video.lock();

        self.apply_deinterlacing_methods(&render, &mut video, &SW_DEINTERLACE_METHODS);
        video.deint_method_default = InterlaceMethod::Deinterlace;
    }

    /// Replace the advertised deinterlace methods with `methods`, then merge in
    /// the renderer's methods and make sure [`InterlaceMethod::None`] is present.
    pub fn update_deinterlacing_methods(&self, methods: &[InterlaceMethod]) {
        let render = self.render.lock();
        let mut video = self.video.lock();

        self.apply_deinterlacing_methods(&render, &mut video, methods);
    }

    fn apply_deinterlacing_methods(
        &self,
        render: &RenderState,
        video: &mut VideoCodecState,
        candidates: &[InterlaceMethod],
    ) {
        video.deint_methods = DeinterlaceMethods::from_candidates(candidates.iter().copied());
        let added = video
            .deint_methods
            .merge_render_methods(&render.render_info.deint_methods);

        debug!(
            session = %self.session_id,
            candidates = candidates.len(),
            added,
            methods = ?video.deint_methods.as_slice(),
            "Deinterlacing methods updated"
        );
    }

    /// Linear membership test against the advertised set.
    pub fn supports(&self, method: InterlaceMethod) -> bool {
        self.video.lock().deint_methods.contains(method)
    }

    /// Copy of the advertised set, in priority order.
    pub fn deinterlacing_methods(&self) -> Vec<InterlaceMethod> {
        self.video.lock().deint_methods.to_vec()
    }

    /// Set the default method.
    ///
    /// Membership in the advertised set is not checked here; use
    /// [`validate_deinterlacing_method_default`](Self::validate_deinterlacing_method_default)
    /// when that matters.
    pub fn set_deinterlacing_method_default(&self, method: InterlaceMethod) {
        self.video.lock().deint_method_default = method;
        trace!(session = %self.session_id, %method, "Default deinterlacer set");
    }

    pub fn deinterlacing_method_default(&self) -> InterlaceMethod {
        self.video.lock().deint_method_default
    }

    /// Check that the default method is currently advertised.
    ///
    /// # Errors
    ///
    /// `UnsupportedDeinterlaceMethod` with the current set if it is not.
    pub fn validate_deinterlacing_method_default(&self) -> Result<InterlaceMethod> {
        let video = self.video.lock();
        let method = video.deint_method_default;

        if video.deint_methods.contains(method) {
            Ok(method)
        } else {
            Err(PlaybackError::UnsupportedDeinterlaceMethod {
                method,
                supported: video.deint_methods.to_vec(),
            })
        }
    }

    /// Pick the method to actually use: `preferred` if advertised, else the
    /// platform fallback if advertised, else [`InterlaceMethod::None`].
    pub fn resolve_deinterlace_method(&self, preferred: InterlaceMethod) -> InterlaceMethod {
        let video = self.video.lock();

        if video.deint_methods.contains(preferred) {
            return preferred;
        }

        let fallback = self.profile.fallback_deint_method();
        if video.deint_methods.contains(fallback) {
            trace!(session = %self.session_id, %preferred, %fallback, "Using fallback deinterlacer");
            return fallback;
        }

        InterlaceMethod::None
    }

    // ========================================================================
    // Audio codec
    // ========================================================================

    #[instrument(level = "debug", skip_all, fields(session = %self.session_id))]
    pub fn reset_audio_codec_info(&self) {
        let mut audio = self.audio.lock();

        *audio = AudioCodecInfo::default();

        self.sink.set_audio_decoder_name(&audio.decoder_name);
        self.sink.set_audio_channels(&audio.channels);
        self.sink.set_audio_sample_rate(audio.sample_rate);
        self.sink.set_audio_bits_per_sample(audio.bits_per_sample);

        debug!("Audio codec info reset");
    }

    pub fn set_audio_decoder_name(&self, name: &str) {
        let mut audio = self.audio.lock();

        audio.decoder_name = name.to_string();

        self.sink.set_audio_decoder_name(&audio.decoder_name);
        trace!(session = %self.session_id, name, "Audio decoder set");
    }

    pub fn audio_decoder_name(&self) -> String {
        self.audio.lock().decoder_name.clone()
    }

    /// Set the channel layout description.
    pub fn set_audio_channels(&self, channels: &str) {
        let mut audio = self.audio.lock();

        audio.channels = channels.to_string();

        self.sink.set_audio_channels(&audio.channels);
        trace!(session = %self.session_id, channels, "Audio channels set");
    }

    pub fn audio_channels(&self) -> String {
        self.audio.lock().channels.clone()
    }

    pub fn set_audio_sample_rate(&self, sample_rate: i32) {
        let mut audio = self.audio.lock();

        audio.sample_rate = sample_rate;

        self.sink.set_audio_sample_rate(audio.sample_rate);
        trace!(session = %self.session_id, sample_rate, "Audio sample rate set");
    }

    pub fn audio_sample_rate(&self) -> i32 {
        self.audio.lock().sample_rate
    }

    pub fn set_audio_bits_per_sample(&self, bits_per_sample: i32) {
        let mut audio = self.audio.lock();

        audio.bits_per_sample = bits_per_sample;

        self.sink.set_audio_bits_per_sample(audio.bits_per_sample);
        trace!(session = %self.session_id, bits_per_sample, "Audio bits per sample set");
    }

    pub fn audio_bits_per_sample(&self) -> i32 {
        self.audio.lock().bits_per_sample
    }

    /// Copy of the whole audio partition from one lock acquisition.
    pub fn audio_codec_info(&self) -> AudioCodecInfo {
        self.audio.lock().clone()
    }

    /// Whether DTS-HD streams may be decoded rather than passed through.
    ///
    /// Fixed platform policy; does not depend on any session state.
    pub fn allow_dtshd_decode(&self) -> bool {
        self.profile.allow_dtshd_decode()
    }

    // ========================================================================
    // Render
    // ========================================================================

    pub fn set_render_clock_sync(&self, enabled: bool) {
        let mut render = self.render.lock();

        render.clock_sync = enabled;

        self.sink.set_render_clock_sync(render.clock_sync);
        trace!(session = %self.session_id, enabled, "Render clock sync set");
    }

    pub fn is_render_clock_sync(&self) -> bool {
        self.render.lock().clock_sync
    }

    /// Record the renderer's capability descriptor, replacing the previous
    /// one, and merge its deinterlace methods into the advertised set.
    #[instrument(level = "debug", skip_all, fields(session = %self.session_id))]
    pub fn update_render_info(&self, info: RenderInfo) {
        let mut render = self.render.lock();
        render.render_info = info;

        let mut video = self.video.lock();
        let added = video
            .deint_methods
            .merge_render_methods(&render.render_info.deint_methods);

        debug!(
            render_methods = ?render.render_info.deint_methods,
            added,
            "Render info updated"
        );
    }

    /// Copy of the last recorded render capability descriptor.
    pub fn render_info(&self) -> RenderInfo {
        self.render.lock().render_info.clone()
    }

    /// Set queued, discard and free buffer counts as one update.
    pub fn update_render_buffers(&self, queued: i32, discard: i32, free: i32) {
        self.render.lock().buffers = RenderBuffers::new(queued, discard, free);
        trace!(session = %self.session_id, queued, discard, free, "Render buffers updated");
    }

    pub fn render_buffers(&self) -> RenderBuffers {
        self.render.lock().buffers
    }

    /// Copy of clock sync, buffers and seeking from one lock acquisition.
    pub fn render_state(&self) -> RenderStateInfo {
        let render = self.render.lock();
        RenderStateInfo {
            clock_sync: render.clock_sync,
            buffers: render.buffers,
            seeking: render.seeking,
        }
    }

    // ========================================================================
    // Player state
    // ========================================================================

    pub fn set_state_seeking(&self, active: bool) {
        let mut render = self.render.lock();

        render.seeking = active;

        self.sink.set_state_seeking(render.seeking);
        trace!(session = %self.session_id, active, "Seeking state set");
    }

    pub fn is_seeking(&self) -> bool {
        self.render.lock().seeking
    }
}
