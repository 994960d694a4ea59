//! # Core Configuration Module
//!
//! Provides configuration management for the video player core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! instance that holds the host bridges and settings a playback session needs.
//! It enforces fail-fast validation so a session never starts without a place
//! to mirror its telemetry.
//!
//! ## Required Dependencies
//!
//! - `TelemetrySink` - Process-wide telemetry cache the core mirrors into
//!
//! When the `desktop-shims` feature is enabled, the process-wide desktop cache
//! (`bridge_desktop::DataCacheCore::shared()`) is injected automatically if no
//! sink is provided. UI code reads the same instance through `shared()`.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::DataCacheCore;
//! use bridge_traits::PlatformProfile;
//! use core_runtime::config::CoreConfig;
//! use std::sync::Arc;
//!
//! let cache = Arc::new(DataCacheCore::new());
//! let config = CoreConfig::builder()
//!     .telemetry_sink(cache.clone())
//!     .platform_profile(PlatformProfile::LowPower)
//!     .build()
//!     .expect("Failed to build config");
//! ```

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use bridge_traits::{InterlaceMethod, PlatformProfile, TelemetrySink};
use std::sync::Arc;

/// Core configuration for the video player core.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Process-wide telemetry cache (required)
    pub telemetry_sink: Arc<dyn TelemetrySink>,

    /// Platform policy for DTS-HD decode and the fallback deinterlacer
    pub platform_profile: PlatformProfile,

    /// Logging setup, applied by the host via [`crate::logging::init_logging`]
    pub logging: Option<LoggingConfig>,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("telemetry_sink", &"TelemetrySink { ... }")
            .field("platform_profile", &self.platform_profile)
            .field("logging", &self.logging.as_ref().map(|l| l.format))
            .finish()
    }
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// A custom platform profile must name a real deinterlacer as its
    /// fallback; `None` would leave callers without a method to fall back to.
    pub fn validate(&self) -> Result<()> {
        if let PlatformProfile::Custom {
            fallback_deint_method,
            ..
        } = self.platform_profile
        {
            if fallback_deint_method == InterlaceMethod::None {
                return Err(Error::Config(
                    "Custom platform profile must use a real deinterlace method as fallback, \
                     not 'none'"
                        .to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn telemetry_sink_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "TelemetrySink".to_string(),
        message: "TelemetrySink implementation is required to mirror playback state. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use the default DataCacheCore. \
                 Other hosts: inject the platform telemetry cache, or NullTelemetrySink if nothing reads it."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_telemetry_sink() -> Result<Arc<dyn TelemetrySink>> {
    use bridge_desktop::DataCacheCore;

    let sink: Arc<dyn TelemetrySink> = DataCacheCore::shared();
    Ok(sink)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_telemetry_sink() -> Result<Arc<dyn TelemetrySink>> {
    Err(telemetry_sink_missing_error())
}

/// Builder for constructing [`CoreConfig`] instances.
#[derive(Default)]
pub struct CoreConfigBuilder {
    telemetry_sink: Option<Arc<dyn TelemetrySink>>,
    platform_profile: Option<PlatformProfile>,
    logging: Option<LoggingConfig>,
}

impl CoreConfigBuilder {
    /// Sets the telemetry cache the core mirrors playback state into.
    pub fn telemetry_sink(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry_sink = Some(sink);
        self
    }

    /// Sets the platform profile.
    ///
    /// Default: [`PlatformProfile::Generic`]
    pub fn platform_profile(mut self, profile: PlatformProfile) -> Self {
        self.platform_profile = Some(profile);
        self
    }

    /// Sets the logging configuration carried alongside the core config.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds the final `CoreConfig` instance.
    ///
    /// # Errors
    ///
    /// - `CapabilityMissing` if no telemetry sink is available
    /// - `Config` if the platform profile is invalid
    pub fn build(self) -> Result<CoreConfig> {
        let telemetry_sink = match self.telemetry_sink {
            Some(sink) => sink,
            None => provide_default_telemetry_sink()?,
        };

        let config = CoreConfig {
            telemetry_sink,
            platform_profile: self.platform_profile.unwrap_or_default(),
            logging: self.logging,
        };

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;
    use bridge_traits::NullTelemetrySink;
    use mockall::mock;

    mock! {
        Sink {}

        impl TelemetrySink for Sink {
            fn set_video_decoder_name(&self, name: &str, is_hw: bool);
            fn set_video_deint_method(&self, method: &str);
            fn set_video_pixel_format(&self, pix_format: &str);
            fn set_video_dimensions(&self, width: i32, height: i32);
            fn set_video_fps(&self, fps: f32);
            fn set_video_dar(&self, dar: f32);
            fn set_audio_decoder_name(&self, name: &str);
            fn set_audio_channels(&self, channels: &str);
            fn set_audio_sample_rate(&self, sample_rate: i32);
            fn set_audio_bits_per_sample(&self, bits_per_sample: i32);
            fn set_render_clock_sync(&self, enabled: bool);
            fn set_state_seeking(&self, active: bool);
        }
    }

    #[test]
    fn test_builder_with_injected_sink() {
        let config = CoreConfig::builder()
            .telemetry_sink(Arc::new(NullTelemetrySink))
            .build()
            .unwrap();

        assert_eq!(config.platform_profile, PlatformProfile::Generic);
        assert!(config.logging.is_none());
    }

    #[test]
    fn test_builder_does_not_touch_sink() {
        // A mock without expectations panics on any call.
        let config = CoreConfig::builder()
            .telemetry_sink(Arc::new(MockSink::new()))
            .platform_profile(PlatformProfile::LowPower)
            .build()
            .unwrap();

        assert_eq!(config.platform_profile, PlatformProfile::LowPower);
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_builder_requires_telemetry_sink() {
        let err = CoreConfig::builder().build().unwrap_err();
        match err {
            Error::CapabilityMissing { capability, .. } => assert_eq!(capability, "TelemetrySink"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(feature = "desktop-shims")]
    #[test]
    fn test_default_sink_is_process_wide() {
        use bridge_desktop::DataCacheCore;

        let first = CoreConfig::builder().build().unwrap();
        let second = CoreConfig::builder().build().unwrap();
        assert!(Arc::ptr_eq(&first.telemetry_sink, &second.telemetry_sink));

        first.telemetry_sink.set_audio_channels("FL, FR, LFE");
        assert_eq!(DataCacheCore::shared().audio_channels(), "FL, FR, LFE");
        assert!(std::ptr::eq(
            Arc::as_ptr(&second.telemetry_sink) as *const (),
            Arc::as_ptr(&DataCacheCore::shared()) as *const (),
        ));
    }

    #[cfg(feature = "desktop-shims")]
    #[test]
    fn test_build_with_desktop_defaults() {
        let config = CoreConfig::builder().build().unwrap();
        config.telemetry_sink.set_video_dimensions(640, 480);
        assert_eq!(config.platform_profile, PlatformProfile::Generic);
    }

    #[test]
    fn test_validate_rejects_none_fallback() {
        let result = CoreConfig::builder()
            .telemetry_sink(Arc::new(NullTelemetrySink))
            .platform_profile(PlatformProfile::Custom {
                allow_dtshd_decode: true,
                fallback_deint_method: InterlaceMethod::None,
            })
            .build();

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_accepts_custom_profile() {
        let config = CoreConfig::builder()
            .telemetry_sink(Arc::new(NullTelemetrySink))
            .platform_profile(PlatformProfile::Custom {
                allow_dtshd_decode: false,
                fallback_deint_method: InterlaceMethod::RenderBob,
            })
            .build()
            .unwrap();

        assert!(!config.platform_profile.allow_dtshd_decode());
    }

    #[test]
    fn test_builder_carries_logging_config() {
        let config = CoreConfig::builder()
            .telemetry_sink(Arc::new(NullTelemetrySink))
            .logging(LoggingConfig::default().with_format(LogFormat::Compact))
            .build()
            .unwrap();

        assert_eq!(config.logging.map(|l| l.format), Some(LogFormat::Compact));
    }

    #[test]
    fn test_config_is_cloneable_and_debug() {
        let config = CoreConfig::builder()
            .telemetry_sink(Arc::new(NullTelemetrySink))
            .build()
            .unwrap();

        let cloned = config.clone();
        assert!(Arc::ptr_eq(&config.telemetry_sink, &cloned.telemetry_sink));

        let debug = format!("{:?}", cloned);
        assert!(debug.contains("TelemetrySink { ... }"));
        assert!(debug.contains("Generic"));
    }
}
