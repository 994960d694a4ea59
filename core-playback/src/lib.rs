//! # Playback State Module
//!
//! Thread-safe aggregation of the player's decode/render state.
//!
//! ## Overview
//!
//! This module handles:
//! - Per-session playback state split into video, audio and render partitions
//! - Write-through mirroring of that state into the host telemetry cache
//! - Merging decoder and render-backend deinterlace capabilities
//! - Platform policy queries (DTS-HD decode, fallback deinterlacer)

pub mod deinterlace;
pub mod error;
pub mod info;
pub mod process_info;

pub use deinterlace::{DeinterlaceMethods, SW_DEINTERLACE_METHODS};
pub use error::{PlaybackError, Result};
pub use info::{AudioCodecInfo, RenderBuffers, RenderStateInfo, VideoCodecInfo};
pub use process_info::ProcessInfo;
