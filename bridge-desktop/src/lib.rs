//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - `TelemetrySink` using [`DataCacheCore`], an in-memory process-wide cache
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::DataCacheCore;
//! use bridge_traits::TelemetrySink;
//! use std::sync::Arc;
//!
//! let cache = Arc::new(DataCacheCore::new());
//! let sink: Arc<dyn TelemetrySink> = cache.clone();
//! // Hand `sink` to the core configuration, read `cache` from the UI.
//! ```

mod data_cache;

pub use data_cache::{DataCacheCore, TelemetrySnapshot};
