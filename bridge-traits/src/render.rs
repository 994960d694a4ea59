//! Render Backend Capability Types
//!
//! The render backend describes what it can do through a [`RenderInfo`]
//! descriptor. The core never mutates a descriptor; it stores a copy and
//! folds the declared deinterlace methods into the advertised capability set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Deinterlace method identifiers.
///
/// Hardware-specific variants are only meaningful when the matching render
/// backend declares them in its [`RenderInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterlaceMethod {
    /// Progressive output, no deinterlacing
    None,
    /// Let the active backend pick
    Auto,
    RenderBlend,
    RenderWeave,
    RenderBob,
    /// Software deinterlacer, full field rate
    Deinterlace,
    /// Software deinterlacer, half field rate
    DeinterlaceHalf,
    VdpauBob,
    VdpauAdvanced,
    VdpauTemporal,
    VdpauTemporalHalf,
    VaapiBob,
    VaapiMadi,
    VaapiMaci,
    DxvaAuto,
    MmalAdvanced,
    MmalBob,
}

impl InterlaceMethod {
    /// Every known method, in declaration order.
    pub const ALL: [InterlaceMethod; 17] = [
        InterlaceMethod::None,
        InterlaceMethod::Auto,
        InterlaceMethod::RenderBlend,
        InterlaceMethod::RenderWeave,
        InterlaceMethod::RenderBob,
        InterlaceMethod::Deinterlace,
        InterlaceMethod::DeinterlaceHalf,
        InterlaceMethod::VdpauBob,
        InterlaceMethod::VdpauAdvanced,
        InterlaceMethod::VdpauTemporal,
        InterlaceMethod::VdpauTemporalHalf,
        InterlaceMethod::VaapiBob,
        InterlaceMethod::VaapiMadi,
        InterlaceMethod::VaapiMaci,
        InterlaceMethod::DxvaAuto,
        InterlaceMethod::MmalAdvanced,
        InterlaceMethod::MmalBob,
    ];

    /// Stable lowercase identifier, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterlaceMethod::None => "none",
            InterlaceMethod::Auto => "auto",
            InterlaceMethod::RenderBlend => "render_blend",
            InterlaceMethod::RenderWeave => "render_weave",
            InterlaceMethod::RenderBob => "render_bob",
            InterlaceMethod::Deinterlace => "deinterlace",
            InterlaceMethod::DeinterlaceHalf => "deinterlace_half",
            InterlaceMethod::VdpauBob => "vdpau_bob",
            InterlaceMethod::VdpauAdvanced => "vdpau_advanced",
            InterlaceMethod::VdpauTemporal => "vdpau_temporal",
            InterlaceMethod::VdpauTemporalHalf => "vdpau_temporal_half",
            InterlaceMethod::VaapiBob => "vaapi_bob",
            InterlaceMethod::VaapiMadi => "vaapi_madi",
            InterlaceMethod::VaapiMaci => "vaapi_maci",
            InterlaceMethod::DxvaAuto => "dxva_auto",
            InterlaceMethod::MmalAdvanced => "mmal_advanced",
            InterlaceMethod::MmalBob => "mmal_bob",
        }
    }

    /// Returns `true` if the method runs on a hardware video backend.
    pub fn is_hardware(&self) -> bool {
        matches!(
            self,
            InterlaceMethod::VdpauBob
                | InterlaceMethod::VdpauAdvanced
                | InterlaceMethod::VdpauTemporal
                | InterlaceMethod::VdpauTemporalHalf
                | InterlaceMethod::VaapiBob
                | InterlaceMethod::VaapiMadi
                | InterlaceMethod::VaapiMaci
                | InterlaceMethod::DxvaAuto
                | InterlaceMethod::MmalAdvanced
                | InterlaceMethod::MmalBob
        )
    }
}

impl fmt::Display for InterlaceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterlaceMethod {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterlaceMethod::ALL
            .iter()
            .copied()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| BridgeError::UnknownInterlaceMethod(s.to_string()))
    }
}

/// Capability descriptor published by the render backend.
///
/// Passed by value into the core on every renderer (re)configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderInfo {
    /// Deinterlace methods the renderer can perform itself, in preference order
    pub deint_methods: Vec<InterlaceMethod>,
    /// Number of buffers the renderer wants queued for smooth output
    pub optimal_buffer_size: usize,
    /// Highest clock speed the renderer can follow (1.0 = realtime)
    pub max_clock_speed: f64,
    /// Pixel formats accepted by the renderer
    pub formats: Vec<String>,
}

impl RenderInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deint_method(mut self, method: InterlaceMethod) -> Self {
        self.deint_methods.push(method);
        self
    }

    pub fn with_deint_methods(mut self, methods: impl IntoIterator<Item = InterlaceMethod>) -> Self {
        self.deint_methods.extend(methods);
        self
    }

    pub fn with_optimal_buffer_size(mut self, size: usize) -> Self {
        self.optimal_buffer_size = size;
        self
    }

    pub fn with_max_clock_speed(mut self, speed: f64) -> Self {
        self.max_clock_speed = speed;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.formats.push(format.into());
        self
    }

    /// Restore the empty descriptor.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if the renderer declared no capabilities at all.
    pub fn is_empty(&self) -> bool {
        self.deint_methods.is_empty()
            && self.formats.is_empty()
            && self.optimal_buffer_size == 0
            && self.max_clock_speed == 0.0
    }
}
