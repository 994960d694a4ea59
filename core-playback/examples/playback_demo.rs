//! # Process Info Usage Example
//!
//! Simulates one playback session: a video decoder thread, an audio decoder
//! thread and a render thread report into a shared `ProcessInfo`, while the
//! main thread plays the UI and reads the state back.
//!
//! Run with: `cargo run --example playback_demo --package core-playback`

use bridge_desktop::DataCacheCore;
use bridge_traits::time::LogLevel;
use bridge_traits::{InterlaceMethod, PlatformProfile, RenderInfo};
use core_playback::ProcessInfo;
use core_runtime::config::CoreConfig;
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cache = Arc::new(DataCacheCore::new());
    let config = CoreConfig::builder()
        .telemetry_sink(cache.clone())
        .platform_profile(PlatformProfile::Generic)
        .logging(
            LoggingConfig::default()
                .with_format(LogFormat::Compact)
                .with_level(LogLevel::Debug)
                .with_thread_info(true),
        )
        .build()?;

    if let Some(logging) = config.logging.clone() {
        init_logging(logging)?;
    }

    println!("=== Process Info Demo ===\n");

    let info = ProcessInfo::create(&config);
    println!("Session {} started", info.session_id());

    // ========================================================================
    // Producers
    // ========================================================================

    let video = {
        let info = Arc::clone(&info);
        thread::Builder::new()
            .name("video-decoder".into())
            .spawn(move || {
                info.set_video_decoder_name("ff-h264", false);
                info.set_video_pixel_format("yuv420p");
                info.set_video_dimensions(1920, 1080);
                info.set_video_fps(25.0);
                info.set_video_dar(16.0 / 9.0);
                info.set_sw_deinterlacing_methods();
                let method = info.resolve_deinterlace_method(InterlaceMethod::RenderBob);
                info.set_video_deint_method(method.as_str());
            })?
    };

    let audio = {
        let info = Arc::clone(&info);
        thread::Builder::new()
            .name("audio-decoder".into())
            .spawn(move || {
                let codec = if info.allow_dtshd_decode() { "dtshd_ma" } else { "pt-dts" };
                info.set_audio_decoder_name(codec);
                info.set_audio_channels("FL, FR, FC, LFE, SL, SR");
                info.set_audio_sample_rate(48000);
                info.set_audio_bits_per_sample(24);
            })?
    };

    let render = {
        let info = Arc::clone(&info);
        thread::Builder::new()
            .name("renderer".into())
            .spawn(move || {
                info.update_render_info(
                    RenderInfo::new()
                        .with_deint_methods([InterlaceMethod::RenderBob, InterlaceMethod::RenderBlend])
                        .with_optimal_buffer_size(4)
                        .with_format("yuv420p"),
                );
                info.set_render_clock_sync(true);
                for queued in 0..4 {
                    info.update_render_buffers(queued, 0, 4 - queued);
                    thread::sleep(Duration::from_millis(5));
                }
            })?
    };

    for handle in [video, audio, render] {
        if handle.join().is_err() {
            anyhow::bail!("producer thread panicked");
        }
    }

    // ========================================================================
    // UI
    // ========================================================================

    let video_info = info.video_codec_info();
    println!(
        "Video: {} {}x{} @ {:.2} fps ({})",
        video_info.decoder_name, video_info.width, video_info.height, video_info.fps, video_info.pixel_format
    );
    println!("Deinterlacers: {:?}", info.deinterlacing_methods());
    println!("Render state: {:?}", info.render_state());

    info.set_state_seeking(true);
    println!("Seeking: {}", cache.is_seeking());
    info.set_state_seeking(false);

    println!("\nTelemetry cache:");
    println!("{}", serde_json::to_string_pretty(&cache.snapshot())?);

    // Stream change: video resets, audio survives.
    info.reset_video_codec_info();
    println!(
        "\nAfter video reset: decoder={} audio={}",
        cache.video_decoder_name(),
        cache.audio_decoder_name()
    );

    Ok(())
}
