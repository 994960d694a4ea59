//! Integration tests for logging and configuration

use bridge_traits::time::LogLevel;
use bridge_traits::{NullTelemetrySink, PlatformProfile};
use core_runtime::config::CoreConfig;
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use std::sync::Arc;

#[test]
fn test_logging_initialization_only_once() {
    // The global subscriber can be installed once per process, here from
    // the logging section carried by the core config.
    let core_config = CoreConfig::builder()
        .telemetry_sink(Arc::new(NullTelemetrySink))
        .logging(
            LoggingConfig::default()
                .with_format(LogFormat::Compact)
                .with_level(LogLevel::Warn),
        )
        .build()
        .unwrap();

    let logging = core_config.logging.clone().expect("logging section present");
    init_logging(logging.clone()).expect("first initialization succeeds");
    assert!(init_logging(logging).is_err());
}

#[test]
fn test_invalid_filter_is_rejected_before_install() {
    let config = LoggingConfig::default().with_filter("core_playback=loudest");
    let err = init_logging(config).unwrap_err();
    assert!(err.to_string().contains("Invalid log filter"));
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(LogLevel::Trace)
        .with_spans(false)
        .with_target(false)
        .with_thread_info(true);

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, LogLevel::Trace);
    assert!(!config.enable_spans);
    assert!(!config.display_target);
    assert!(config.display_thread_info);
}

#[test]
fn test_core_config_with_logging_and_profile() {
    let config = CoreConfig::builder()
        .telemetry_sink(Arc::new(NullTelemetrySink))
        .platform_profile(PlatformProfile::LowPower)
        .logging(LoggingConfig::default().with_level(LogLevel::Debug))
        .build()
        .unwrap();

    assert_eq!(config.platform_profile, PlatformProfile::LowPower);
    assert_eq!(config.logging.map(|l| l.level), Some(LogLevel::Debug));
}
