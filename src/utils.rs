//! Miscellaneous helper utilities.

use rand::Rng;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize `tracing` subscriber with env-based filter.
///
/// If `RUST_LOG` is not set, defaults to `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Uniformly random inter-cycle delay within `[min_minutes, max_minutes]`,
/// sampled at millisecond granularity with both bounds inclusive.
pub fn random_delay(min_minutes: u64, max_minutes: u64) -> Duration {
    let min_ms = min_minutes * 60_000;
    let max_ms = max_minutes * 60_000;
    Duration::from_millis(rand::thread_rng().gen_range(min_ms..=max_ms))
}

/// Convert integer base units to whole-asset units for display.
pub fn to_display(amount: u64, decimals: u8) -> f64 {
    amount as f64 / 10f64.powi(decimals as i32)
}
