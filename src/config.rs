//! Configuration loader and application settings.

use crate::errors::{AppError, Result};
use std::time::Duration;

/// Percentage of the available native balance swapped each forward leg.
pub const SWAP_PERCENT: u64 = 80;

/// Lamports held back from every forward swap to keep paying fees.
pub const GAS_RESERVE_LAMPORTS: u64 = 100_000_000;

/// Smallest available native balance worth a forward swap (0.1 native).
pub const MIN_TRADEABLE_LAMPORTS: u64 = 100_000_000;

/// Native floor below which no reverse swap is attempted (0.05 native),
/// so the wallet can still pay for the transaction itself.
pub const MIN_GAS_LAMPORTS: u64 = 50_000_000;

/// Stable balances under this (0.01 stable) are dust and never swapped back.
pub const STABLE_DUST_FLOOR: u64 = 10_000;

/// Pause between the forward and reverse legs of a normal cycle, giving the
/// pool state a moment to settle before the stable balance is re-read.
pub const SETTLE_PAUSE: Duration = Duration::from_secs(5);

/// Fixed backoff after any failed cycle before retrying from the top.
pub const ERROR_BACKOFF: Duration = Duration::from_secs(60);

pub const DEFAULT_RPC_URL: &str = "https://mainnet.fogo.io";
pub const DEFAULT_DELAY_MIN_MINUTES: u64 = 5;
pub const DEFAULT_DELAY_MAX_MINUTES: u64 = 10;

/// Consolidated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// RPC endpoint for the chain node.
    pub rpc_url: String,
    /// Secret key material, base58 or JSON byte-array encoded.
    pub private_key: String,
    /// Lower bound of the inter-cycle delay, in minutes.
    pub delay_min_minutes: u64,
    /// Upper bound of the inter-cycle delay, in minutes.
    pub delay_max_minutes: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `PRIVATE_KEY` is required; everything else falls back to defaults.
    pub fn load() -> Result<Self> {
        let rpc_url = std::env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.into());
        let private_key = std::env::var("PRIVATE_KEY")
            .map_err(|_| AppError::Config("PRIVATE_KEY is not set".into()))?;
        let delay_min_minutes = match std::env::var("DELAY_MIN") {
            Ok(raw) => raw.parse()?,
            Err(_) => DEFAULT_DELAY_MIN_MINUTES,
        };
        let delay_max_minutes = match std::env::var("DELAY_MAX") {
            Ok(raw) => raw.parse()?,
            Err(_) => DEFAULT_DELAY_MAX_MINUTES,
        };
        if delay_min_minutes > delay_max_minutes {
            return Err(AppError::Config(format!(
                "DELAY_MIN ({delay_min_minutes}) must not exceed DELAY_MAX ({delay_max_minutes})"
            )));
        }
        Ok(Self {
            rpc_url,
            private_key,
            delay_min_minutes,
            delay_max_minutes,
        })
    }
}
