//! The driving loop: one cycle at a time, forever.

use crate::balance::BalanceInspector;
use crate::config::{AppConfig, ERROR_BACKOFF, SETTLE_PAUSE};
use crate::cycle::planner::plan_cycle;
use crate::cycle::types::CycleAction;
use crate::errors::Result;
use crate::pool::PoolContext;
use crate::swap::builder::SwapBuilder;
use crate::utils;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::Keypair;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// Owns the swap-cycle state machine. Exactly one cycle, and within it one
/// transaction, is in flight at any time.
pub struct CycleController {
    inspector: BalanceInspector,
    swaps: SwapBuilder,
    delay_min_minutes: u64,
    delay_max_minutes: u64,
}

impl CycleController {
    pub fn new(
        client: Arc<RpcClient>,
        wallet: Arc<Keypair>,
        pool: PoolContext,
        config: &AppConfig,
    ) -> Self {
        Self {
            inspector: BalanceInspector::new(client.clone(), wallet.clone(), pool),
            swaps: SwapBuilder::new(client, wallet, pool),
            delay_min_minutes: config.delay_min_minutes,
            delay_max_minutes: config.delay_max_minutes,
        }
    }

    /// Run cycles until the process is killed. Any error inside a cycle is
    /// logged once, followed by a fixed backoff, then the next cycle starts
    /// from the top; the loop itself never exits.
    pub async fn run(self) -> Result<()> {
        let mut cycle: u64 = 0;
        loop {
            cycle += 1;
            info!(cycle, "[CYCLE] starting");

            if let Err(e) = self.run_once().await {
                error!(cycle, error = %e, "[CYCLE] failed, backing off");
                sleep(ERROR_BACKOFF).await;
                continue;
            }

            let delay = utils::random_delay(self.delay_min_minutes, self.delay_max_minutes);
            info!(
                cycle,
                minutes = format!("{:.1}", delay.as_secs_f64() / 60.0),
                "[CYCLE] sleeping until next cycle"
            );
            sleep(delay).await;
        }
    }

    /// One full cycle: recovery unwrap, snapshot, planned action.
    async fn run_once(&self) -> Result<()> {
        // Always reclaim wrapped strays before any new decision.
        self.inspector.unwrap_stray_wrapped().await?;

        let snapshot = self.inspector.read_balances().await?;
        info!(
            native = format!("{:.4}", snapshot.native_display()),
            stable = format!("{:.4}", snapshot.stable_display()),
            "[BALANCE] snapshot"
        );

        match plan_cycle(&snapshot) {
            CycleAction::ReverseRecovery { stable_amount } => {
                info!("[CYCLE] stray stable found, reverse-swapping it first");
                self.swaps.reverse_swap(stable_amount).await?;
            }
            CycleAction::SkipDust { stable_amount } => {
                warn!(stable_amount, "[CYCLE] stable dust detected, skipping");
            }
            CycleAction::ForwardCycle { native_amount } => {
                self.swaps.forward_swap(native_amount).await?;

                sleep(SETTLE_PAUSE).await;
                let stable = self.inspector.stable_balance().await?;
                if stable > 0 {
                    self.swaps.reverse_swap(stable).await?;
                }
            }
            CycleAction::Wait => {
                warn!("[CYCLE] not enough native to trade, waiting for next cycle");
            }
        }
        Ok(())
    }
}
