//! Per-cycle balance reads and stray wrapped-balance recovery.

use crate::errors::Result;
use crate::models::{BalanceSnapshot, NATIVE_DECIMALS};
use crate::pool::PoolContext;
use crate::swap::accounts::AtaResolver;
use crate::swap::builder::{compute_budget_pair, submit_transaction};
use crate::utils::to_display;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::instruction::Instruction;
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use std::sync::Arc;
use tracing::info;

/// Closing an account is cheap; no need for the full swap budget.
const UNWRAP_COMPUTE_UNIT_LIMIT: u32 = 100_000;

/// Instructions reclaiming a wrapped-native balance as native.
pub fn unwrap_instructions(wrapped_ata: &Pubkey, owner: &Pubkey) -> Result<Vec<Instruction>> {
    let mut instructions = Vec::with_capacity(3);
    instructions.extend(compute_budget_pair(UNWRAP_COMPUTE_UNIT_LIMIT));
    instructions.push(spl_token::instruction::close_account(
        &spl_token::id(),
        wrapped_ata,
        owner,
        owner,
        &[],
    )?);
    Ok(instructions)
}

/// Reads wallet balances fresh each cycle and recovers wrapped strays.
pub struct BalanceInspector {
    client: Arc<RpcClient>,
    wallet: Arc<Keypair>,
    pool: PoolContext,
    resolver: AtaResolver,
}

impl BalanceInspector {
    pub fn new(client: Arc<RpcClient>, wallet: Arc<Keypair>, pool: PoolContext) -> Self {
        let resolver = AtaResolver::new(wallet.pubkey());
        Self {
            client,
            wallet,
            pool,
            resolver,
        }
    }

    /// Current native and stable balances. An absent stable holding account
    /// reads as zero, never as an error.
    pub async fn read_balances(&self) -> Result<BalanceSnapshot> {
        let native = self.client.get_balance(&self.wallet.pubkey()).await?;
        let stable = self.token_balance(&self.pool.stable_mint).await?;
        Ok(BalanceSnapshot { native, stable })
    }

    /// Stable-token balance only, for the re-read between the forward and
    /// reverse legs of a normal cycle.
    pub async fn stable_balance(&self) -> Result<u64> {
        self.token_balance(&self.pool.stable_mint).await
    }

    /// Reclaim any wrapped-native balance left over from a prior failed
    /// cycle. Absent or empty holding accounts mean nothing to do.
    pub async fn unwrap_stray_wrapped(&self) -> Result<bool> {
        let amount = self.token_balance(&self.pool.wrapped_native_mint).await?;
        if amount == 0 {
            return Ok(false);
        }

        info!(
            wrapped = to_display(amount, NATIVE_DECIMALS),
            "[UNWRAP] reclaiming stray wrapped balance"
        );
        let wrapped_ata = self.resolver.address(&self.pool.wrapped_native_mint);
        let instructions = unwrap_instructions(&wrapped_ata, &self.resolver.owner())?;
        let signature = submit_transaction(&self.client, &self.wallet, &instructions).await?;
        info!(%signature, "[UNWRAP] confirmed");
        Ok(true)
    }

    async fn token_balance(&self, mint: &Pubkey) -> Result<u64> {
        let ata = self.resolver.address(mint);
        let account = self
            .client
            .get_account_with_commitment(&ata, self.client.commitment())
            .await?
            .value;
        match account {
            Some(account) => {
                let token_account = spl_token::state::Account::unpack(&account.data)?;
                Ok(token_account.amount)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_plan_is_budget_pair_then_close() {
        let owner = Keypair::new().pubkey();
        let resolver = AtaResolver::new(owner);
        let pool = PoolContext::vortex_fogo_usdc();
        let wrapped_ata = resolver.address(&pool.wrapped_native_mint);

        let plan = unwrap_instructions(&wrapped_ata, &owner).unwrap();
        let programs: Vec<Pubkey> = plan.iter().map(|ix| ix.program_id).collect();
        assert_eq!(
            programs,
            vec![
                solana_sdk::compute_budget::id(),
                solana_sdk::compute_budget::id(),
                spl_token::id(),
            ]
        );
        // The close targets the wrapped holding account and refunds the owner.
        assert_eq!(plan[2].accounts[0].pubkey, wrapped_ata);
        assert_eq!(plan[2].accounts[1].pubkey, owner);
    }
}
