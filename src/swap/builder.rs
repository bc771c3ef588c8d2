//! Ordered instruction plans for both swap directions, plus submission.
//!
//! The two directions share one parameterized swap-instruction constructor
//! and one account table (`pool::swap_account_metas`); only the encoded
//! direction flag and amount semantics differ.

use crate::errors::Result;
use crate::models::{NATIVE_DECIMALS, STABLE_DECIMALS, SwapDirection, SwapIntent};
use crate::pool::{PoolContext, swap_account_metas};
use crate::swap::accounts::AtaResolver;
use crate::swap::codec::SwapInstructionData;
use crate::utils::to_display;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::compute_budget::ComputeBudgetInstruction;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use std::sync::Arc;
use tracing::info;

/// Compute-unit ceiling for swap transactions.
const SWAP_COMPUTE_UNIT_LIMIT: u32 = 500_000;
/// Minimum priority fee, in micro-lamports per compute unit.
const COMPUTE_UNIT_PRICE: u64 = 1;
/// Static reverse-leg approximation: one stable buys roughly 20 native.
const NATIVE_PER_STABLE_RATE: f64 = 20.0;
/// Keeps the exact-out request satisfiable when the pool price has drifted
/// below the static rate.
const REVERSE_SLIPPAGE_FACTOR: f64 = 0.95;

/// Native base units the reverse leg asks for when spending `stable_amount`.
///
/// Not a quote. The real on-chain bound is the max-spend threshold; this only
/// has to be small enough that the pool can deliver it for the stable spent.
pub fn estimate_native_output(stable_amount: u64) -> u64 {
    let stable = to_display(stable_amount, STABLE_DECIMALS);
    (stable * NATIVE_PER_STABLE_RATE * 1e9 * REVERSE_SLIPPAGE_FACTOR) as u64
}

/// Compute-budget prelude shared by every transaction this bot submits.
pub(crate) fn compute_budget_pair(unit_limit: u32) -> [Instruction; 2] {
    [
        ComputeBudgetInstruction::set_compute_unit_limit(unit_limit),
        ComputeBudgetInstruction::set_compute_unit_price(COMPUTE_UNIT_PRICE),
    ]
}

fn swap_instruction(
    pool: &PoolContext,
    wallet: &Pubkey,
    wrapped_ata: &Pubkey,
    stable_ata: &Pubkey,
    intent: &SwapIntent,
) -> Instruction {
    let data = SwapInstructionData {
        amount: intent.amount,
        other_amount_threshold: intent.threshold,
        sqrt_price_limit: 0,
        a_to_b: intent.direction.a_to_b(),
        amount_specified_is_input: intent.amount_is_input,
    }
    .encode();
    Instruction {
        program_id: pool.program_id,
        accounts: swap_account_metas(pool, wallet, wrapped_ata, stable_ata),
        data,
    }
}

/// Forward leg, exact-in: wrap `amount` lamports, swap native for stable,
/// unwrap whatever wrapped residue remains.
pub fn forward_instructions(
    pool: &PoolContext,
    resolver: &AtaResolver,
    amount: u64,
    create_wrapped: bool,
    create_stable: bool,
) -> Result<Vec<Instruction>> {
    let owner = resolver.owner();
    let wrapped_ata = resolver.address(&pool.wrapped_native_mint);
    let stable_ata = resolver.address(&pool.stable_mint);

    let mut instructions = Vec::with_capacity(9);
    instructions.extend(compute_budget_pair(SWAP_COMPUTE_UNIT_LIMIT));
    if create_wrapped {
        instructions.push(resolver.create_instruction(&pool.wrapped_native_mint));
    }
    instructions.push(system_instruction::transfer(&owner, &wrapped_ata, amount));
    if create_stable {
        instructions.push(resolver.create_instruction(&pool.stable_mint));
    }
    instructions.push(spl_token::instruction::sync_native(
        &spl_token::id(),
        &wrapped_ata,
    )?);
    let intent = SwapIntent {
        direction: SwapDirection::NativeToStable,
        amount,
        threshold: 1,
        amount_is_input: true,
    };
    instructions.push(swap_instruction(pool, &owner, &wrapped_ata, &stable_ata, &intent));
    instructions.push(spl_token::instruction::close_account(
        &spl_token::id(),
        &wrapped_ata,
        &owner,
        &owner,
        &[],
    )?);
    Ok(instructions)
}

/// Reverse leg, exact-out: swap stable back to wrapped native, then close the
/// wrapped account to land the proceeds as native balance.
pub fn reverse_instructions(
    pool: &PoolContext,
    resolver: &AtaResolver,
    stable_amount: u64,
    create_wrapped: bool,
) -> Result<Vec<Instruction>> {
    let owner = resolver.owner();
    let wrapped_ata = resolver.address(&pool.wrapped_native_mint);
    let stable_ata = resolver.address(&pool.stable_mint);

    let mut instructions = Vec::with_capacity(5);
    instructions.extend(compute_budget_pair(SWAP_COMPUTE_UNIT_LIMIT));
    if create_wrapped {
        instructions.push(resolver.create_instruction(&pool.wrapped_native_mint));
    }
    let intent = SwapIntent {
        direction: SwapDirection::StableToNative,
        amount: estimate_native_output(stable_amount),
        threshold: stable_amount,
        amount_is_input: false,
    };
    instructions.push(swap_instruction(pool, &owner, &wrapped_ata, &stable_ata, &intent));
    instructions.push(spl_token::instruction::close_account(
        &spl_token::id(),
        &wrapped_ata,
        &owner,
        &owner,
        &[],
    )?);
    Ok(instructions)
}

/// Sign with the wallet, submit, and block until the client reports
/// confirmation. Submission and confirmation errors propagate unmodified.
pub(crate) async fn submit_transaction(
    client: &RpcClient,
    wallet: &Keypair,
    instructions: &[Instruction],
) -> Result<Signature> {
    let blockhash = client.get_latest_blockhash().await?;
    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&wallet.pubkey()),
        &[wallet],
        blockhash,
    );
    Ok(client.send_and_confirm_transaction(&tx).await?)
}

/// Builds and submits swap transactions for one wallet against one pool.
pub struct SwapBuilder {
    client: Arc<RpcClient>,
    wallet: Arc<Keypair>,
    pool: PoolContext,
    resolver: AtaResolver,
}

impl SwapBuilder {
    pub fn new(client: Arc<RpcClient>, wallet: Arc<Keypair>, pool: PoolContext) -> Self {
        let resolver = AtaResolver::new(wallet.pubkey());
        Self {
            client,
            wallet,
            pool,
            resolver,
        }
    }

    /// Swap `amount` lamports of native into stable (exact-in).
    pub async fn forward_swap(&self, amount: u64) -> Result<Signature> {
        info!(
            native_in = to_display(amount, NATIVE_DECIMALS),
            "[SWAP] forward: native -> stable"
        );
        let create_wrapped = self
            .resolver
            .missing(&self.client, &self.pool.wrapped_native_mint)
            .await?;
        let create_stable = self
            .resolver
            .missing(&self.client, &self.pool.stable_mint)
            .await?;
        let instructions = forward_instructions(
            &self.pool,
            &self.resolver,
            amount,
            create_wrapped,
            create_stable,
        )?;
        let signature = submit_transaction(&self.client, &self.wallet, &instructions).await?;
        info!(%signature, "[SWAP] forward confirmed");
        Ok(signature)
    }

    /// Spend at most `stable_amount` of stable to buy native back (exact-out).
    pub async fn reverse_swap(&self, stable_amount: u64) -> Result<Signature> {
        info!(
            stable_in = to_display(stable_amount, STABLE_DECIMALS),
            "[SWAP] reverse: stable -> native"
        );
        let create_wrapped = self
            .resolver
            .missing(&self.client, &self.pool.wrapped_native_mint)
            .await?;
        let instructions =
            reverse_instructions(&self.pool, &self.resolver, stable_amount, create_wrapped)?;
        let signature = submit_transaction(&self.client, &self.wallet, &instructions).await?;
        info!(%signature, "[SWAP] reverse confirmed");
        Ok(signature)
    }
}
