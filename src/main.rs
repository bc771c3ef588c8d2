use anyhow::Result;
use fogo_autoswap::{
    config::{self, AppConfig},
    cycle::CycleController,
    pool::PoolContext,
    utils, wallet,
};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signer::Signer;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let config = AppConfig::load()?;
    let wallet = Arc::new(wallet::load_keypair(&config.private_key)?);

    tracing::info!(
        wallet = %wallet.pubkey(),
        rpc_url = %config.rpc_url,
        swap_percent = config::SWAP_PERCENT,
        delay_min_minutes = config.delay_min_minutes,
        delay_max_minutes = config.delay_max_minutes,
        "[INIT] fogo-autoswap starting"
    );

    let client = Arc::new(RpcClient::new_with_commitment(
        config.rpc_url.clone(),
        CommitmentConfig::confirmed(),
    ));
    let pool = PoolContext::vortex_fogo_usdc();

    let controller = CycleController::new(client, wallet, pool, &config);
    controller.run().await?;
    Ok(())
}
