//! Associated token account derivation and on-demand creation.

use crate::errors::Result;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account;

/// Resolves the deterministic token-holding accounts for one wallet.
#[derive(Debug, Clone, Copy)]
pub struct AtaResolver {
    owner: Pubkey,
}

impl AtaResolver {
    pub fn new(owner: Pubkey) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    /// Deterministic associated account for (owner, mint) under the token
    /// program.
    pub fn address(&self, mint: &Pubkey) -> Pubkey {
        get_associated_token_address(&self.owner, mint)
    }

    /// Instruction creating the associated account, funded by the owner.
    pub fn create_instruction(&self, mint: &Pubkey) -> Instruction {
        create_associated_token_account(&self.owner, &self.owner, mint, &spl_token::id())
    }

    /// Whether the associated account for `mint` is missing on chain.
    ///
    /// Absence is a valid answer, never an error; only the RPC read itself
    /// can fail, and that propagates as a retryable cycle failure.
    pub async fn missing(&self, client: &RpcClient, mint: &Pubkey) -> Result<bool> {
        let ata = self.address(mint);
        let account = client
            .get_account_with_commitment(&ata, client.commitment())
            .await?
            .value;
        Ok(account.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Keypair;
    use solana_sdk::signer::Signer;

    #[test]
    fn derivation_is_deterministic_per_mint() {
        let owner = Keypair::new().pubkey();
        let resolver = AtaResolver::new(owner);
        let pool = crate::pool::PoolContext::vortex_fogo_usdc();

        let wrapped = resolver.address(&pool.wrapped_native_mint);
        let stable = resolver.address(&pool.stable_mint);
        assert_ne!(wrapped, stable);
        assert_eq!(wrapped, resolver.address(&pool.wrapped_native_mint));
        assert_eq!(
            wrapped,
            get_associated_token_address(&owner, &pool.wrapped_native_mint)
        );
    }

    #[test]
    fn create_instruction_targets_the_ata_program() {
        let resolver = AtaResolver::new(Keypair::new().pubkey());
        let pool = crate::pool::PoolContext::vortex_fogo_usdc();
        let ix = resolver.create_instruction(&pool.stable_mint);
        assert_eq!(ix.program_id, spl_associated_token_account::id());
    }
}
