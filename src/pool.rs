//! Fixed addresses for one deployed Vortex pool instance.

use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;

/// Immutable bundle of every fixed address needed to swap against a single
/// concentrated-liquidity pool. Injected at construction so a different pool
/// (or a test fixture) is a different constant set, not a code change.
#[derive(Debug, Clone, Copy)]
pub struct PoolContext {
    /// The pool program owning the swap entry point.
    pub program_id: Pubkey,
    /// Pool state account.
    pub pool: Pubkey,
    /// Position account the pool trades against.
    pub position: Pubkey,
    /// Vault holding the wrapped-native side (token A).
    pub native_vault: Pubkey,
    /// Vault holding the stable side (token B).
    pub stable_vault: Pubkey,
    /// Tick arrays covering the active price range.
    pub tick_arrays: [Pubkey; 3],
    pub oracle: Pubkey,
    /// Token-program mint of the wrapped native asset.
    pub wrapped_native_mint: Pubkey,
    /// Token-program mint of the stable asset.
    pub stable_mint: Pubkey,
}

impl PoolContext {
    /// The Vortex FOGO/USDC pool this bot trades, from transaction analysis
    /// of the deployed program.
    pub const fn vortex_fogo_usdc() -> Self {
        Self {
            program_id: solana_sdk::pubkey!("vnt1u7PzorND5JjweFWmDawKe2hLWoTwHU6QKz6XX98"),
            pool: solana_sdk::pubkey!("29RpgcYJweTy9BUXPcETH64hkvEs2EMvfEyZbBMuq3NM"),
            position: solana_sdk::pubkey!("J7mxBLSz51Tcbog3XsiJTAXS64N46KqbpRGQmd3dQMKp"),
            native_vault: solana_sdk::pubkey!("5Hi57na7wCbQ2b7D3QXRPAy9b4tsT1S5WWeXJ7WcDga7"),
            stable_vault: solana_sdk::pubkey!("Dfyuf7jjpZ1xSKSBTYLc8i6HGBnrEn8429b9ziDDgNBo"),
            tick_arrays: [
                solana_sdk::pubkey!("Cd74Jx1qwBw6vpqqRGkyKk11GdqGoJiPVX9gpzZdMv7o"),
                solana_sdk::pubkey!("AKCcDG4vPoTTd1k745Q4zYJXqyVSMvhyxMC8oerZKdTQ"),
                solana_sdk::pubkey!("6bqfhSF8DLShXZjM7gVfeTvZRKVjyJqzLAVsRi3jpvo4"),
            ],
            oracle: solana_sdk::pubkey!("3Kdtda8zcXjuC6n69xfuXtyZt2kEwLE6ghvubGbKfsFv"),
            wrapped_native_mint: solana_sdk::pubkey!("So11111111111111111111111111111111111111112"),
            stable_mint: solana_sdk::pubkey!("uSd2czE61Evaf76RNbq4KPpXnkiL3irdzgLFUMe3NoG"),
        }
    }
}

/// The one account ordering the swap entry point accepts.
///
/// Invariant: identical for both swap directions. The program resolves which
/// side is the input from the direction flag in the instruction data, so the
/// wrapped-native accounts always sit in the token-A slots and the stable
/// accounts in the token-B slots.
pub fn swap_account_metas(
    pool: &PoolContext,
    wallet: &Pubkey,
    wrapped_native_account: &Pubkey,
    stable_account: &Pubkey,
) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(spl_token::id(), false),
        AccountMeta::new(*wallet, true),
        AccountMeta::new(pool.position, false),
        AccountMeta::new(*wrapped_native_account, false),
        AccountMeta::new(pool.native_vault, false),
        AccountMeta::new(*stable_account, false),
        AccountMeta::new(pool.stable_vault, false),
        AccountMeta::new(pool.pool, false),
        AccountMeta::new(pool.tick_arrays[0], false),
        AccountMeta::new(pool.tick_arrays[1], false),
        AccountMeta::new_readonly(pool.tick_arrays[2], false),
        AccountMeta::new_readonly(pool.oracle, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Keypair;
    use solana_sdk::signer::Signer;

    #[test]
    fn account_ordering_is_direction_independent() {
        let pool = PoolContext::vortex_fogo_usdc();
        let wallet = Keypair::new().pubkey();
        let wrapped = Keypair::new().pubkey();
        let stable = Keypair::new().pubkey();

        let metas = swap_account_metas(&pool, &wallet, &wrapped, &stable);
        assert_eq!(metas.len(), 12);
        // Only the wallet signs.
        assert!(metas[1].is_signer);
        assert_eq!(metas.iter().filter(|m| m.is_signer).count(), 1);
        // Wrapped-native accounts occupy the token-A slots, stable the B slots.
        assert_eq!(metas[3].pubkey, wrapped);
        assert_eq!(metas[4].pubkey, pool.native_vault);
        assert_eq!(metas[5].pubkey, stable);
        assert_eq!(metas[6].pubkey, pool.stable_vault);
        // Trailing tick array and oracle are read-only.
        assert!(!metas[10].is_writable);
        assert!(!metas[11].is_writable);
    }
}
